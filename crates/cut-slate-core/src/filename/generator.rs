use crate::{
    CutIdentity,
    cut::sanitize,
    filename::{ELEMENT_COUNT, ElementKind, FILENAME_SEPARATOR, Prefixes},
};

/// Builds the recorder filename for `identity`.
///
/// Elements appear exactly in `order` (canonical order when `None`), joined
/// by `_`. The order is used verbatim: it is not checked to be a
/// permutation, so a repeated kind is rendered twice. Use
/// [`FilenameConfig`](crate::FilenameConfig) for a validated order. With `prefixes == None` each element uses its built-in default,
/// which only gives the version a `v`. An empty [`Prefixes`] makes every
/// prefix explicitly empty.
///
/// Part and scene prefixes are prepended to the name here, then sanitized.
/// Cut and version are never sanitized.
pub fn generate_filename(
    identity: &CutIdentity,
    order: Option<&[ElementKind; ELEMENT_COUNT]>,
    prefixes: Option<&Prefixes>,
) -> String {
    order
        .unwrap_or(&ElementKind::ALL)
        .iter()
        .map(|kind| format_element(identity, *kind, prefixes))
        .collect::<Vec<_>>()
        .join(FILENAME_SEPARATOR)
}

fn format_element(
    identity: &CutIdentity,
    kind: ElementKind,
    prefixes: Option<&Prefixes>,
) -> String {
    let prefix = prefixes.map(|p| p.get(kind));

    match kind {
        ElementKind::Part => sanitize(&format!(
            "{}{}",
            prefix.unwrap_or_default(),
            identity.part_name()
        )),
        ElementKind::Scene => sanitize(&format!(
            "{}{}",
            prefix.unwrap_or_default(),
            identity.scene_name()
        )),
        ElementKind::Cut => identity.formatted_cut(prefix),
        ElementKind::Version => identity.formatted_version(prefix),
    }
}
