use crate::{cut::DEFAULT_VERSION_PREFIX, filename::ElementKind};

use std::collections::BTreeMap;

/// Per-element prefix strings.
///
/// A kind with no entry is treated as an explicit empty prefix, so
/// [`Prefixes::empty`] suppresses every default including the version's `v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefixes(BTreeMap<ElementKind, String>);

impl Default for Prefixes {
    fn default() -> Self {
        ElementKind::ALL
            .into_iter()
            .map(|kind| {
                let prefix = match kind {
                    ElementKind::Version => DEFAULT_VERSION_PREFIX,
                    _ => "",
                };
                (kind, prefix.to_string())
            })
            .collect()
    }
}

impl Prefixes {
    /// A mapping with no entries: every prefix is an explicit empty string.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Prefix for `kind`, or `""` when none is set.
    pub fn get(&self, kind: ElementKind) -> &str {
        self.0.get(&kind).map(String::as_str).unwrap_or_default()
    }

    /// Sets the prefix for `kind`.
    pub fn set(&mut self, kind: ElementKind, prefix: impl Into<String>) {
        self.0.insert(kind, prefix.into());
    }
}

impl FromIterator<(ElementKind, String)> for Prefixes {
    fn from_iter<I: IntoIterator<Item = (ElementKind, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(ElementKind, &str); N]> for Prefixes {
    fn from(entries: [(ElementKind, &str); N]) -> Self {
        entries
            .into_iter()
            .map(|(kind, prefix)| (kind, prefix.to_string()))
            .collect()
    }
}
