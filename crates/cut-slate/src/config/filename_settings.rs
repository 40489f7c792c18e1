use crate::config::default_version_prefix;

use cut_slate_core::{CoreResult, ElementKind, FilenameConfig, Prefixes};
use serde::{Deserialize, Serialize};

/// Filename element order and prefixes as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilenameSettings {
    /// Element order; must name each of part, scene, cut, version once.
    #[serde(default = "default_order")]
    pub order: Vec<ElementKind>,
    /// Per-element prefixes.
    #[serde(default)]
    pub prefixes: PrefixSettings,
}

/// Per-element prefixes. Part and scene prefixes are prepended to the name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefixSettings {
    /// Part prefix.
    #[serde(default)]
    pub part: String,
    /// Scene prefix.
    #[serde(default)]
    pub scene: String,
    /// Cut prefix.
    #[serde(default)]
    pub cut: String,
    /// Version prefix.
    #[serde(default = "default_version_prefix")]
    pub version: String,
}

fn default_order() -> Vec<ElementKind> {
    ElementKind::ALL.to_vec()
}

impl Default for FilenameSettings {
    fn default() -> Self {
        Self {
            order: default_order(),
            prefixes: PrefixSettings::default(),
        }
    }
}

impl Default for PrefixSettings {
    fn default() -> Self {
        Self {
            part: String::new(),
            scene: String::new(),
            cut: String::new(),
            version: default_version_prefix(),
        }
    }
}

impl FilenameSettings {
    /// Validated filename config.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOrder` if `order` is not a permutation of the four kinds.
    #[track_caller]
    pub fn filename_config(&self) -> CoreResult<FilenameConfig> {
        let prefixes = Prefixes::from([
            (ElementKind::Part, self.prefixes.part.as_str()),
            (ElementKind::Scene, self.prefixes.scene.as_str()),
            (ElementKind::Cut, self.prefixes.cut.as_str()),
            (ElementKind::Version, self.prefixes.version.as_str()),
        ]);
        FilenameConfig::new(&self.order, prefixes)
    }
}
