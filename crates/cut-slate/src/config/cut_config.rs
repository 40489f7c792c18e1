use crate::config::{default_part_name, default_scene_name};

use serde::{Deserialize, Serialize};

/// Starting labels. Cut and version always start at 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CutConfig {
    /// Part label for the first cut.
    #[serde(default = "default_part_name")]
    pub part_name: String,
    /// Scene label for the first cut.
    #[serde(default = "default_scene_name")]
    pub scene_name: String,
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            part_name: default_part_name(),
            scene_name: default_scene_name(),
        }
    }
}
