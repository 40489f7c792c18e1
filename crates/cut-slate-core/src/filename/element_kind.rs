use crate::{CoreResult, SlateError};

use std::{fmt, panic::Location, str::FromStr};

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Number of elements that make up a filename.
pub const ELEMENT_COUNT: usize = 4;

/// One of the named elements composing a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Production part label.
    Part,
    /// Scene label.
    Scene,
    /// Cut number, zero-padded to three digits.
    Cut,
    /// Version of the cut, zero-padded to two digits.
    Version,
}

impl ElementKind {
    /// All kinds in canonical (default) filename order.
    pub const ALL: [ElementKind; ELEMENT_COUNT] = [
        ElementKind::Part,
        ElementKind::Scene,
        ElementKind::Cut,
        ElementKind::Version,
    ];

    /// Lowercase identifier used in config files and console commands.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Part => "part",
            ElementKind::Scene => "scene",
            ElementKind::Cut => "cut",
            ElementKind::Version => "version",
        }
    }

    /// Human-readable name for settings and preview screens.
    pub fn display_name(self) -> &'static str {
        match self {
            ElementKind::Part => "Part",
            ElementKind::Scene => "Scene",
            ElementKind::Cut => "Cut",
            ElementKind::Version => "Version",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = SlateError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SlateError::InvalidKind {
                name: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
