use std::fmt;

use serde::{Deserialize, Serialize};

/// Byte-level encoding used for a control message.
///
/// Receiver plugin versions disagree on framing, so the operator picks one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireDialect {
    /// Type-tagged binary framing. The only dialect that keeps the value type.
    #[default]
    Standard,
    /// Plain text `"<address> <value>"`.
    SpaceDelimited,
    /// Plain text `"<address>,<value>"`.
    CommaDelimited,
    /// Plain text `"<address><value>"` with no separator.
    Raw,
}

impl fmt::Display for WireDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WireDialect::Standard => "standard",
            WireDialect::SpaceDelimited => "space_delimited",
            WireDialect::CommaDelimited => "comma_delimited",
            WireDialect::Raw => "raw",
        };
        f.write_str(name)
    }
}
