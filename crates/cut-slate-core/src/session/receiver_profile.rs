use crate::{
    osc::OscValue,
    session::{
        DEFAULT_FILENAME_ADDRESS, LEGACY_RECORDING_ADDRESS, VERSIONED_START_ADDRESS,
        VERSIONED_STOP_ADDRESS,
    },
};

use serde::{Deserialize, Serialize};

/// Receiver plugin generation to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    /// One address toggled with `1` / `0`.
    #[default]
    Legacy,
    /// Separate start and stop addresses without a value.
    Versioned,
}

/// How start and stop commands carry a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueConvention {
    /// Start sends integer `1`, stop sends integer `0`.
    OnOff,
    /// Neither command carries a value.
    Bare,
}

/// Command names and value convention expected by one receiver revision.
///
/// Selected once from configuration; never negotiated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiverProfile {
    /// Address that sets the next recording filename.
    pub filename_address: String,
    /// Address that starts recording.
    pub start_address: String,
    /// Address that stops recording.
    pub stop_address: String,
    /// Values sent with start and stop.
    pub value_convention: ValueConvention,
}

impl Default for ReceiverProfile {
    fn default() -> Self {
        Self::legacy()
    }
}

impl ReceiverProfile {
    /// `/setRecording 1` to start, `/setRecording 0` to stop.
    pub fn legacy() -> Self {
        Self {
            filename_address: DEFAULT_FILENAME_ADDRESS.to_string(),
            start_address: LEGACY_RECORDING_ADDRESS.to_string(),
            stop_address: LEGACY_RECORDING_ADDRESS.to_string(),
            value_convention: ValueConvention::OnOff,
        }
    }

    /// `/startRecording` and `/stopRecording` with no value.
    pub fn versioned() -> Self {
        Self {
            filename_address: DEFAULT_FILENAME_ADDRESS.to_string(),
            start_address: VERSIONED_START_ADDRESS.to_string(),
            stop_address: VERSIONED_STOP_ADDRESS.to_string(),
            value_convention: ValueConvention::Bare,
        }
    }

    /// Built-in profile for `kind`.
    pub fn from_kind(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::Legacy => Self::legacy(),
            ProfileKind::Versioned => Self::versioned(),
        }
    }

    /// Value sent with the start command.
    pub fn start_value(&self) -> Option<OscValue> {
        match self.value_convention {
            ValueConvention::OnOff => Some(OscValue::Int(1)),
            ValueConvention::Bare => None,
        }
    }

    /// Value sent with the stop command.
    pub fn stop_value(&self) -> Option<OscValue> {
        match self.value_convention {
            ValueConvention::OnOff => Some(OscValue::Int(0)),
            ValueConvention::Bare => None,
        }
    }
}
