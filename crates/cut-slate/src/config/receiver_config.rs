use crate::config::default_filename_address;

use cut_slate_core::{ProfileKind, ReceiverProfile};
use serde::{Deserialize, Serialize};

/// Receiver plugin profile and command address overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiverConfig {
    /// Built-in command set to start from.
    #[serde(default)]
    pub profile: ProfileKind,
    /// Address that sets the recording filename.
    #[serde(default = "default_filename_address")]
    pub filename_address: String,
    /// Overrides the profile's start address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_address: Option<String>,
    /// Overrides the profile's stop address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_address: Option<String>,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            profile: ProfileKind::default(),
            filename_address: default_filename_address(),
            start_address: None,
            stop_address: None,
        }
    }
}

impl ReceiverConfig {
    /// Resolved profile with any address overrides applied.
    pub fn receiver_profile(&self) -> ReceiverProfile {
        let mut profile = ReceiverProfile::from_kind(self.profile);
        profile.filename_address = self.filename_address.clone();
        if let Some(start) = &self.start_address {
            profile.start_address = start.clone();
        }
        if let Some(stop) = &self.stop_address {
            profile.stop_address = stop.clone();
        }
        profile
    }
}
