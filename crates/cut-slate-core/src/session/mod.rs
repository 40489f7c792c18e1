mod receiver_profile;
mod recording_session;
mod recording_state;

pub use {
    receiver_profile::{ProfileKind, ReceiverProfile, ValueConvention},
    recording_session::{RecordingSession, SessionSettings, Transition},
    recording_state::RecordingState,
};

pub(crate) const DEFAULT_FILENAME_ADDRESS: &str = "/recFileName";
pub(crate) const LEGACY_RECORDING_ADDRESS: &str = "/setRecording";
pub(crate) const VERSIONED_START_ADDRESS: &str = "/startRecording";
pub(crate) const VERSIONED_STOP_ADDRESS: &str = "/stopRecording";
