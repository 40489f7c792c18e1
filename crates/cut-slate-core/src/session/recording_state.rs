use std::time::Instant;

use uuid::Uuid;

/// Recording state of a [`RecordingSession`](crate::RecordingSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingState {
    /// Not currently recording.
    Idle,
    /// The recorder was told to start.
    Recording {
        /// When the start command was sent.
        started_at: Instant,
        /// Unique take ID for log correlation.
        session_id: Uuid,
    },
}
