//! Recording toggle state machine driving a remote recorder.
//!
//! Start sends the filename, then the start command. Stop sends the stop
//! command, then advances the cut. State only changes after the command
//! that matters was sent successfully.

use crate::{
    CoreResult, CutIdentity, FilenameConfig, SlateError,
    osc::{Endpoint, OscValue, Transport, WireDialect, encode},
    session::{ReceiverProfile, RecordingState},
};

use std::{
    panic::Location,
    time::{Duration, Instant},
};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Where and how control messages are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSettings {
    /// Recorder host and port.
    pub endpoint: Endpoint,
    /// Wire encoding for every message.
    pub dialect: WireDialect,
    /// Command addresses and value convention.
    pub profile: ReceiverProfile,
}

/// Outcome of a successful start or stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Recording started with `filename`.
    Started {
        /// Filename that was sent to the recorder.
        filename: String,
        /// Take ID for log correlation.
        session_id: Uuid,
    },
    /// Recording stopped and the cut advanced.
    Stopped {
        /// Filename the next take will use.
        next_filename: String,
        /// Take ID of the recording that stopped.
        session_id: Uuid,
        /// Time between the start and stop commands.
        duration: Duration,
    },
}

/// Owns the cut identity and filename settings, and toggles recording on
/// the remote recorder through a [`Transport`].
///
/// Not thread-safe by design. Callers with concurrent input must funnel
/// every request through the single owner of the session.
pub struct RecordingSession<T: Transport> {
    identity: CutIdentity,
    filename_config: FilenameConfig,
    settings: SessionSettings,
    transport: T,
    state: RecordingState,
}

impl<T: Transport> RecordingSession<T> {
    /// Creates an idle session with default identity and filename settings.
    pub fn new(transport: T, settings: SessionSettings) -> Self {
        Self {
            identity: CutIdentity::default(),
            filename_config: FilenameConfig::default(),
            settings,
            transport,
            state: RecordingState::Idle,
        }
    }

    /// Replaces the starting identity.
    pub fn with_identity(mut self, identity: CutIdentity) -> Self {
        self.identity = identity;
        self
    }

    /// Replaces the filename settings.
    pub fn with_filename_config(mut self, filename_config: FilenameConfig) -> Self {
        self.filename_config = filename_config;
        self
    }

    /// Current cut identity.
    pub fn identity(&self) -> &CutIdentity {
        &self.identity
    }

    /// Mutable access for operator edits of the cut identity.
    pub fn identity_mut(&mut self) -> &mut CutIdentity {
        &mut self.identity
    }

    /// Current filename settings.
    pub fn filename_config(&self) -> &FilenameConfig {
        &self.filename_config
    }

    /// Mutable access to the filename settings. Changes still go through
    /// the validated [`FilenameConfig`] setters.
    pub fn filename_config_mut(&mut self) -> &mut FilenameConfig {
        &mut self.filename_config
    }

    /// Endpoint, dialect and profile in use.
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable access to the transport, e.g. to rebind after a network change.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Current recording state.
    pub fn state(&self) -> RecordingState {
        self.state
    }

    /// Whether the recorder was told to record.
    pub fn is_recording(&self) -> bool {
        matches!(self.state, RecordingState::Recording { .. })
    }

    /// Filename the next start would send.
    pub fn preview_filename(&self) -> String {
        self.filename_config.filename_for(&self.identity)
    }

    /// Bumps the version of the current cut.
    pub fn advance_version(&mut self) {
        self.identity.advance_version();
    }

    /// Sends one arbitrary message through the session's transport and
    /// dialect. Recording state is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SlateError::TransportFailure`] when the send fails.
    pub fn send_custom(&mut self, address: &str, value: Option<&OscValue>) -> CoreResult<usize> {
        send_message(&mut self.transport, &self.settings, address, value)
    }

    /// Starts when idle, stops when recording.
    ///
    /// # Errors
    ///
    /// Propagates the error of [`Self::start`] or [`Self::stop`].
    #[track_caller]
    pub fn toggle(&mut self) -> CoreResult<Transition> {
        match self.state {
            RecordingState::Idle => self.start(),
            RecordingState::Recording { .. } => self.stop(),
        }
    }

    /// Sends the filename and then the start command.
    ///
    /// A failed filename send is logged and recording starts anyway. Only a
    /// failed start send keeps the session idle.
    ///
    /// # Errors
    ///
    /// Returns [`SlateError::InvalidTransition`] if already recording, or
    /// [`SlateError::TransportFailure`] if the start command could not be sent.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn start(&mut self) -> CoreResult<Transition> {
        if let RecordingState::Recording { session_id, .. } = self.state {
            return Err(SlateError::InvalidTransition {
                reason: format!("already recording (session {session_id})"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let filename = self.preview_filename();
        info!(filename = %filename, "Filename computed");

        let profile = &self.settings.profile;
        let filename_value = OscValue::Str(filename.clone());
        if let Err(e) = send_message(
            &mut self.transport,
            &self.settings,
            &profile.filename_address,
            Some(&filename_value),
        ) {
            warn!(error = ?e, "Failed to send filename, starting recording anyway");
        }

        // State only changes after the start command went out.
        send_message(
            &mut self.transport,
            &self.settings,
            &profile.start_address,
            profile.start_value().as_ref(),
        )?;

        let session_id = Uuid::new_v4();
        self.state = RecordingState::Recording {
            started_at: Instant::now(),
            session_id,
        };

        info!(session_id = %session_id, filename = %filename, "Recording started");

        Ok(Transition::Started {
            filename,
            session_id,
        })
    }

    /// Sends the stop command and then advances to the next cut.
    ///
    /// # Errors
    ///
    /// Returns [`SlateError::InvalidTransition`] if idle, or
    /// [`SlateError::TransportFailure`] if the stop command could not be
    /// sent. In that case the session keeps recording and the identity is
    /// not touched, so the operator can retry.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn stop(&mut self) -> CoreResult<Transition> {
        let RecordingState::Recording {
            started_at,
            session_id,
        } = self.state
        else {
            return Err(SlateError::InvalidTransition {
                reason: "not recording".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let profile = &self.settings.profile;
        send_message(
            &mut self.transport,
            &self.settings,
            &profile.stop_address,
            profile.stop_value().as_ref(),
        )?;

        self.state = RecordingState::Idle;
        self.identity.advance_cut();

        let duration = started_at.elapsed();
        let next_filename = self.preview_filename();

        info!(
            session_id = %session_id,
            duration_ms = duration.as_millis(),
            next_filename = %next_filename,
            "Recording stopped"
        );

        Ok(Transition::Stopped {
            next_filename,
            session_id,
            duration,
        })
    }
}

fn send_message<T: Transport>(
    transport: &mut T,
    settings: &SessionSettings,
    address: &str,
    value: Option<&OscValue>,
) -> CoreResult<usize> {
    let payload = encode(settings.dialect, address, value);
    debug!(
        dialect = %settings.dialect,
        address,
        bytes = payload.len(),
        endpoint = %settings.endpoint,
        "Sending message"
    );
    transport.send(&payload, &settings.endpoint)
}
