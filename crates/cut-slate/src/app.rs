use crate::{AppCommand, AppResult};

use cut_slate_core::{OscValue, RecordingSession, RecordingState, Transition, Transport};
use tokio::sync::{mpsc, watch};
use tracing::{error, info, instrument};

/// Main application state.
///
/// Sole owner of the recording session. Console input arrives as
/// [`AppCommand`]s over `command_rx` and is applied one at a time, so at
/// most one start/stop transition is ever in flight.
pub struct App<T: Transport> {
    pub(crate) session: RecordingSession<T>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
}

impl<T: Transport> App<T> {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!(
            endpoint = %self.session.settings().endpoint,
            dialect = %self.session.settings().dialect,
            next_filename = %self.session.preview_filename(),
            "Cut-Slate starting"
        );

        loop {
            match self.command_rx.recv().await {
                Some(AppCommand::Shutdown) => {
                    info!("Shutdown requested");
                    break;
                }
                Some(command) => {
                    if let Err(e) = self.handle_command(command.clone()) {
                        error!(command = ?command, error = ?e, "Command failed");
                    }
                }
                None => {
                    info!("Command channel closed, shutting down");
                    break;
                }
            }
        }

        if self.session.is_recording() {
            info!("Exiting while the recorder is still recording");
        }

        let _ = self.shutdown_tx.send(true);
        info!("Cut-Slate shut down successfully");

        Ok(())
    }

    /// Apply one command to the session.
    #[instrument(skip(self))]
    pub(crate) fn handle_command(&mut self, command: AppCommand) -> AppResult<()> {
        match command {
            AppCommand::ToggleRecording => {
                let transition = self.session.toggle()?;
                log_transition(&transition);
            }
            AppCommand::StartRecording => {
                let transition = self.session.start()?;
                log_transition(&transition);
            }
            AppCommand::StopRecording => {
                let transition = self.session.stop()?;
                log_transition(&transition);
            }
            AppCommand::SetPart(name) => self.session.identity_mut().set_part_name(name),
            AppCommand::SetScene(name) => self.session.identity_mut().set_scene_name(name),
            AppCommand::SetCut(cut) => self.session.identity_mut().try_set_cut_number(cut)?,
            AppCommand::SetVersion(version) => {
                self.session.identity_mut().try_set_version(version)?
            }
            AppCommand::NextCut => self.session.identity_mut().advance_cut(),
            AppCommand::NextVersion => self.session.advance_version(),
            AppCommand::SetOrder(order) => self.session.filename_config_mut().set_order(&order)?,
            AppCommand::MoveUp(name) => {
                if !self.session.filename_config_mut().move_up_by_name(&name)? {
                    info!(element = %name, "Already first");
                }
            }
            AppCommand::MoveDown(name) => {
                if !self.session.filename_config_mut().move_down_by_name(&name)? {
                    info!(element = %name, "Already last");
                }
            }
            AppCommand::SetPrefix { name, prefix } => self
                .session
                .filename_config_mut()
                .set_prefix_by_name(&name, prefix)?,
            AppCommand::SendRaw { address, value } => {
                let value = value.as_deref().map(OscValue::parse_loose);
                let bytes = self.session.send_custom(&address, value.as_ref())?;
                info!(address = %address, value = ?value, bytes, "Message sent");
            }
            AppCommand::ResetFilename => self.session.filename_config_mut().reset(),
            AppCommand::Preview => {}
            AppCommand::Status => self.log_status(),
            AppCommand::Shutdown => {}
        }

        info!(next_filename = %self.session.preview_filename(), "Filename preview");

        Ok(())
    }

    fn log_status(&self) {
        let identity = self.session.identity();
        let recording = match self.session.state() {
            RecordingState::Idle => "idle".to_string(),
            RecordingState::Recording {
                started_at,
                session_id,
            } => format!(
                "recording {} for {} ms",
                session_id,
                started_at.elapsed().as_millis()
            ),
        };

        info!(
            state = %recording,
            part = identity.part_name(),
            scene = identity.scene_name(),
            cut = identity.cut_number().get(),
            version = identity.version().get(),
            endpoint = %self.session.settings().endpoint,
            "Status"
        );
    }
}

fn log_transition(transition: &Transition) {
    match transition {
        Transition::Started {
            filename,
            session_id,
        } => info!(session_id = %session_id, filename = %filename, "Recording"),
        Transition::Stopped {
            next_filename,
            session_id,
            duration,
        } => info!(
            session_id = %session_id,
            duration_ms = duration.as_millis(),
            next_filename = %next_filename,
            "Recording complete"
        ),
    }
}
