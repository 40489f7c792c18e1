//! Line-oriented operator console.
//!
//! Reads commands from stdin on a blocking task and forwards them to the
//! application over an async channel, so every mutation of the session
//! happens on the single task that owns it.

use crate::{AppCommand, AppError, AppResult};

use std::{
    io::{self, BufRead},
    panic::Location,
    time::Duration,
};

use error_location::ErrorLocation;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

/// Console input handler.
pub struct ConsoleHandler {
    command_tx: mpsc::Sender<AppCommand>,
}

impl ConsoleHandler {
    /// Create a handler that forwards parsed commands to `command_tx`.
    pub fn new(command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self { command_tx }
    }

    /// Run the console loop until shutdown or end of input.
    #[instrument(skip(self, shutdown_rx))]
    pub async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        let (line_tx, mut line_rx) = mpsc::channel::<String>(32);

        // Single persistent blocking task that forwards stdin lines.
        //
        // Shutdown: when line_rx is dropped (loop breaks), the next
        // line_tx.blocking_send() fails, breaking the blocking loop.
        let handle = tokio::task::spawn_blocking(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if line_tx.blocking_send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!(error = ?e, "Failed to read console input");
                        break;
                    }
                }
            }
        });

        info!("Console ready, type 'rec' to toggle recording or 'quit' to exit");

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Console handler shutting down");
                    break;
                }
                line = line_rx.recv() => {
                    match line {
                        Some(line) => self.handle_line(&line).await?,
                        None => {
                            info!("Console input closed, requesting shutdown");
                            self.send(AppCommand::Shutdown).await?;
                            break;
                        }
                    }
                }
            }
        }

        drop(line_rx);

        // Best-effort join: the blocking task may be stuck in a stdin read.
        // The task is cleaned up by the runtime on process exit regardless.
        match tokio::time::timeout(Duration::from_secs(1), handle).await {
            Ok(Ok(())) => debug!("Console reader stopped cleanly"),
            Ok(Err(e)) => warn!(error = ?e, "Console reader task panicked"),
            Err(_) => debug!(
                "Console reader did not stop within timeout, \
                   will be cleaned up on exit"
            ),
        }

        Ok(())
    }

    /// Parse one input line and forward it. Invalid lines are logged and dropped.
    #[instrument(skip(self))]
    pub(crate) async fn handle_line(&self, line: &str) -> AppResult<()> {
        if line.trim().is_empty() {
            return Ok(());
        }

        match line.parse::<AppCommand>() {
            Ok(command) => self.send(command).await,
            Err(e) => {
                warn!(error = %e, "Ignoring console input");
                Ok(())
            }
        }
    }

    async fn send(&self, command: AppCommand) -> AppResult<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send command: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
