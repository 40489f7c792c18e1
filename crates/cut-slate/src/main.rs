//! Cut-Slate: cut numbering and remote recorder control from the console.

mod app;
mod app_command;
mod config;
mod console_handler;
mod error;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    console_handler::ConsoleHandler,
    error::{AppError, Result as AppResult},
};

use crate::config::Config;

use std::time::Duration;

use cut_slate_core::{RecordingSession, UdpTransport};
use tokio::sync::{mpsc, watch};
use tracing::error;

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("cut_slate=debug,cut_slate_core=debug")
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let filename_config = match config.validate() {
        Ok(fc) => fc,
        Err(e) => {
            error!("Config validation failed: {:?}", e);
            std::process::exit(1);
        }
    };

    let session = RecordingSession::new(UdpTransport::new(), config.session_settings())
        .with_identity(config.starting_identity())
        .with_filename_config(filename_config);

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    let (command_tx, command_rx) = mpsc::channel(32);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    rt.block_on(async {
        let console_handler = ConsoleHandler::new(command_tx);

        let app = App {
            session,
            command_rx,
            shutdown_tx,
        };

        tokio::join!(
            async {
                if let Err(e) = console_handler.run(shutdown_rx).await {
                    error!(error = ?e, "Console handler error");
                }
            },
            async {
                if let Err(e) = app.run().await {
                    error!(error = ?e, "App error");
                }
            }
        );
    });

    // The stdin reader may still be blocked in a read; don't wait on it.
    rt.shutdown_timeout(Duration::from_secs(1));
}
