//! Operator commands and their one-line console syntax.

use crate::{AppError, AppResult};

use std::{panic::Location, str::FromStr};

use cut_slate_core::ElementKind;
use error_location::ErrorLocation;

/// Commands sent from the console handler to the main application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Start when idle, stop when recording.
    ToggleRecording,
    /// Start recording.
    StartRecording,
    /// Stop recording and advance the cut.
    StopRecording,
    /// Overwrite the part label.
    SetPart(String),
    /// Overwrite the scene label.
    SetScene(String),
    /// Overwrite the cut number (validated by the session).
    SetCut(u32),
    /// Overwrite the version (validated by the session).
    SetVersion(u32),
    /// Skip to the next cut.
    NextCut,
    /// Record another version of the current cut.
    NextVersion,
    /// Replace the filename element order.
    SetOrder(Vec<ElementKind>),
    /// Move the named element one place earlier.
    MoveUp(String),
    /// Move the named element one place later.
    MoveDown(String),
    /// Set the named element's prefix; an empty prefix is explicit.
    SetPrefix {
        /// Element name as typed.
        name: String,
        /// New prefix.
        prefix: String,
    },
    /// Send an arbitrary message to the recorder, e.g. to test a receiver.
    SendRaw {
        /// Message address.
        address: String,
        /// Value as typed; interpreted as int, float, then string.
        value: Option<String>,
    },
    /// Restore default filename order and prefixes.
    ResetFilename,
    /// Log the filename the next take would use.
    Preview,
    /// Log recording state and cut identity.
    Status,
    /// Request application shutdown.
    Shutdown,
}

impl FromStr for AppCommand {
    type Err = AppError;

    #[track_caller]
    fn from_str(line: &str) -> AppResult<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "rec" | "toggle" => AppCommand::ToggleRecording,
            "start" => AppCommand::StartRecording,
            "stop" => AppCommand::StopRecording,
            "part" => AppCommand::SetPart(required(verb, rest)?.to_string()),
            "scene" => AppCommand::SetScene(required(verb, rest)?.to_string()),
            "cut" => AppCommand::SetCut(number(verb, rest)?),
            "version" => AppCommand::SetVersion(number(verb, rest)?),
            "next-cut" => AppCommand::NextCut,
            "next-version" => AppCommand::NextVersion,
            "order" => AppCommand::SetOrder(
                required(verb, rest)?
                    .split(',')
                    .map(str::parse)
                    .collect::<Result<Vec<ElementKind>, _>>()?,
            ),
            "up" => AppCommand::MoveUp(required(verb, rest)?.to_string()),
            "down" => AppCommand::MoveDown(required(verb, rest)?.to_string()),
            "prefix" => {
                let args = required(verb, rest)?;
                let (name, prefix) = match args.split_once(char::is_whitespace) {
                    Some((name, prefix)) => (name, prefix.trim()),
                    None => (args, ""),
                };
                AppCommand::SetPrefix {
                    name: name.to_string(),
                    prefix: prefix.to_string(),
                }
            }
            "send" => {
                let args = required(verb, rest)?;
                let (address, value) = match args.split_once(char::is_whitespace) {
                    Some((address, value)) => (address, Some(value.trim().to_string())),
                    None => (args, None),
                };
                AppCommand::SendRaw {
                    address: address.to_string(),
                    value,
                }
            }
            "reset" => AppCommand::ResetFilename,
            "preview" => AppCommand::Preview,
            "status" => AppCommand::Status,
            "quit" | "exit" => AppCommand::Shutdown,
            _ => {
                return Err(AppError::InvalidCommand {
                    reason: format!("unknown command {:?}", verb),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        Ok(command)
    }
}

#[track_caller]
fn required<'a>(verb: &str, rest: &'a str) -> AppResult<&'a str> {
    if rest.is_empty() {
        return Err(AppError::InvalidCommand {
            reason: format!("{} needs an argument", verb),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(rest)
}

#[track_caller]
fn number(verb: &str, rest: &str) -> AppResult<u32> {
    required(verb, rest)?
        .parse()
        .map_err(|e| AppError::InvalidCommand {
            reason: format!("{} needs a number: {}", verb, e),
            location: ErrorLocation::from(Location::caller()),
        })
}
