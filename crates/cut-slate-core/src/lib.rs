//! Cut-Slate Core Library
//!
//! Tracks the identity of the cut being shot, derives the recorder filename
//! from it, and toggles a remote recorder over fire-and-forget UDP control
//! messages in one of several wire dialects.
//!
//! # Example
//!
//! ```no_run
//! use cut_slate_core::{CoreResult, RecordingSession, SessionSettings, UdpTransport};
//!
//! fn main() -> CoreResult<()> {
//!     let mut session = RecordingSession::new(UdpTransport::new(), SessionSettings::default());
//!
//!     session.start()?; // sends /recFileName Part1_Scene1_001_v01, then /setRecording 1
//!     session.stop()?; // sends /setRecording 0 and moves to cut 002
//!
//!     println!("Next: {}", session.preview_filename());
//!     Ok(())
//! }
//! ```

mod cut;
mod error;
mod filename;
mod osc;
mod session;

pub use {
    cut::{CutIdentity, sanitize},
    error::{Result as CoreResult, SlateError},
    filename::{ELEMENT_COUNT, ElementKind, FilenameConfig, Prefixes, generate_filename},
    osc::{Endpoint, OscValue, Transport, UdpTransport, WireDialect, encode},
    session::{
        ProfileKind, ReceiverProfile, RecordingSession, RecordingState, SessionSettings,
        Transition, ValueConvention,
    },
};

#[cfg(test)]
mod tests;
