use crate::{
    CoreResult, SlateError,
    cut::{DEFAULT_PART_NAME, DEFAULT_SCENE_NAME, DEFAULT_VERSION_PREFIX},
};

use std::{num::NonZeroU32, panic::Location};

use error_location::ErrorLocation;
use tracing::debug;

/// Characters that are not allowed in recorder filenames.
const RESERVED_FILENAME_CHARS: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Replace every reserved filename character in `name` with `_`.
///
/// Only applied to free-text fields (part and scene), never to the
/// zero-padded numeric fields.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if RESERVED_FILENAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Identity of the cut that will be recorded next.
///
/// Cut number and version are `NonZeroU32`, so the positive-integer
/// invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutIdentity {
    part_name: String,
    scene_name: String,
    cut_number: NonZeroU32,
    version: NonZeroU32,
}

impl Default for CutIdentity {
    fn default() -> Self {
        Self {
            part_name: DEFAULT_PART_NAME.to_string(),
            scene_name: DEFAULT_SCENE_NAME.to_string(),
            cut_number: NonZeroU32::MIN,
            version: NonZeroU32::MIN,
        }
    }
}

impl CutIdentity {
    /// Creates an identity at cut 1, version 1 with the given labels.
    pub fn new(part_name: impl Into<String>, scene_name: impl Into<String>) -> Self {
        Self {
            part_name: part_name.into(),
            scene_name: scene_name.into(),
            ..Self::default()
        }
    }

    /// Raw part name as entered.
    pub fn part_name(&self) -> &str {
        &self.part_name
    }

    /// Raw scene name as entered.
    pub fn scene_name(&self) -> &str {
        &self.scene_name
    }

    /// Current cut number.
    pub fn cut_number(&self) -> NonZeroU32 {
        self.cut_number
    }

    /// Current version (take) of the cut.
    pub fn version(&self) -> NonZeroU32 {
        self.version
    }

    /// Overwrites the part name.
    pub fn set_part_name(&mut self, part_name: impl Into<String>) {
        self.part_name = part_name.into();
    }

    /// Overwrites the scene name.
    pub fn set_scene_name(&mut self, scene_name: impl Into<String>) {
        self.scene_name = scene_name.into();
    }

    /// Overwrites the cut number. The version is left untouched.
    pub fn set_cut_number(&mut self, cut_number: NonZeroU32) {
        self.cut_number = cut_number;
    }

    /// Overwrites the version.
    pub fn set_version(&mut self, version: NonZeroU32) {
        self.version = version;
    }

    /// Overwrites the cut number from an unchecked integer.
    ///
    /// # Errors
    ///
    /// Returns [`SlateError::InvalidNumber`] for zero.
    #[track_caller]
    pub fn try_set_cut_number(&mut self, cut_number: u32) -> CoreResult<()> {
        self.cut_number = positive("cut number", cut_number)?;
        Ok(())
    }

    /// Overwrites the version from an unchecked integer.
    ///
    /// # Errors
    ///
    /// Returns [`SlateError::InvalidNumber`] for zero.
    #[track_caller]
    pub fn try_set_version(&mut self, version: u32) -> CoreResult<()> {
        self.version = positive("version", version)?;
        Ok(())
    }

    /// Moves to the next cut and restarts its version at 1.
    pub fn advance_cut(&mut self) {
        self.cut_number = self.cut_number.saturating_add(1);
        self.version = NonZeroU32::MIN;
        debug!(cut_number = self.cut_number.get(), "Advanced to next cut");
    }

    /// Moves to the next version of the current cut.
    pub fn advance_version(&mut self) {
        self.version = self.version.saturating_add(1);
        debug!(version = self.version.get(), "Advanced to next version");
    }

    /// Cut number zero-padded to three digits, after `prefix`.
    ///
    /// `None` means no prefix is configured, which for the cut is empty.
    pub fn formatted_cut(&self, prefix: Option<&str>) -> String {
        format!("{}{:03}", prefix.unwrap_or_default(), self.cut_number)
    }

    /// Version zero-padded to two digits, after `prefix`.
    ///
    /// `None` falls back to the `v` prefix. `Some("")` is an explicit empty
    /// prefix and suppresses it.
    pub fn formatted_version(&self, prefix: Option<&str>) -> String {
        format!(
            "{}{:02}",
            prefix.unwrap_or(DEFAULT_VERSION_PREFIX),
            self.version
        )
    }

    /// Part label for display.
    ///
    /// A non-empty prefix replaces the name outright and acts as an override
    /// label; it is not prepended like the cut and version prefixes.
    pub fn formatted_part(&self, prefix: Option<&str>) -> String {
        label_or_name(prefix, &self.part_name)
    }

    /// Scene label for display. Same override rule as [`Self::formatted_part`].
    pub fn formatted_scene(&self, prefix: Option<&str>) -> String {
        label_or_name(prefix, &self.scene_name)
    }
}

fn label_or_name(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => name.to_string(),
    }
}

#[track_caller]
fn positive(field: &'static str, value: u32) -> CoreResult<NonZeroU32> {
    NonZeroU32::new(value).ok_or_else(|| SlateError::InvalidNumber {
        field,
        location: ErrorLocation::from(Location::caller()),
    })
}
