//! Element order and prefixes used to build recorder filenames.
//!
//! All mutation goes through validated setters; a rejected request leaves
//! the previous order and prefixes untouched.

use crate::{
    CoreResult, CutIdentity, SlateError,
    filename::{ELEMENT_COUNT, ElementKind, Prefixes, generate_filename},
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};

/// Display order and prefixes of the filename elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameConfig {
    element_order: [ElementKind; ELEMENT_COUNT],
    prefixes: Prefixes,
}

impl Default for FilenameConfig {
    fn default() -> Self {
        Self {
            element_order: ElementKind::ALL,
            prefixes: Prefixes::default(),
        }
    }
}

impl FilenameConfig {
    /// Builds a config from an order and prefixes, validating the order.
    ///
    /// # Errors
    ///
    /// Returns [`SlateError::InvalidOrder`] if `order` is not a permutation
    /// of the four element kinds.
    #[track_caller]
    pub fn new(order: &[ElementKind], prefixes: Prefixes) -> CoreResult<Self> {
        let mut config = Self {
            prefixes,
            ..Self::default()
        };
        config.set_order(order)?;
        Ok(config)
    }

    /// Current element order.
    pub fn order(&self) -> &[ElementKind; ELEMENT_COUNT] {
        &self.element_order
    }

    /// Current prefixes.
    pub fn prefixes(&self) -> &Prefixes {
        &self.prefixes
    }

    /// Prefix configured for `kind`.
    pub fn prefix(&self, kind: ElementKind) -> &str {
        self.prefixes.get(kind)
    }

    /// Replaces the whole order.
    ///
    /// # Errors
    ///
    /// Returns [`SlateError::InvalidOrder`] when `new_order` has a missing or
    /// duplicated element. The previous order is kept.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn set_order(&mut self, new_order: &[ElementKind]) -> CoreResult<()> {
        let order = match <[ElementKind; ELEMENT_COUNT]>::try_from(new_order) {
            Ok(order) if is_permutation(&order) => order,
            _ => {
                warn!(?new_order, "Rejected element order");
                return Err(SlateError::InvalidOrder {
                    order: render_order(new_order),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        self.element_order = order;
        info!(order = %render_order(&self.element_order), "Element order updated");

        Ok(())
    }

    /// Swaps `kind` with its predecessor. Returns `false` if it is already first.
    pub fn move_up(&mut self, kind: ElementKind) -> bool {
        match self.position(kind) {
            Some(idx) if idx > 0 => {
                self.element_order.swap(idx, idx - 1);
                debug!(%kind, order = %render_order(&self.element_order), "Moved element up");
                true
            }
            _ => false,
        }
    }

    /// Swaps `kind` with its successor. Returns `false` if it is already last.
    pub fn move_down(&mut self, kind: ElementKind) -> bool {
        match self.position(kind) {
            Some(idx) if idx + 1 < ELEMENT_COUNT => {
                self.element_order.swap(idx, idx + 1);
                debug!(%kind, order = %render_order(&self.element_order), "Moved element down");
                true
            }
            _ => false,
        }
    }

    /// [`Self::move_up`] addressed by element name.
    ///
    /// # Errors
    ///
    /// Returns [`SlateError::InvalidKind`] for an unknown name.
    #[track_caller]
    pub fn move_up_by_name(&mut self, name: &str) -> CoreResult<bool> {
        let kind = name.parse()?;
        Ok(self.move_up(kind))
    }

    /// [`Self::move_down`] addressed by element name.
    ///
    /// # Errors
    ///
    /// Returns [`SlateError::InvalidKind`] for an unknown name.
    #[track_caller]
    pub fn move_down_by_name(&mut self, name: &str) -> CoreResult<bool> {
        let kind = name.parse()?;
        Ok(self.move_down(kind))
    }

    /// Sets the prefix of one element.
    pub fn set_prefix(&mut self, kind: ElementKind, prefix: impl Into<String>) {
        let prefix = prefix.into();
        debug!(%kind, prefix = %prefix, "Prefix updated");
        self.prefixes.set(kind, prefix);
    }

    /// [`Self::set_prefix`] addressed by element name.
    ///
    /// # Errors
    ///
    /// Returns [`SlateError::InvalidKind`] for an unknown name; no prefix changes.
    #[track_caller]
    pub fn set_prefix_by_name(&mut self, name: &str, prefix: impl Into<String>) -> CoreResult<()> {
        let kind = name.parse()?;
        self.set_prefix(kind, prefix);
        Ok(())
    }

    /// Sets several prefixes at once. Kinds not mentioned keep their prefix.
    pub fn set_prefixes(&mut self, prefixes: impl IntoIterator<Item = (ElementKind, String)>) {
        for (kind, prefix) in prefixes {
            self.set_prefix(kind, prefix);
        }
    }

    /// Restores the default order and prefixes.
    pub fn reset(&mut self) {
        *self = Self::default();
        info!("Filename settings reset to defaults");
    }

    /// Filename for `identity` using this config's order and prefixes.
    pub fn filename_for(&self, identity: &CutIdentity) -> String {
        generate_filename(identity, Some(&self.element_order), Some(&self.prefixes))
    }

    fn position(&self, kind: ElementKind) -> Option<usize> {
        self.element_order.iter().position(|k| *k == kind)
    }
}

fn is_permutation(order: &[ElementKind; ELEMENT_COUNT]) -> bool {
    ElementKind::ALL.iter().all(|kind| order.contains(kind))
}

fn render_order(order: &[ElementKind]) -> String {
    order
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
