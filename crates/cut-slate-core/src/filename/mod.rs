mod element_kind;
mod filename_config;
mod generator;
mod prefixes;

pub use {
    element_kind::{ELEMENT_COUNT, ElementKind},
    filename_config::FilenameConfig,
    generator::generate_filename,
    prefixes::Prefixes,
};

pub(crate) const FILENAME_SEPARATOR: &str = "_";
