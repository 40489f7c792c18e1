mod identity;

pub use identity::{CutIdentity, sanitize};

pub(crate) const DEFAULT_PART_NAME: &str = "Part1";
pub(crate) const DEFAULT_SCENE_NAME: &str = "Scene1";
pub(crate) const DEFAULT_VERSION_PREFIX: &str = "v";
