mod cut_config;
mod filename_settings;
mod osc_config;
mod receiver_config;
#[allow(clippy::module_inception)]
mod config;

pub(crate) use {
    config::Config, cut_config::CutConfig, filename_settings::FilenameSettings,
    osc_config::OscConfig, receiver_config::ReceiverConfig,
};

pub(crate) const DEFAULT_HOST: &str = "127.0.0.1";
pub(crate) const DEFAULT_PORT: u16 = 3333;
pub(crate) const DEFAULT_FILENAME_ADDRESS: &str = "/recFileName";
pub(crate) const DEFAULT_PART_NAME: &str = "Part1";
pub(crate) const DEFAULT_SCENE_NAME: &str = "Scene1";
pub(crate) const DEFAULT_VERSION_PREFIX: &str = "v";

pub(crate) fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

pub(crate) fn default_port() -> u16 {
    DEFAULT_PORT
}

pub(crate) fn default_filename_address() -> String {
    DEFAULT_FILENAME_ADDRESS.to_string()
}

pub(crate) fn default_part_name() -> String {
    DEFAULT_PART_NAME.to_string()
}

pub(crate) fn default_scene_name() -> String {
    DEFAULT_SCENE_NAME.to_string()
}

pub(crate) fn default_version_prefix() -> String {
    DEFAULT_VERSION_PREFIX.to_string()
}
