use crate::{AppError, config::Config};

use cut_slate_core::{ElementKind, ProfileKind, ValueConvention, WireDialect};

/// WHAT: An empty file yields the documented defaults
/// WHY: Partial configs must load without listing every field
#[test]
#[allow(clippy::unwrap_used)]
fn given_empty_toml_when_loading_then_defaults() {
    // Given/When
    let config = Config::from_toml("").unwrap();

    // Then
    assert_eq!(config.osc.endpoint().to_string(), "127.0.0.1:3333");
    assert_eq!(config.osc.dialect, WireDialect::Standard);
    assert_eq!(config.receiver.profile, ProfileKind::Legacy);
    assert_eq!(config.filename.order, ElementKind::ALL.to_vec());
    assert_eq!(config.filename.prefixes.version, "v");
    assert_eq!(
        config
            .validate()
            .unwrap()
            .filename_for(&config.starting_identity()),
        "Part1_Scene1_001_v01"
    );
}

/// WHAT: Every section is read and turned into session settings
/// WHY: Operators adapt endpoint, dialect and profile per receiver version
#[test]
#[allow(clippy::unwrap_used)]
fn given_full_toml_when_loading_then_session_settings_match() {
    // Given
    let contents = r#"
        [osc]
        host = "192.168.1.20"
        port = 4455
        dialect = "comma_delimited"

        [receiver]
        profile = "versioned"
        stop_address = "/recording/stop"

        [filename]
        order = ["scene", "cut", "version", "part"]

        [filename.prefixes]
        cut = "C"
        version = ""

        [cut]
        part_name = "Trailer"
        scene_name = "Desert"
    "#;

    // When
    let config = Config::from_toml(contents).unwrap();
    let settings = config.session_settings();
    let filename_config = config.validate().unwrap();

    // Then
    assert_eq!(settings.endpoint.to_string(), "192.168.1.20:4455");
    assert_eq!(settings.dialect, WireDialect::CommaDelimited);
    assert_eq!(settings.profile.filename_address, "/recFileName");
    assert_eq!(settings.profile.start_address, "/startRecording");
    assert_eq!(settings.profile.stop_address, "/recording/stop");
    assert_eq!(settings.profile.value_convention, ValueConvention::Bare);
    assert_eq!(
        filename_config.filename_for(&config.starting_identity()),
        "Desert_C001_01_Trailer"
    );
}

/// WHAT: Orders that are not permutations fail validation
/// WHY: A broken file must fail at startup, not at the first take
#[test]
#[allow(clippy::unwrap_used)]
fn given_duplicate_order_when_validating_then_core_error() {
    // Given
    let config = Config::from_toml(
        r#"
        [filename]
        order = ["part", "part", "cut", "version"]
        "#,
    )
    .unwrap();

    // When/Then
    assert!(matches!(config.validate(), Err(AppError::Core { .. })));
}

/// WHAT: Port 0 fails validation
/// WHY: Datagrams to port 0 can never be sent
#[test]
#[allow(clippy::unwrap_used)]
fn given_port_zero_when_validating_then_config_error() {
    // Given
    let config = Config::from_toml("[osc]\nport = 0\n").unwrap();

    // When/Then
    assert!(matches!(config.validate(), Err(AppError::ConfigError { .. })));
}

/// WHAT: Unknown dialect names are parse errors
/// WHY: Dialects are a closed set
#[test]
fn given_unknown_dialect_when_loading_then_config_error() {
    // Given/When
    let result = Config::from_toml("[osc]\ndialect = \"json\"\n");

    // Then
    assert!(matches!(result, Err(AppError::ConfigError { .. })));
}

/// WHAT: Default config survives a TOML round trip
/// WHY: The default file written on first launch must load back
#[test]
#[allow(clippy::unwrap_used)]
fn given_default_config_when_serialized_and_loaded_then_equivalent() {
    // Given
    let written = toml::to_string_pretty(&Config::default()).unwrap();

    // When
    let loaded = Config::from_toml(&written).unwrap();

    // Then
    assert_eq!(loaded.session_settings(), Config::default().session_settings());
    assert_eq!(
        loaded.filename_config().unwrap(),
        Config::default().filename_config().unwrap()
    );
}
