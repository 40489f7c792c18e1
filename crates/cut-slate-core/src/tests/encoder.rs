use crate::{OscValue, WireDialect, encode};

/// WHAT: Standard framing pads address and type tags, then writes a big-endian int
/// WHY: Type-tagged receivers reject misaligned packets
#[test]
fn given_int_value_when_encoding_standard_then_type_tagged_and_aligned() {
    // Given/When: /setRecording 1
    let packet = encode(WireDialect::Standard, "/setRecording", Some(&OscValue::Int(1)));

    // Then: 16-byte address, 4-byte ",i", 4-byte value
    let mut expected = b"/setRecording\0\0\0".to_vec();
    expected.extend_from_slice(b",i\0\0");
    expected.extend_from_slice(&[0, 0, 0, 1]);
    assert_eq!(packet, expected);
    assert_eq!(packet.len() % 4, 0);
}

/// WHAT: String arguments are NUL-terminated even when already aligned
/// WHY: A 4-byte-aligned string still needs a terminator in the framing
#[test]
fn given_string_value_when_encoding_standard_then_string_tag_and_padding() {
    // Given/When: 12-byte address and 20-byte filename, both already aligned
    let packet = encode(
        WireDialect::Standard,
        "/recFileName",
        Some(&OscValue::from("Part1_Scene1_001_v01")),
    );

    // Then: Each aligned string gets four NULs
    let mut expected = b"/recFileName\0\0\0\0".to_vec();
    expected.extend_from_slice(b",s\0\0");
    expected.extend_from_slice(b"Part1_Scene1_001_v01\0\0\0\0");
    assert_eq!(packet, expected);
}

/// WHAT: Float arguments use the f tag and IEEE-754 big-endian bytes
/// WHY: The standard dialect is the only one that preserves value type
#[test]
fn given_float_value_when_encoding_standard_then_float_tag() {
    // Given/When
    let packet = encode(WireDialect::Standard, "/gain", Some(&OscValue::Float(0.5)));

    // Then
    let mut expected = b"/gain\0\0\0".to_vec();
    expected.extend_from_slice(b",f\0\0");
    expected.extend_from_slice(&0.5f32.to_be_bytes());
    assert_eq!(packet, expected);
}

/// WHAT: A message without a value carries an empty type tag string
/// WHY: Versioned receivers expect bare /startRecording
#[test]
fn given_no_value_when_encoding_standard_then_empty_type_tags() {
    // Given/When
    let packet = encode(WireDialect::Standard, "/startRecording", None);

    // Then
    assert_eq!(packet, b"/startRecording\0,\0\0\0".to_vec());
}

/// WHAT: Text dialects stringify the value with their separator
/// WHY: Older plugins parse plain text with fixed separators
#[test]
fn given_text_dialects_when_encoding_then_separator_matches_dialect() {
    // Given: The same logical message
    let value = OscValue::Int(1);

    // When/Then: Each dialect's separator
    assert_eq!(
        encode(WireDialect::SpaceDelimited, "/setRecording", Some(&value)),
        b"/setRecording 1"
    );
    assert_eq!(
        encode(WireDialect::CommaDelimited, "/setRecording", Some(&value)),
        b"/setRecording,1"
    );
    assert_eq!(
        encode(WireDialect::Raw, "/setRecording", Some(&value)),
        b"/setRecording1"
    );
}

/// WHAT: Text dialects send only the address when there is no value
/// WHY: Bare commands must not carry a trailing separator
#[test]
fn given_no_value_when_encoding_text_dialects_then_address_only() {
    // Given/When/Then
    for dialect in [
        WireDialect::SpaceDelimited,
        WireDialect::CommaDelimited,
        WireDialect::Raw,
    ] {
        assert_eq!(encode(dialect, "/stopRecording", None), b"/stopRecording");
    }
}

/// WHAT: Loose parsing prefers int, then float, then string
/// WHY: Operator-typed values should keep their numeric type on the wire
#[test]
fn given_operator_text_when_parsing_loose_then_narrowest_type() {
    // Given/When/Then
    assert_eq!(OscValue::parse_loose("1"), OscValue::Int(1));
    assert_eq!(OscValue::parse_loose("2.5"), OscValue::Float(2.5));
    assert_eq!(
        OscValue::parse_loose("take two"),
        OscValue::Str("take two".to_string())
    );
}
