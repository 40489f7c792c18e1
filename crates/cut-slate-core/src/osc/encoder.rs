//! Encoding of one logical `(address, value)` message into each wire dialect.
//!
//! The binary framing follows OSC 1.0: every string is NUL-terminated and
//! padded to a 4-byte boundary, numeric arguments are big-endian.

use crate::osc::{OscValue, WireDialect};

const OSC_ALIGNMENT: usize = 4;

/// Encodes `address` and an optional `value` in `dialect`.
///
/// Never fails. In the text dialects an absent value leaves only the address.
pub fn encode(dialect: WireDialect, address: &str, value: Option<&OscValue>) -> Vec<u8> {
    match dialect {
        WireDialect::Standard => encode_standard(address, value),
        WireDialect::SpaceDelimited => encode_text(address, " ", value),
        WireDialect::CommaDelimited => encode_text(address, ",", value),
        WireDialect::Raw => encode_text(address, "", value),
    }
}

fn encode_text(address: &str, separator: &str, value: Option<&OscValue>) -> Vec<u8> {
    match value {
        Some(value) => format!("{address}{separator}{value}").into_bytes(),
        None => address.as_bytes().to_vec(),
    }
}

fn encode_standard(address: &str, value: Option<&OscValue>) -> Vec<u8> {
    let mut packet = Vec::with_capacity(64);
    write_padded_str(&mut packet, address);

    let mut type_tags = String::from(",");
    if let Some(value) = value {
        type_tags.push(value.type_tag());
    }
    write_padded_str(&mut packet, &type_tags);

    match value {
        Some(OscValue::Int(v)) => packet.extend_from_slice(&v.to_be_bytes()),
        Some(OscValue::Float(v)) => packet.extend_from_slice(&v.to_be_bytes()),
        Some(OscValue::Str(v)) => write_padded_str(&mut packet, v),
        None => {}
    }

    packet
}

/// Appends `s` with a NUL terminator and zero padding to the next 4-byte boundary.
fn write_padded_str(packet: &mut Vec<u8>, s: &str) {
    packet.extend_from_slice(s.as_bytes());
    let padding = OSC_ALIGNMENT - (s.len() % OSC_ALIGNMENT);
    packet.extend(std::iter::repeat_n(0u8, padding));
}
