use std::fmt;

/// Argument carried by a control message.
#[derive(Debug, Clone, PartialEq)]
pub enum OscValue {
    /// 32-bit signed integer, tagged `i`.
    Int(i32),
    /// 32-bit float, tagged `f`.
    Float(f32),
    /// UTF-8 string, tagged `s`.
    Str(String),
}

impl OscValue {
    /// Interprets operator text as an integer, then a float, then a string.
    pub fn parse_loose(text: &str) -> Self {
        if let Ok(value) = text.parse::<i32>() {
            OscValue::Int(value)
        } else if let Ok(value) = text.parse::<f32>() {
            OscValue::Float(value)
        } else {
            OscValue::Str(text.to_string())
        }
    }

    /// Type tag character for the binary framing.
    pub(crate) fn type_tag(&self) -> char {
        match self {
            OscValue::Int(_) => 'i',
            OscValue::Float(_) => 'f',
            OscValue::Str(_) => 's',
        }
    }
}

impl fmt::Display for OscValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OscValue::Int(value) => write!(f, "{value}"),
            OscValue::Float(value) => write!(f, "{value}"),
            OscValue::Str(value) => f.write_str(value),
        }
    }
}

impl From<i32> for OscValue {
    fn from(value: i32) -> Self {
        OscValue::Int(value)
    }
}

impl From<f32> for OscValue {
    fn from(value: f32) -> Self {
        OscValue::Float(value)
    }
}

impl From<&str> for OscValue {
    fn from(value: &str) -> Self {
        OscValue::Str(value.to_string())
    }
}

impl From<String> for OscValue {
    fn from(value: String) -> Self {
        OscValue::Str(value)
    }
}
