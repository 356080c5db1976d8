//! Typed representation of a single decoded field.

use std::fmt::{self, Display, Formatter, Write as _};

/// Value decoded from a row field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `CHARACTER` bytes, one `char` per byte.
    ///
    /// Each byte becomes the `char` with the same code point (Latin-1), so
    /// every byte survives and maps back with `as u8`. Bytes `0x80..=0xff`
    /// take two bytes in the UTF-8 text.
    Text(String),
    /// `BINARY` bytes, kept verbatim; displayed like [`Value::Text`].
    Binary(Vec<u8>),
    Bool(bool),
    Integer(u64),
    Float(f32),
    Double(f64),
    /// Coarse `DATE` triple; not calendar-validated.
    Date { day: u8, month: u8, year: u16 },
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Binary(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<u64> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Either floating point width, widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(f64::from(*v)),
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Binary(bytes) => bytes.iter().try_for_each(|b| f.write_char(char::from(*b))),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::Date { day, month, year } => write!(f, "{day} : {month} : {year}"),
        }
    }
}
