//! Scalar type model: the closed set of value kinds and their on-disk sizes.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::error::ParseTypeError;

/// Integer type used for lengths and modifiers on the wire.
pub type SizeType = u64;

/// Encoded width of a [`SizeType`] (header and modifier fields).
pub const SIZE_WIDTH: usize = size_of::<SizeType>();

/// Encoded width of a [`DataType`] id inside schema metadata.
pub const TYPE_ID_WIDTH: usize = size_of::<u16>();

/// Encoded width of one (type-id, modifier) pair inside schema metadata.
pub const PACKED_SIZE: usize = TYPE_ID_WIDTH + SIZE_WIDTH;

const BOOLEAN_SIZE: usize = 1;
const DATE_SIZE: usize = 4;

/// Scalar kind of a field. The discriminant is the wire type-id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum DataType {
    Character = 0,
    Binary = 1,
    Boolean = 2,
    Integer = 3,
    Float = 4,
    Date = 5,
    Time = 6,
}

impl DataType {
    /// All variants in declaration (type-id) order.
    pub const ALL: [DataType; 7] = [
        DataType::Character,
        DataType::Binary,
        DataType::Boolean,
        DataType::Integer,
        DataType::Float,
        DataType::Date,
        DataType::Time,
    ];

    pub fn id(self) -> u16 {
        self as u16
    }

    pub fn from_id(id: u16) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Character => "CHARACTER",
            DataType::Binary => "BINARY",
            DataType::Boolean => "BOOLEAN",
            DataType::Integer => "INTEGER",
            DataType::Float => "FLOAT",
            DataType::Date => "DATE",
            DataType::Time => "TIME",
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTypeError::UnknownKind(s.to_string()))
    }
}

/// A kind paired with its modifier.
///
/// The modifier is a byte count for `CHARACTER`/`BINARY`, a bit width for
/// `INTEGER` and a precision figure for `FLOAT`/`TIME`. `BOOLEAN` and `DATE`
/// ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    pub kind: DataType,
    pub modifier: SizeType,
}

impl TypeDescriptor {
    pub fn new(kind: DataType, modifier: SizeType) -> Self {
        Self { kind, modifier }
    }

    pub fn of(kind: DataType) -> Self {
        Self::new(kind, 0)
    }

    /// Number of bytes a value of this type occupies in a row.
    ///
    /// Modifiers wider than `usize` saturate to `usize::MAX`.
    pub fn size(&self) -> usize {
        let modifier = usize::try_from(self.modifier).unwrap_or(usize::MAX);
        match self.kind {
            DataType::Character | DataType::Binary => modifier,
            DataType::Boolean => BOOLEAN_SIZE,
            DataType::Date => DATE_SIZE,
            DataType::Integer => modifier / 8,
            DataType::Float | DataType::Time => 4 * modifier.div_ceil(24),
        }
    }

    /// Width of the encoded (type-id, modifier) pair; independent of the type.
    pub const fn packed_size() -> usize {
        PACKED_SIZE
    }
}

impl From<DataType> for TypeDescriptor {
    fn from(kind: DataType) -> Self {
        Self::of(kind)
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.modifier != 0 {
            write!(f, "{}({})", self.kind, self.modifier)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl FromStr for TypeDescriptor {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((kind, rest)) = s.split_once('(') else {
            return Ok(Self::of(s.parse()?));
        };
        let modifier = rest
            .strip_suffix(')')
            .ok_or_else(|| ParseTypeError::Malformed(s.to_string()))?;
        let modifier = modifier
            .trim()
            .parse()
            .map_err(|_| ParseTypeError::InvalidModifier(modifier.to_string()))?;
        Ok(Self::new(kind.parse()?, modifier))
    }
}
