//! Endianness-aware conversion between raw byte ranges and numbers.

use std::fmt::{self, Display, Formatter};

use crate::{
    data_type::{DataType, SIZE_WIDTH, TypeDescriptor},
    error::ConversionError,
    value::Value,
};

const F32_WIDTH: usize = size_of::<f32>();
const F64_WIDTH: usize = size_of::<f64>();
const DATE_WIDTH: usize = 4;

/// Byte order applied to every multi-byte numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endianness {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl Endianness {
    pub fn as_str(self) -> &'static str {
        match self {
            Endianness::Little => "little",
            Endianness::Big => "big",
        }
    }
}

impl Display for Endianness {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reverse a byte range in place.
pub fn reverse_bytes(bytes: &mut [u8]) {
    bytes.reverse();
}

/// Converts byte ranges to and from numbers under a fixed [`Endianness`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawDataCodec {
    endianness: Endianness,
}

impl RawDataCodec {
    pub fn new(endianness: Endianness) -> Self {
        Self { endianness }
    }

    pub fn little() -> Self {
        Self::new(Endianness::Little)
    }

    pub fn big() -> Self {
        Self::new(Endianness::Big)
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Decode up to `N` bytes as an unsigned base-256 numeral.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is longer than `N`; the caller's descriptor and
    /// buffer disagree.
    pub fn decode_integer<const N: usize>(&self, bytes: &[u8]) -> u64 {
        const { assert!(N <= SIZE_WIDTH, "decode width exceeds the native size type") };
        assert!(
            bytes.len() <= N,
            "cannot decode {} bytes into a {N}-byte integer",
            bytes.len()
        );

        let mut word = [0u8; SIZE_WIDTH];
        let word = &mut word[..bytes.len()];
        word.copy_from_slice(bytes);
        if self.endianness == Endianness::Big {
            reverse_bytes(word);
        }

        word.iter()
            .enumerate()
            .fold(0, |acc, (i, byte)| acc | (u64::from(*byte) << (8 * i)))
    }

    /// [`decode_integer`](Self::decode_integer) at the native size width.
    pub fn decode_uint(&self, bytes: &[u8]) -> u64 {
        self.decode_integer::<SIZE_WIDTH>(bytes)
    }

    pub fn decode_f32(&self, bytes: &[u8]) -> f32 {
        f32::from_bits(self.decode_integer::<F32_WIDTH>(bytes) as u32)
    }

    pub fn decode_f64(&self, bytes: &[u8]) -> f64 {
        f64::from_bits(self.decode_integer::<F64_WIDTH>(bytes))
    }

    /// Decode a `FLOAT`/`TIME` range as `f32` or `f64`, chosen by the
    /// descriptor's byte size.
    pub fn decode_float(&self, bytes: &[u8], ty: TypeDescriptor) -> Result<Value, ConversionError> {
        let size = ty.size();
        let bytes = &bytes[..size.min(bytes.len())];
        if size <= F32_WIDTH {
            Ok(Value::Float(self.decode_f32(bytes)))
        } else if size <= F64_WIDTH {
            Ok(Value::Double(self.decode_f64(bytes)))
        } else {
            Err(ConversionError::FloatTooWide {
                kind: ty.kind,
                size,
                max: F64_WIDTH,
            })
        }
    }

    /// Decode a byte range into a typed [`Value`] according to `ty`.
    pub fn decode_value(&self, bytes: &[u8], ty: TypeDescriptor) -> Result<Value, ConversionError> {
        match ty.kind {
            DataType::Character => Ok(Value::Text(bytes.iter().copied().map(char::from).collect())),
            DataType::Binary => Ok(Value::Binary(bytes.to_vec())),
            DataType::Float | DataType::Time => self.decode_float(bytes, ty),
            DataType::Integer => {
                let size = ty.size();
                if size >= SIZE_WIDTH {
                    return Err(ConversionError::IntegerTooWide {
                        kind: ty.kind,
                        size,
                        limit: SIZE_WIDTH,
                    });
                }
                Ok(Value::Integer(self.decode_uint(bytes)))
            }
            DataType::Boolean => {
                let byte = bytes.first().ok_or(ConversionError::NotEnoughBytes {
                    kind: ty.kind,
                    needed: 1,
                    actual: 0,
                })?;
                Ok(Value::Bool(*byte != 0))
            }
            DataType::Date => {
                if bytes.len() < DATE_WIDTH {
                    return Err(ConversionError::NotEnoughBytes {
                        kind: ty.kind,
                        needed: DATE_WIDTH,
                        actual: bytes.len(),
                    });
                }
                Ok(Value::Date {
                    day: self.decode_integer::<1>(&bytes[0..1]) as u8,
                    month: self.decode_integer::<1>(&bytes[1..2]) as u8,
                    year: self.decode_integer::<2>(&bytes[2..4]) as u16,
                })
            }
        }
    }

    /// Render a byte range as text according to `ty`.
    pub fn stringize(&self, bytes: &[u8], ty: TypeDescriptor) -> Result<String, ConversionError> {
        self.decode_value(bytes, ty).map(|value| value.to_string())
    }

    /// Encode the low `width` bytes of `value`.
    ///
    /// # Panics
    ///
    /// Panics if `width` exceeds the native size width or `value` does not
    /// fit in `width` bytes.
    pub fn encode_uint(&self, value: u64, width: usize) -> Vec<u8> {
        assert!(
            width <= SIZE_WIDTH,
            "cannot encode into {width} bytes, the native size type is {SIZE_WIDTH} bytes"
        );
        assert!(
            width == SIZE_WIDTH || value >> (8 * width) == 0,
            "value {value} does not fit in {width} bytes"
        );

        let mut bytes = value.to_le_bytes()[..width].to_vec();
        if self.endianness == Endianness::Big {
            reverse_bytes(&mut bytes);
        }
        bytes
    }

    pub fn encode_f32(&self, value: f32) -> [u8; F32_WIDTH] {
        let mut bytes = value.to_bits().to_le_bytes();
        if self.endianness == Endianness::Big {
            reverse_bytes(&mut bytes);
        }
        bytes
    }

    pub fn encode_f64(&self, value: f64) -> [u8; F64_WIDTH] {
        let mut bytes = value.to_bits().to_le_bytes();
        if self.endianness == Endianness::Big {
            reverse_bytes(&mut bytes);
        }
        bytes
    }
}
