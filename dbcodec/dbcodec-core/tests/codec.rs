use dbcodec_core::{
    ConversionError, DataType, Endianness, RawDataCodec, TypeDescriptor, Value, reverse_bytes,
};

fn ty(kind: DataType, modifier: u64) -> TypeDescriptor {
    TypeDescriptor::new(kind, modifier)
}

#[test]
fn single_byte_decodes_identically_in_both_orders() {
    for byte in [0x00, 0x01, 0x7f, 0xff] {
        assert_eq!(RawDataCodec::little().decode_uint(&[byte]), u64::from(byte));
        assert_eq!(RawDataCodec::big().decode_uint(&[byte]), u64::from(byte));
    }
}

#[test]
fn little_and_big_accumulate_in_opposite_orders() {
    let bytes = [0x01, 0x02, 0x03];
    let little = RawDataCodec::little().decode_uint(&bytes);
    let big = RawDataCodec::big().decode_uint(&bytes);
    assert_eq!(little, 0x03_02_01);
    assert_eq!(big, 0x01_02_03);

    let mut reversed = bytes;
    reverse_bytes(&mut reversed);
    assert_eq!(RawDataCodec::big().decode_uint(&reversed), little);
}

#[test]
fn full_width_decode() {
    let bytes = [0xef, 0xcd, 0xab, 0x89, 0x67, 0x45, 0x23, 0x01];
    assert_eq!(
        RawDataCodec::little().decode_uint(&bytes),
        0x0123_4567_89ab_cdef
    );
}

#[test]
fn empty_range_decodes_to_zero() {
    assert_eq!(RawDataCodec::little().decode_uint(&[]), 0);
}

#[test]
#[should_panic(expected = "cannot decode 3 bytes into a 2-byte integer")]
fn decode_wider_than_target_panics() {
    RawDataCodec::little().decode_integer::<2>(&[1, 2, 3]);
}

#[test]
#[should_panic]
fn decode_wider_than_native_size_panics() {
    RawDataCodec::little().decode_uint(&[0; 9]);
}

#[test]
fn reverse_bytes_in_place() {
    let mut bytes = [1, 2, 3, 4, 5];
    reverse_bytes(&mut bytes);
    assert_eq!(bytes, [5, 4, 3, 2, 1]);

    let mut empty: [u8; 0] = [];
    reverse_bytes(&mut empty);
}

#[test]
fn encode_uint_honors_endianness() {
    assert_eq!(RawDataCodec::little().encode_uint(0x0102, 2), [0x02, 0x01]);
    assert_eq!(RawDataCodec::big().encode_uint(0x0102, 2), [0x01, 0x02]);
    assert_eq!(RawDataCodec::big().encode_uint(7, 8), [0, 0, 0, 0, 0, 0, 0, 7]);

    for codec in [RawDataCodec::little(), RawDataCodec::big()] {
        let encoded = codec.encode_uint(0xdead_beef, 4);
        assert_eq!(codec.decode_uint(&encoded), 0xdead_beef);
    }
}

#[test]
#[should_panic(expected = "does not fit")]
fn encode_uint_rejects_overflowing_value() {
    RawDataCodec::little().encode_uint(0x1_0000, 2);
}

#[test]
fn stringize_integer() {
    let codec = RawDataCodec::little();
    assert_eq!(
        codec.stringize(&[0x01, 0x00, 0x00, 0x00], ty(DataType::Integer, 32)).unwrap(),
        "1"
    );
    assert_eq!(
        RawDataCodec::big()
            .stringize(&[0x00, 0x00, 0x01, 0x00], ty(DataType::Integer, 32))
            .unwrap(),
        "256"
    );
}

#[test]
fn stringize_integer_at_native_width_fails() {
    let codec = RawDataCodec::little();
    let err = codec
        .stringize(&[0; 8], ty(DataType::Integer, 64))
        .unwrap_err();
    assert_eq!(
        err,
        ConversionError::IntegerTooWide {
            kind: DataType::Integer,
            size: 8,
            limit: 8,
        }
    );

    assert_eq!(
        codec.stringize(&[0xff; 7], ty(DataType::Integer, 56)).unwrap(),
        "72057594037927935"
    );
}

#[test]
fn stringize_date_needs_four_bytes() {
    let codec = RawDataCodec::little();
    let err = codec.stringize(&[1, 2, 3], ty(DataType::Date, 0)).unwrap_err();
    assert_eq!(
        err,
        ConversionError::NotEnoughBytes {
            kind: DataType::Date,
            needed: 4,
            actual: 3,
        }
    );

    let text = codec
        .stringize(&[17, 4, 0xd0, 0x07], ty(DataType::Date, 0))
        .unwrap();
    assert_eq!(text, "17 : 4 : 2000");
    assert_eq!(text.split(" : ").count(), 3);
}

#[test]
fn big_endian_date_year() {
    let value = RawDataCodec::big()
        .decode_value(&[1, 12, 0x07, 0xd0], ty(DataType::Date, 0))
        .unwrap();
    assert_eq!(
        value,
        Value::Date {
            day: 1,
            month: 12,
            year: 2000,
        }
    );
}

#[test]
fn stringize_float_selects_width_from_descriptor() {
    for codec in [RawDataCodec::little(), RawDataCodec::big()] {
        let single = codec.encode_f32(1.5);
        assert_eq!(codec.stringize(&single, ty(DataType::Float, 24)).unwrap(), "1.5");

        let double = codec.encode_f64(-2.25);
        assert_eq!(codec.stringize(&double, ty(DataType::Time, 48)).unwrap(), "-2.25");
    }

    let value = RawDataCodec::little()
        .decode_value(&RawDataCodec::little().encode_f64(0.1), ty(DataType::Float, 53))
        .unwrap_err();
    assert!(matches!(value, ConversionError::FloatTooWide { size: 12, .. }));
}

#[test]
fn decode_float_returns_matching_width() {
    let codec = RawDataCodec::new(Endianness::Little);
    assert!(matches!(
        codec.decode_float(&codec.encode_f32(3.0), ty(DataType::Float, 10)),
        Ok(Value::Float(v)) if v == 3.0
    ));
    assert!(matches!(
        codec.decode_float(&codec.encode_f64(3.0), ty(DataType::Float, 30)),
        Ok(Value::Double(v)) if v == 3.0
    ));
}

#[test]
fn stringize_character_and_binary_verbatim() {
    let codec = RawDataCodec::little();
    assert_eq!(codec.stringize(b"abc", ty(DataType::Character, 3)).unwrap(), "abc");
    assert_eq!(codec.stringize(&[0x41, 0x42], ty(DataType::Binary, 2)).unwrap(), "AB");
    assert_eq!(
        codec.decode_value(&[0x00, 0xff], ty(DataType::Binary, 2)).unwrap(),
        Value::Binary(vec![0x00, 0xff])
    );
}

#[test]
fn stringize_boolean() {
    let codec = RawDataCodec::little();
    let boolean = ty(DataType::Boolean, 0);
    assert_eq!(codec.stringize(&[0], boolean).unwrap(), "false");
    assert_eq!(codec.stringize(&[1], boolean).unwrap(), "true");
    assert_eq!(codec.stringize(&[0x80], boolean).unwrap(), "true");
    assert!(matches!(
        codec.stringize(&[], boolean),
        Err(ConversionError::NotEnoughBytes { needed: 1, .. })
    ));
}

#[test]
fn conversion_error_message_names_the_type() {
    let err = RawDataCodec::little()
        .stringize(&[0; 2], ty(DataType::Date, 0))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "data conversion failure: DATE needs at least 4 bytes, got 2"
    );
}

#[test]
fn high_bytes_keep_their_code_points() {
    let codec = RawDataCodec::little();
    let text = codec
        .stringize(&[b'c', 0xe9, 0xff], ty(DataType::Character, 3))
        .unwrap();
    assert_eq!(text, "c\u{e9}\u{ff}");
    assert_eq!(text.chars().map(|c| c as u8).collect::<Vec<_>>(), [b'c', 0xe9, 0xff]);
    assert_eq!(
        codec.stringize(&[0xe9], ty(DataType::Binary, 1)).unwrap(),
        "\u{e9}"
    );
}
