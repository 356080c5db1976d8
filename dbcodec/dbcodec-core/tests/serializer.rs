use dbcodec_core::{
    DataType, FieldDescriptor, HEADER_WIDTH, RawDataCodec, Schema, SchemaDecodeError,
    SchemaSerializer, TypeDescriptor,
};

fn users() -> Schema {
    Schema::new(
        "users",
        vec![
            FieldDescriptor::new("id", TypeDescriptor::new(DataType::Integer, 32)),
            FieldDescriptor::new("active", DataType::Boolean),
        ],
    )
    .unwrap()
}

fn wide() -> Schema {
    Schema::new(
        "wide",
        vec![
            FieldDescriptor::new("label", TypeDescriptor::new(DataType::Character, 12)),
            FieldDescriptor::new("blob", TypeDescriptor::new(DataType::Binary, 300)),
            FieldDescriptor::new("ratio", TypeDescriptor::new(DataType::Float, 53)),
            FieldDescriptor::new("born", DataType::Date),
            FieldDescriptor::new("at", TypeDescriptor::new(DataType::Time, 24)),
        ],
    )
    .unwrap()
}

#[test]
fn little_endian_layout() {
    let bytes = SchemaSerializer::new(RawDataCodec::little()).serialize(&users());

    let mut expected = vec![44, 0, 0, 0, 0, 0, 0, 0];
    expected.extend_from_slice(b"users\0");
    expected.extend_from_slice(b"id\0");
    expected.extend_from_slice(&[3, 0]);
    expected.extend_from_slice(&[32, 0, 0, 0, 0, 0, 0, 0]);
    expected.extend_from_slice(b"active\0");
    expected.extend_from_slice(&[2, 0]);
    expected.extend_from_slice(&[0; 8]);

    assert_eq!(bytes.as_ref(), expected.as_slice());
}

#[test]
fn big_endian_layout() {
    let bytes = SchemaSerializer::new(RawDataCodec::big()).serialize(&users());
    assert_eq!(&bytes[..HEADER_WIDTH], &[0, 0, 0, 0, 0, 0, 0, 44]);
    assert_eq!(&bytes[14..19], &[b'i', b'd', 0, 0, 3]);
    assert_eq!(&bytes[19..27], &[0, 0, 0, 0, 0, 0, 0, 32]);
}

#[test]
fn output_length_is_metadata_plus_header() {
    for schema in [users(), wide()] {
        let serializer = SchemaSerializer::default();
        let bytes = serializer.serialize(&schema);
        assert_eq!(bytes.len(), schema.metadata_size() + HEADER_WIDTH);
        assert_eq!(serializer.read_header(&bytes), Some(bytes.len() as u64));
    }
}

#[test]
fn round_trip_preserves_name_and_fields() {
    for codec in [RawDataCodec::little(), RawDataCodec::big()] {
        let serializer = SchemaSerializer::new(codec);
        for schema in [users(), wide()] {
            let bytes = serializer.serialize(&schema);
            let body = SchemaSerializer::strip_header(&bytes).unwrap();
            let decoded = serializer.deserialize(body).unwrap();

            assert_eq!(decoded.name(), schema.name());
            assert_eq!(decoded.field_count(), schema.field_count());
            assert_eq!(decoded.fields(), schema.fields());
            assert_eq!(decoded.metadata_size(), schema.metadata_size());
        }
    }
}

#[test]
fn round_trip_empty_schema() {
    let serializer = SchemaSerializer::default();
    let schema = Schema::new("nothing", Vec::new()).unwrap();
    let bytes = serializer.serialize(&schema);
    assert_eq!(bytes.len(), HEADER_WIDTH + "nothing".len() + 1);

    let decoded = serializer
        .deserialize(SchemaSerializer::strip_header(&bytes).unwrap())
        .unwrap();
    assert_eq!(decoded, schema);
}

#[test]
fn unknown_type_id_is_malformed() {
    let mut body = b"t\0f\0".to_vec();
    body.extend_from_slice(&[9, 0]);
    body.extend_from_slice(&[0; 8]);

    let err = SchemaSerializer::default().deserialize(&body).unwrap_err();
    assert_eq!(
        err,
        SchemaDecodeError::UnknownTypeId {
            field: "f".to_string(),
            type_id: 9,
        }
    );
}

#[test]
fn truncated_field_record_is_malformed() {
    let serializer = SchemaSerializer::default();
    let bytes = serializer.serialize(&users());
    let body = SchemaSerializer::strip_header(&bytes).unwrap();
    let truncated = &body[..body.len() - 3];

    let err = serializer.deserialize(truncated).unwrap_err();
    assert_eq!(
        err,
        SchemaDecodeError::TruncatedField {
            field: "active".to_string(),
            offset: 26,
            needed: 10,
            remaining: 7,
        }
    );
}

#[test]
fn missing_terminators_are_malformed() {
    let serializer = SchemaSerializer::default();
    assert_eq!(
        serializer.deserialize(b""),
        Err(SchemaDecodeError::UnterminatedName { offset: 0 })
    );
    assert_eq!(
        serializer.deserialize(b"users"),
        Err(SchemaDecodeError::UnterminatedName { offset: 0 })
    );
    assert_eq!(
        serializer.deserialize(b"users\0dangling"),
        Err(SchemaDecodeError::UnterminatedName { offset: 6 })
    );
}

#[test]
fn empty_field_name_is_malformed() {
    let mut body = b"t\0\0".to_vec();
    body.extend_from_slice(&[2, 0]);
    body.extend_from_slice(&[0; 8]);

    assert!(matches!(
        SchemaSerializer::default().deserialize(&body),
        Err(SchemaDecodeError::Invalid(_))
    ));
}

#[test]
fn non_utf8_name_is_malformed() {
    assert_eq!(
        SchemaSerializer::default().deserialize(&[0xff, 0xfe, 0]),
        Err(SchemaDecodeError::InvalidName { offset: 0 })
    );
}

#[test]
fn header_helpers_on_short_input() {
    let serializer = SchemaSerializer::default();
    assert_eq!(serializer.read_header(&[1, 2, 3]), None);
    assert_eq!(SchemaSerializer::strip_header(&[1, 2, 3]), None);
}
