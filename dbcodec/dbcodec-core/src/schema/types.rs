use std::{
    fmt::{Display, Formatter, Result},
    ops::Index,
};

use crate::{
    data_type::{PACKED_SIZE, TypeDescriptor},
    error::SchemaError,
};

/// A named, typed field of a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: TypeDescriptor,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// An immutable, ordered list of fields under a schema name.
///
/// Field names need not be unique; lookups return the first match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    name: String,
    fields: Vec<FieldDescriptor>,
    metadata_size: usize,
}

impl Schema {
    /// Build a schema, rejecting empty field names and names containing NUL.
    pub fn new(
        name: impl Into<String>,
        fields: Vec<FieldDescriptor>,
    ) -> std::result::Result<Self, SchemaError> {
        let name = name.into();

        check_no_nul(&name)?;
        for (index, field) in fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(SchemaError::EmptyFieldName {
                    schema_name: name,
                    index,
                });
            }
            check_no_nul(&field.name)?;
        }

        let metadata_size = fields.iter().fold(name.len() + 1, |acc, field| {
            acc + field.name.len() + 1 + PACKED_SIZE
        });

        Ok(Self {
            name,
            fields,
            metadata_size,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Field at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn field(&self, index: usize) -> &FieldDescriptor {
        assert!(
            index < self.fields.len(),
            "field index {index} out of range for schema '{}' with {} fields",
            self.name,
            self.fields.len()
        );
        &self.fields[index]
    }

    /// Position of the first field called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Byte length of the serialized schema description, header excluded.
    pub fn metadata_size(&self) -> usize {
        self.metadata_size
    }

    /// Byte length of one row laid out according to this schema, or `None`
    /// if the field sizes overflow `usize`.
    pub fn data_size(&self) -> Option<usize> {
        self.fields
            .iter()
            .try_fold(0usize, |acc, field| acc.checked_add(field.ty.size()))
    }
}

fn check_no_nul(name: &str) -> std::result::Result<(), SchemaError> {
    if name.contains('\0') {
        return Err(SchemaError::NulInName {
            name: name.to_string(),
        });
    }
    Ok(())
}

impl Index<usize> for Schema {
    type Output = FieldDescriptor;

    fn index(&self, index: usize) -> &Self::Output {
        self.field(index)
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        super::format_schema(self, f)
    }
}
