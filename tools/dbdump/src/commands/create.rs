use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dbcodec_core::{FieldDescriptor, RawDataCodec, Schema, TypeDescriptor};
use dbcodec_io::{FileHandle, ValueWriter};

#[derive(Args)]
pub struct CreateArgs {
    /// Output file path (overwritten)
    output: PathBuf,

    /// Schema name
    #[arg(short, long)]
    name: String,

    /// Field as name:KIND or name:KIND(modifier), e.g. id:INTEGER(32); repeatable
    #[arg(short, long = "field", value_parser = parse_field)]
    fields: Vec<FieldDescriptor>,
}

impl CreateArgs {
    pub fn run(self, codec: RawDataCodec) -> Result<()> {
        let schema = Schema::new(self.name, self.fields)?;
        let mut handle = FileHandle::create(&self.output)?;
        let length = ValueWriter::new(&mut handle, codec)
            .write_schema(&schema, Some(0))
            .with_context(|| format!("failed to write schema to {}", self.output.display()))?;

        eprintln!("Written {length} bytes to {}", self.output.display());
        Ok(())
    }
}

fn parse_field(s: &str) -> Result<FieldDescriptor, String> {
    let (name, ty) = s
        .split_once(':')
        .ok_or_else(|| format!("expected name:TYPE, got '{s}'"))?;
    let ty: TypeDescriptor = ty.parse().map_err(|e| format!("{e}"))?;
    Ok(FieldDescriptor::new(name, ty))
}
