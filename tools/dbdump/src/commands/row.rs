use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dbcodec_core::RawDataCodec;
use dbcodec_io::{HandleStore, StreamGoal, ValueReader};
use tracing::debug;

#[derive(Args)]
pub struct RowArgs {
    /// File holding a header-prefixed schema record
    schema_file: PathBuf,

    /// File holding the row data
    row_file: PathBuf,

    /// Byte offset of the schema record
    #[arg(long, default_value_t = 0)]
    schema_offset: u64,

    /// Byte offset of the first row
    #[arg(long, default_value_t = 0)]
    row_offset: u64,

    /// Number of consecutive rows to render
    #[arg(short = 'n', long, default_value_t = 1)]
    count: u64,
}

impl RowArgs {
    pub fn run(self, codec: RawDataCodec) -> Result<()> {
        let mut store = HandleStore::new();

        let schema = ValueReader::new(store.acquire(&self.schema_file, StreamGoal::Read)?, codec)
            .read_schema(Some(self.schema_offset))
            .with_context(|| format!("failed to read schema from {}", self.schema_file.display()))?;

        let Some(row_size) = schema.data_size().map(|size| size as u64) else {
            anyhow::bail!("row size of schema '{}' overflows the address space", schema.name());
        };
        debug!(schema = schema.name(), row_size, count = self.count, "rendering rows");
        let mut reader = ValueReader::new(store.acquire(&self.row_file, StreamGoal::Read)?, codec);
        for i in 0..self.count {
            let position = row_position(self.row_offset, i, row_size)?;
            let row = reader
                .read_row(&schema, Some(position))
                .with_context(|| format!("failed to read row {i} at offset {position}"))?;
            if self.count > 1 {
                println!("# row {i}");
            }
            print!("{}", row.render()?);
        }
        Ok(())
    }
}

fn row_position(row_offset: u64, index: u64, row_size: u64) -> Result<u64> {
    index
        .checked_mul(row_size)
        .and_then(|delta| row_offset.checked_add(delta))
        .with_context(|| format!("offset of row {index} overflows a 64-bit file position"))
}
