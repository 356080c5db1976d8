use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dbcodec_core::{HEADER_WIDTH, RawDataCodec};
use dbcodec_io::{HandleStore, StreamGoal, ValueReader};

#[derive(Args)]
pub struct SchemaArgs {
    /// File holding a header-prefixed schema record
    input: PathBuf,

    /// Byte offset of the schema record
    #[arg(long, default_value_t = 0)]
    offset: u64,
}

impl SchemaArgs {
    pub fn run(self, codec: RawDataCodec) -> Result<()> {
        let mut store = HandleStore::new();
        let handle = store.acquire(&self.input, StreamGoal::Read)?;
        let schema = ValueReader::new(handle, codec)
            .read_schema(Some(self.offset))
            .with_context(|| format!("failed to read schema from {}", self.input.display()))?;

        print!("{schema}");
        println!(
            "record size: {} bytes ({HEADER_WIDTH} header + {} metadata)",
            HEADER_WIDTH + schema.metadata_size(),
            schema.metadata_size()
        );
        match schema.data_size() {
            Some(size) => println!("row size: {size} bytes"),
            None => println!("row size: overflows the address space"),
        }
        Ok(())
    }
}
