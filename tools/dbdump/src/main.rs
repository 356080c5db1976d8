mod commands;
mod format;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{create::CreateArgs, row::RowArgs, schema::SchemaArgs};
use format::EndianArg;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dbdump", about = "Create and inspect dbcodec schema and row files")]
struct Cli {
    /// Byte order of numeric fields
    #[arg(long, value_enum, global = true, default_value_t = EndianArg::Little)]
    endian: EndianArg,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a schema record to a new file
    Create(CreateArgs),
    /// Print the schema stored in a file
    Schema(SchemaArgs),
    /// Render rows using a stored schema
    Row(RowArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(std::io::stderr)
        .init();

    let codec = cli.endian.codec();
    match cli.command {
        Commands::Create(args) => args.run(codec),
        Commands::Schema(args) => args.run(codec),
        Commands::Row(args) => args.run(codec),
    }
}
