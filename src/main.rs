//! datagen-source CLI
//!
//! Reads a blob of generator output from a file or stdin, runs the source
//! pipeline and prints one JSON event per line.

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use datagen_source::engine::SourceEngine;
use datagen_source::types::SchemaFormat;

#[derive(Parser)]
#[command(name = "datagen-source", version, about = "Turn generator JSON output into typed records")]
struct Cli {
    /// Input file holding the generator output (stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Target schema format
    #[arg(short, long, value_enum, default_value_t = SchemaFormat::Plain)]
    format: SchemaFormat,

    /// Message name used to title inferred types
    #[arg(short = 'n', long, default_value = "record")]
    name: String,

    /// Key field for paired key/record emissions
    #[arg(short, long)]
    key_field: Option<String>,

    /// Pretty-print each event
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let raw = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let mut engine = SourceEngine::new(&cli.name).with_format(cli.format);
    if let Some(field) = &cli.key_field {
        engine = engine.with_key_field(field);
    }

    for event in engine.process(&raw)? {
        let line = if cli.pretty {
            serde_json::to_string_pretty(&event)?
        } else {
            serde_json::to_string(&event)?
        };
        println!("{line}");
    }

    Ok(())
}
