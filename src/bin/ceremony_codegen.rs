// Ceremony code generator entry point
//
// Purpose: Print `ClanCeremony.<Key>: "<description>"` lines for a ceremony JSON table
// Usage: cargo run --bin ceremony_codegen -- path/to/Master.json

use std::path::PathBuf;

use anyhow::Context;
use ceremony_codegen::{CeremonyGenerator, GeneratorConfig, DEFAULT_ENUM_NAME, DEFAULT_INDENT};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Generate enum-member lines from a ceremony JSON table
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON object mapping ceremony keys to `[id, description]` arrays
    #[arg(env = "CEREMONY_SOURCE")]
    input: PathBuf,

    /// Enum the generated members belong to
    #[arg(long, env = "CEREMONY_ENUM", default_value = DEFAULT_ENUM_NAME)]
    enum_name: String,

    /// Leading spaces on each line
    #[arg(long, default_value_t = DEFAULT_INDENT)]
    indent: usize,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout only carries generated lines
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ceremony_codegen=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = GeneratorConfig::new(&args.input)
        .with_enum_name(args.enum_name)
        .with_indent(args.indent);
    if let Some(output) = args.output {
        config = config.with_output(output);
    }

    let summary = CeremonyGenerator::run(&config)
        .inspect_err(|err| tracing::error!("{}", err))
        .with_context(|| format!("failed to generate ceremonies from {}", args.input.display()))?;

    tracing::info!("Generated {} ceremony lines", summary.lines);
    Ok(())
}
