//! Generation run
//!
//! Load → validate → emit. Any failure aborts the run; since the document is
//! validated in full before the first line is written, a bad entry never
//! leaves a partial block behind.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use crate::config::GeneratorConfig;
use crate::document::CeremonyDocument;
use crate::error::Result;
use crate::formatters::EnumEntryFormatter;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Lines emitted, one per entry
    pub lines: usize,

    /// File written, `None` for stdout
    pub output: Option<PathBuf>,
}

/// Run a generation with the sink named by the config
///
/// Shorthand for `CeremonyGenerator::run`.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationSummary> {
    CeremonyGenerator::run(config)
}

/// Drives a single generation run
pub struct CeremonyGenerator;

impl CeremonyGenerator {
    /// Run with the sink named by the config (output file or stdout)
    pub fn run(config: &GeneratorConfig) -> Result<GenerationSummary> {
        match &config.output {
            Some(path) => {
                config.validate()?;
                let document = CeremonyDocument::load(&config.input)?;
                let mut writer = BufWriter::new(File::create(path)?);
                let lines = Self::emit(&document, config, &mut writer)?;
                tracing::info!("Wrote {} lines to {}", lines, path.display());
                Ok(GenerationSummary { lines, output: Some(path.clone()) })
            }
            None => {
                let stdout = io::stdout();
                let mut writer = BufWriter::new(stdout.lock());
                Self::run_to(config, &mut writer)
            }
        }
    }

    /// Run against an arbitrary writer, ignoring `config.output`
    pub fn run_to<W: Write>(config: &GeneratorConfig, writer: &mut W) -> Result<GenerationSummary> {
        config.validate()?;
        let document = CeremonyDocument::load(&config.input)?;
        let lines = Self::emit(&document, config, writer)?;
        Ok(GenerationSummary { lines, output: None })
    }

    fn emit<W: Write>(
        document: &CeremonyDocument,
        config: &GeneratorConfig,
        writer: &mut W,
    ) -> Result<usize> {
        let start = Instant::now();
        let lines = EnumEntryFormatter::write_all(document, &config.render, writer)?;
        tracing::debug!("Emitted {} lines in {:?}", lines, start.elapsed());
        Ok(lines)
    }
}
