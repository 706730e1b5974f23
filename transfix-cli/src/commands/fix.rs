//! Fix command implementation

use crate::commands::defaults::print_defaults;
use crate::error::CliResult;
use crate::input::FileReader;
use crate::mapping_source::MappingSource;
use crate::output::FileWriter;
use anyhow::{anyhow, Context};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use transfix_core::Substituter;

/// Fix transcription errors in markdown files
#[derive(Debug, Parser)]
#[command(name = "transfix", version)]
pub struct FixArgs {
    /// Input markdown file to process
    #[arg(value_name = "INPUT_FILE", required_unless_present = "print_defaults")]
    pub input: Option<PathBuf>,

    /// Output file (default: overwrite the input file)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// TOML mapping file with additional or overriding rules
    #[arg(short, long, value_name = "FILE")]
    pub mapping: Option<PathBuf>,

    /// Print the built-in rules as a mapping file and exit
    #[arg(long, conflicts_with_all = ["input", "output", "mapping"])]
    pub print_defaults: bool,

    /// Suppress confirmation messages and logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl FixArgs {
    /// Execute the command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging()?;

        if self.print_defaults {
            return print_defaults(&mut io::stdout().lock());
        }

        let input = self
            .input
            .as_deref()
            .ok_or_else(|| anyhow!("an input file is required"))?;

        log::debug!("Arguments: {:?}", self);

        let content = FileReader::read_text(input)?;

        let source = MappingSource::from_override_path(self.mapping.clone());
        log::info!("Using {}", source.display_name());
        let mapping = source.load()?;

        let substituter = Substituter::new(&mapping);
        let (fixed, report) = substituter.apply_with_report(&content);

        log::info!(
            "Applied {} replacements from {} rules",
            report.total(),
            substituter.len()
        );
        for applied in report.applied() {
            log::debug!(
                "  '{}' -> '{}': {}",
                applied.incorrect,
                applied.correct,
                applied.count
            );
        }

        // Only written once the whole transform is in memory
        let output_path = self.output.as_deref().unwrap_or(input);
        FileWriter::write_text(output_path, &fixed)?;

        if !self.quiet {
            println!("Successfully processed {}", input.display());
            if let Some(output) = &self.output {
                println!("Output written to {}", output.display());
            }
        }

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> CliResult<()> {
        if self.quiet {
            return Ok(());
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init()
            .context("Failed to initialize logging")?;

        Ok(())
    }
}
