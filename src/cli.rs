//! Command-line configuration for the terminal binary.

use std::fs::File;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::GameConfig;
use crate::types::DEFAULT_DROP_INTERVAL_MS;

#[derive(Debug, Clone, Parser)]
#[command(name = "tui-blocks", version, about = "Falling-block puzzle in the terminal")]
pub struct Cli {
    /// Seed for the shape sequence (defaults to the system clock)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Milliseconds between automatic one-row descents
    #[arg(
        long,
        default_value_t = DEFAULT_DROP_INTERVAL_MS,
        value_parser = clap::value_parser!(u32).range(1..=10_000)
    )]
    pub drop_interval_ms: u32,

    /// Write logs to this file (filtered by RUST_LOG, default `info`)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn game_config(&self) -> GameConfig {
        GameConfig::new(self.seed.unwrap_or_else(clock_seed))
            .with_drop_interval_ms(self.drop_interval_ms)
    }

    /// Install the file logger if `--log-file` was given.
    ///
    /// Stdout belongs to the terminal UI, so without a file nothing is logged.
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init()
            .context("failed to install logger")?;
        Ok(())
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
