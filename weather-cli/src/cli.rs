use anyhow::Context;
use clap::Parser;
use hyde_weather_core::{
    Config, OpenMeteoConfig, OpenMeteoProvider, Report, StatusRecord, env_file, generate,
    provider::open_meteo::DEFAULT_ENDPOINT,
};
use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "hyde_weather=debug,hyde_weather_core=debug";
const QUIET_FILTER: &str = "warn";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "hyde-weather",
    version,
    about = "Print Open-Meteo weather as a Waybar {text, tooltip} JSON line"
)]
pub struct Cli {
    /// Shell-style env file to load before reading WEATHER_* variables.
    /// May be repeated; later files win. Defaults to the HyDE state files.
    #[arg(long = "env-file", value_name = "PATH")]
    pub env_files: Vec<PathBuf>,

    /// Only log warnings and errors to stderr.
    #[arg(short, long)]
    pub quiet: bool,

    /// Forecast endpoint.
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT, hide = true)]
    pub endpoint: String,
}

impl Cli {
    /// Logs go to stderr so stdout carries nothing but the status line.
    /// `RUST_LOG` takes precedence over `--quiet`.
    pub fn init_tracing(&self) {
        let fallback = if self.quiet { QUIET_FILTER } else { DEFAULT_FILTER };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .init();
    }

    pub fn env_files(&self) -> Vec<PathBuf> {
        if self.env_files.is_empty() { env_file::default_paths() } else { self.env_files.clone() }
    }

    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let config = Config::load(&self.env_files());

        let provider_config =
            OpenMeteoConfig { endpoint: self.endpoint, ..OpenMeteoConfig::default() };

        let Report { record, exit_code } = match OpenMeteoProvider::new(provider_config) {
            Ok(provider) => generate(&config, &provider).await,
            Err(err) => {
                tracing::warn!(error = %err, "could not set up forecast client");
                Report { record: StatusRecord::fetch_failure(&err), exit_code: 1 }
            }
        };

        emit(&record)?;
        Ok(ExitCode::from(exit_code))
    }
}

fn emit(record: &StatusRecord) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    record.write_json(&mut out).context("Failed to serialize status record")?;
    writeln!(out).context("Failed to write status record to stdout")?;
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}
