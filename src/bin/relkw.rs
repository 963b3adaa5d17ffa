//! CLI binary for relkw.

use std::path::PathBuf;

use clap::Parser;
use relkw::{OutputFormat, RunConfig, RunError, RunLog, exporter_for};
use relkw_suggest::{Engine, HttpFetcher};
use tracing_subscriber::EnvFilter;

/// relkw: collect Naver and Daum related-keyword suggestions into a spreadsheet.
#[derive(Parser)]
#[command(name = "relkw", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keyword list, one keyword per line.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory the result file is written to.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Directory holding error.log and app.log.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Result format: xlsx or json.
    #[arg(short, long, value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Engine to query (repeatable): naver, daum. Defaults to both.
    #[arg(short, long = "engine", value_parser = parse_engine)]
    engines: Vec<Engine>,
}

fn parse_engine(s: &str) -> Result<Engine, String> {
    s.parse::<Engine>().map_err(|e| e.to_string())
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    match s.to_ascii_lowercase().as_str() {
        "xlsx" => Ok(OutputFormat::Xlsx),
        "json" => Ok(OutputFormat::Json),
        other => Err(format!("unsupported format: {other}")),
    }
}

impl Cli {
    /// Load the config file (or defaults) and apply flag overrides.
    fn into_config(self) -> relkw::Result<RunConfig> {
        let mut config = match self.config {
            Some(ref path) => RunConfig::from_file(path)?,
            None => RunConfig::default(),
        };
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(dir) = self.log_dir {
            config.log_dir = dir;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if !self.engines.is_empty() {
            config.suggest.engines = self.engines;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("relkw=info,relkw_suggest=info")),
        )
        .init();

    let config = Cli::parse().into_config()?;
    config.validate()?;

    let fetcher = HttpFetcher::new(config.suggest.clone())?;
    let exporter = exporter_for(config.format, &config.output_dir);
    let mut log = RunLog::open(&config.log_dir);

    let outcome = relkw::run(&config, &fetcher, exporter.as_ref(), &mut log).await;
    log.close();

    match outcome {
        Ok(outcome) => {
            println!(
                "Collection complete: {} suggestions from {} keywords written to {}",
                outcome.total,
                outcome.keywords,
                outcome.output.display()
            );
            Ok(())
        }
        // Already in error.log; nothing else to tell the user.
        Err(RunError::KeywordSource(_)) => std::process::exit(1),
        Err(err) => Err(err.into()),
    }
}
