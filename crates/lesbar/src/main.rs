use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::*;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, warn};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use lesbar::config::DEFAULT_CONFIG_FILE;
use lesbar::report::{render, NO_RESULTS};
use lesbar::{analyze, normalize, OutputFormat, ReportConfig};

/// lesbar - readability metrics for German prose
#[derive(Parser)]
#[command(name = "lesbar")]
#[command(about = "Readability and complexity metrics for German prose")]
#[command(version)]
struct Cli {
  /// Text files to analyze; reads stdin when empty or "-"
  #[arg(value_name = "PATH")]
  paths: Vec<PathBuf>,

  /// Print the cleaned text instead of a report
  #[arg(long)]
  clean: bool,

  /// Print the cleaned text above the report
  #[arg(long)]
  show_cleaned: bool,

  /// Report format
  #[arg(short, long, value_enum)]
  format: Option<OutputFormat>,

  /// Exit with status 1 when the aggregate level exceeds this value
  #[arg(short, long)]
  threshold: Option<f64>,

  /// Configuration file (defaults to .lesbar.json or the user config)
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Write a config file (to --config or .lesbar.json) with the given options and exit
  #[arg(long)]
  init_config: bool,

  /// Disable coloured output
  #[arg(long)]
  no_color: bool,

  /// Enable verbose logging
  #[arg(short, long)]
  verbose: bool,
}

fn main() {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  match run(&cli) {
    Ok(violations) if violations > 0 => process::exit(1),
    Ok(_) => {}
    Err(e) => {
      eprintln!("{} {:#}", "Error:".red().bold(), e);
      process::exit(2);
    }
  }
}

fn init_logging(verbose: bool) {
  let filter = if verbose {
    EnvFilter::new("lesbar=debug,warn")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lesbar=warn"))
  };

  tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();
}

/// Run the CLI and return how many texts broke the threshold
fn run(cli: &Cli) -> Result<usize> {
  if cli.init_config {
    init_config(cli)?;
    return Ok(0);
  }

  let config = resolve_config(cli)?;

  if !config.color || !std::io::stdout().is_terminal() {
    colored::control::set_override(false);
  }

  let inputs = if cli.paths.is_empty() { vec![PathBuf::from("-")] } else { cli.paths.clone() };
  let show_headers = inputs.len() > 1;
  let mut violations = 0;

  for path in &inputs {
    let text = read_input(path)?;
    debug!(path = %path.display(), chars = text.chars().count(), "read input");

    if show_headers {
      println!("{}", format!("==> {} <==", path.display()).bold());
    }

    if cli.clean {
      println!("{}", normalize(&text));
      continue;
    }

    let Some(result) = analyze(&text) else {
      warn!(path = %path.display(), "empty input");
      eprintln!("{NO_RESULTS}");
      continue;
    };

    if cli.show_cleaned && config.format == OutputFormat::Text {
      println!("{}", result.cleaned_text.dimmed());
      println!();
    }

    println!("{}", render(&result, &config).context("Failed to render report")?);

    if config.exceeds_threshold(result.levels.total) {
      violations += 1;
    }
  }

  Ok(violations)
}

/// Save the defaults, with command-line overrides applied, as a new config file
fn init_config(cli: &Cli) -> Result<()> {
  let path = cli.config.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
  if path.exists() {
    bail!("Config file {} already exists", path.display());
  }

  let config = apply_overrides(cli, ReportConfig::default())?;
  config
    .save_to_file(&path)
    .with_context(|| format!("Failed to write config to {}", path.display()))?;

  println!("Wrote config to {}", path.display());
  Ok(())
}

/// Config file (explicit or discovered) with command-line overrides applied
fn resolve_config(cli: &Cli) -> Result<ReportConfig> {
  let config = match &cli.config {
    Some(path) => ReportConfig::load_from_file(path)
      .with_context(|| format!("Failed to load config from {}", path.display()))?,
    None => ReportConfig::load().context("Failed to load config")?,
  };

  apply_overrides(cli, config)
}

fn apply_overrides(cli: &Cli, mut config: ReportConfig) -> Result<ReportConfig> {
  if let Some(format) = cli.format {
    config.format = format;
  }
  if cli.threshold.is_some() {
    config.threshold = cli.threshold;
  }
  if cli.no_color {
    config.color = false;
  }

  config.validate().context("Invalid command-line options")?;
  Ok(config)
}

fn read_input(path: &Path) -> Result<String> {
  if path == Path::new("-") {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text).context("Failed to read stdin")?;
    return Ok(text);
  }

  std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
