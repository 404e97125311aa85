//! Configuration management for lesbar
//!
//! Handles loading, validating and saving the report settings and the
//! optional level threshold.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::levels::MAX_LEVEL;
use crate::{LesbarError, Result};

/// Where a new project config is written
pub const DEFAULT_CONFIG_FILE: &str = ".lesbar.json";

/// Project-local config locations, checked in order
const LOCAL_CONFIG_PATHS: [&str; 3] = [DEFAULT_CONFIG_FILE, "lesbar.json", ".lesbar/config.json"];

/// How a report is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

/// Report settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
  /// Output format
  #[serde(default)]
  pub format: OutputFormat,
  /// Width of the label column in the text report
  #[serde(default = "default_label_width")]
  pub label_width: usize,
  /// Decimals for estimators and their intervals
  #[serde(default = "default_decimals")]
  pub decimals: usize,
  /// Decimals for level scores
  #[serde(default = "default_level_decimals")]
  pub level_decimals: usize,
  /// Fail when the aggregate level exceeds this value
  #[serde(default)]
  pub threshold: Option<f64>,
  /// Colour level lines in the text report
  #[serde(default = "default_color")]
  pub color: bool,
}

fn default_label_width() -> usize {
  40
}
fn default_decimals() -> usize {
  4
}
fn default_level_decimals() -> usize {
  2
}
fn default_color() -> bool {
  true
}

impl Default for ReportConfig {
  fn default() -> Self {
    Self {
      format: OutputFormat::default(),
      label_width: default_label_width(),
      decimals: default_decimals(),
      level_decimals: default_level_decimals(),
      threshold: None,
      color: default_color(),
    }
  }
}

impl ReportConfig {
  /// Load configuration from a file
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let content = std::fs::read_to_string(path)?;
    let config: ReportConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
  }

  /// Load configuration from the current directory, the user config dir, or defaults
  pub fn load() -> Result<Self> {
    for path in LOCAL_CONFIG_PATHS {
      if Path::new(path).exists() {
        return Self::load_from_file(path);
      }
    }

    if let Some(path) = user_config_path() {
      if path.exists() {
        return Self::load_from_file(path);
      }
    }

    Ok(ReportConfig::default())
  }

  /// Save configuration to a file
  pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
    let content = serde_json::to_string_pretty(self)?;
    std::fs::write(path, content)?;
    Ok(())
  }

  pub fn validate(&self) -> Result<()> {
    if self.label_width == 0 {
      return Err(LesbarError::invalid_config("label_width must be greater than 0"));
    }
    if self.decimals > 10 || self.level_decimals > 10 {
      return Err(LesbarError::invalid_config("decimals must not exceed 10"));
    }
    if let Some(threshold) = self.threshold {
      if !(0.0..=MAX_LEVEL).contains(&threshold) {
        return Err(LesbarError::invalid_config(format!(
          "threshold {threshold} is outside the level range 0-{MAX_LEVEL}"
        )));
      }
    }
    Ok(())
  }

  /// Whether an aggregate level breaks the configured threshold
  pub fn exceeds_threshold(&self, level: f64) -> bool {
    self.threshold.is_some_and(|threshold| level > threshold)
  }
}

/// `<config dir>/lesbar/config.json`, if the platform has a config dir
pub fn user_config_path() -> Option<PathBuf> {
  dirs::config_dir().map(|dir| dir.join("lesbar").join("config.json"))
}
