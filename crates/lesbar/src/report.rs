//! Report rendering
//!
//! The text report is a fixed-width German table: counts, estimators with
//! their 95% intervals, the five levels and the aggregate level. The JSON
//! report is a straight serialization of the analysis.

use colored::*;

use crate::analysis::AnalysisResult;
use crate::confidence::ConfidenceInterval;
use crate::config::{OutputFormat, ReportConfig};
use crate::Result;

/// Shown in place of a report when there is nothing to analyze
pub const NO_RESULTS: &str = "Keine Ergebnisse verfügbar. Bitte geben Sie Text ein.";

/// Render a result in the configured format
pub fn render(result: &AnalysisResult, config: &ReportConfig) -> Result<String> {
  match config.format {
    OutputFormat::Text => Ok(render_text(result, config)),
    OutputFormat::Json => render_json(result),
  }
}

pub fn render_json(result: &AnalysisResult) -> Result<String> {
  Ok(serde_json::to_string_pretty(result)?)
}

pub fn render_text(result: &AnalysisResult, config: &ReportConfig) -> String {
  let width = config.label_width;
  let decimals = config.decimals;
  // Percent bounds are scaled by 100, so they need two digits fewer
  let percent_decimals = decimals.saturating_sub(2);
  let counts = &result.counts;
  let estimators = &result.estimators;
  let intervals = &result.intervals;
  let levels = &result.levels;

  let mut lines = vec![
    count_line("Gesamtanzahl Zeichen", counts.total_chars, width),
    count_line("Zeichen ohne Leerzeichen", counts.total_chars_no_spaces, width),
    count_line("Gesamtanzahl Buchstaben", counts.total_letters, width),
    count_line("Wörter insgesamt", counts.total_words, width),
    count_line("Punkte insgesamt", counts.total_periods, width),
    count_line("Kommas insgesamt", counts.total_commas, width),
    String::new(),
  ];

  let mean_rows = [
    ("Anzahl Buchstaben pro Wort (W)", estimators.w, intervals.w),
    ("Anzahl Buchstaben pro Satz (SZ)", estimators.sz, intervals.sz),
    ("Anzahl Kommas pro Satz (K)", estimators.k, intervals.k),
  ];
  for (label, value, interval) in mean_rows {
    lines.push(format!(
      "{}: {} 95% CI [{:.prec$}, {:.prec$}]",
      pad(label, width),
      pad(&format!("{value:.decimals$}"), 10),
      interval.low,
      interval.high,
      prec = decimals,
    ));
  }

  let percent_rows = [
    ("Kleinwörter mit adj. Strings (P)", estimators.p, intervals.p),
    ("Großwörter mit akad. Strings (Q)", estimators.q, intervals.q),
  ];
  for (label, value, interval) in percent_rows {
    lines.push(percent_line(label, value, interval, width, decimals, percent_decimals));
  }
  lines.push(String::new());

  let level_rows = [
    ("Implizites Level L1 aus W", levels.l1),
    ("Implizites Level L2 aus SZ", levels.l2),
    ("Implizites Level L3 aus K", levels.l3),
    ("Implizites Level L4 aus P", levels.l4),
    ("Implizites Level L5 aus Q", levels.l5),
  ];
  for (label, level) in level_rows {
    lines.push(level_line(label, level, config));
  }
  lines.push(String::new());
  lines.push(level_line("Durchschnittliches Sprachniveau (L)", levels.total, config));

  lines.join("\n")
}

fn count_line(label: &str, count: usize, width: usize) -> String {
  format!("{}: {}", pad(label, width), count).trim_end().to_string()
}

fn percent_line(
  label: &str,
  value: f64,
  interval: ConfidenceInterval,
  width: usize,
  decimals: usize,
  percent_decimals: usize,
) -> String {
  let shown = interval.as_percent();
  format!(
    "{}: {} 95% CI [{:.prec$}%, {:.prec$}%]",
    pad(label, width),
    pad(&format!("{value:.decimals$}"), 10),
    shown.low,
    shown.high,
    prec = percent_decimals,
  )
}

fn level_line(label: &str, level: f64, config: &ReportConfig) -> String {
  let value = format!("{:.prec$}", level, prec = config.level_decimals);
  let value = if config.color { colorize_level(&value, level) } else { value };
  format!("{}: {}", pad(label, config.label_width), value)
}

/// Green for easy text, yellow for the middle band, red above
fn colorize_level(text: &str, level: f64) -> String {
  if level < 4.0 {
    text.green().to_string()
  } else if level < 8.0 {
    text.yellow().to_string()
  } else {
    text.red().to_string()
  }
}

/// Left-align in a column of `width` characters
fn pad(text: &str, width: usize) -> String {
  format!("{text:<width$}")
}
