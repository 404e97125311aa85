//! Full analysis of one text
//!
//! Normalizes the input, counts, estimates, attaches intervals and maps the
//! estimators onto implicit levels. Every call starts from scratch.

use serde::Serialize;
use tracing::debug;

use crate::confidence::Intervals;
use crate::counts::{char_count, letter_count, sentences, words, TextCounts};
use crate::estimators::{adjective_proportion, noun_proportion, Estimators};
use crate::levels::Levels;
use crate::normalizer::normalize;

/// Everything a report needs about one text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
  pub cleaned_text: String,
  pub counts: TextCounts,
  pub estimators: Estimators,
  pub intervals: Intervals,
  pub levels: Levels,
}

/// Analyze raw text; `None` for empty input
pub fn analyze(text: &str) -> Option<AnalysisResult> {
  if text.is_empty() {
    return None;
  }

  let cleaned_text = normalize(text);
  let word_list = words(&cleaned_text);
  let counts = TextCounts::from_text(&cleaned_text, &word_list);

  let lower = adjective_proportion(&word_list);
  let upper = noun_proportion(&word_list);
  let estimators = Estimators::compute(&counts, lower, upper);

  let word_letters: Vec<f64> = word_list.iter().map(|word| letter_count(word) as f64).collect();
  let segments = sentences(&cleaned_text);
  let sentence_letters: Vec<f64> = segments.iter().map(|s| letter_count(s) as f64).collect();
  let sentence_commas: Vec<f64> = segments.iter().map(|s| char_count(s, ',') as f64).collect();

  let intervals = Intervals::compute(
    &estimators,
    &word_letters,
    &sentence_letters,
    &sentence_commas,
    counts.total_periods,
    lower,
    upper,
  );
  let levels = Levels::from_estimators(&estimators);

  debug!(
    words = counts.total_words,
    periods = counts.total_periods,
    level = levels.total,
    "analyzed text"
  );

  Some(AnalysisResult { cleaned_text, counts, estimators, intervals, levels })
}
