//! Ratio and percentage estimators
//!
//! W, SZ and K are plain ratios of counts. P and Q are the share of
//! lowercase words carrying an adjectival suffix and the share of
//! capitalised words carrying a nominalizing or academic suffix.

use serde::Serialize;

use crate::counts::TextCounts;

/// Adjectival suffixes looked for in lowercase words
pub const ADJECTIVE_SUFFIXES: [&str; 9] =
  ["bar", "lich", "isch", "haft", "sam", "voll", "reich", "los", "arm"];

/// Nominalizing suffixes looked for in capitalised words
pub const NOUN_SUFFIXES: [&str; 12] = [
  "tät", "tion", "igkeit", "age", "wert", "logie", "ktur", "ktor", "lung", "tung", "rung", "zung",
];

/// The five scalar estimators of one text
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Estimators {
  /// Letters per word
  pub w: f64,
  /// Letters per sentence
  pub sz: f64,
  /// Commas per sentence
  pub k: f64,
  /// Percentage of lowercase words with an adjectival suffix
  pub p: f64,
  /// Percentage of capitalised words with a nominalizing suffix
  pub q: f64,
}

/// Hits out of a word subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Proportion {
  pub hits: usize,
  pub total: usize,
}

impl Proportion {
  /// Fraction in [0, 1]; zero for an empty subset
  pub fn fraction(&self) -> f64 {
    ratio(self.hits, self.total)
  }

  pub fn percent(&self) -> f64 {
    self.fraction() * 100.0
  }
}

/// Division that yields 0 for a zero denominator
pub fn ratio(numerator: usize, denominator: usize) -> f64 {
  if denominator == 0 {
    0.0
  } else {
    numerator as f64 / denominator as f64
  }
}

/// All cased characters are lowercase and there is at least one of them
pub fn is_lower_word(word: &str) -> bool {
  let mut has_cased = false;
  for ch in word.chars() {
    if ch.is_uppercase() {
      return false;
    }
    if ch.is_lowercase() {
      has_cased = true;
    }
  }
  has_cased
}

pub fn is_upper_word(word: &str) -> bool {
  word.chars().next().is_some_and(char::is_uppercase)
}

/// Lowercase words containing an adjectival suffix anywhere
pub fn adjective_proportion(words: &[&str]) -> Proportion {
  let lower: Vec<&str> = words.iter().copied().filter(|word| is_lower_word(word)).collect();
  let hits = lower.iter().filter(|word| contains_any(word, &ADJECTIVE_SUFFIXES)).count();
  Proportion { hits, total: lower.len() }
}

/// Capitalised words whose lowercase form contains a nominalizing suffix
pub fn noun_proportion(words: &[&str]) -> Proportion {
  let upper: Vec<&str> = words.iter().copied().filter(|word| is_upper_word(word)).collect();
  let hits = upper
    .iter()
    .filter(|word| contains_any(&word.to_lowercase(), &NOUN_SUFFIXES))
    .count();
  Proportion { hits, total: upper.len() }
}

fn contains_any(word: &str, suffixes: &[&str]) -> bool {
  suffixes.iter().any(|suffix| word.contains(suffix))
}

impl Estimators {
  pub fn compute(counts: &TextCounts, lower: Proportion, upper: Proportion) -> Self {
    Self {
      w: ratio(counts.total_letters, counts.total_words),
      sz: ratio(counts.total_letters, counts.total_periods),
      k: ratio(counts.total_commas, counts.total_periods),
      p: lower.percent(),
      q: upper.percent(),
    }
  }
}
