//! Basic counts over cleaned text
//!
//! Everything here is a single linear scan of the cleaned string.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Letters, numerals and underscore; combining marks and joiners split a word
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("word pattern is valid"));

static LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}").expect("letter pattern is valid"));

/// Raw counts the estimators are derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextCounts {
  pub total_chars: usize,
  pub total_chars_no_spaces: usize,
  pub total_letters: usize,
  pub total_words: usize,
  pub total_periods: usize,
  pub total_commas: usize,
}

impl TextCounts {
  /// Counts for `cleaned`, whose word list the caller has already extracted
  pub fn from_text(cleaned: &str, words: &[&str]) -> Self {
    Self {
      total_chars: cleaned.chars().count(),
      total_chars_no_spaces: cleaned.chars().filter(|ch| !ch.is_whitespace()).count(),
      total_letters: letter_count(cleaned),
      total_words: words.len(),
      total_periods: char_count(cleaned, '.'),
      total_commas: char_count(cleaned, ','),
    }
  }
}

/// Maximal word-character runs in reading order
pub fn words(cleaned: &str) -> Vec<&str> {
  WORD.find_iter(cleaned).map(|m| m.as_str()).collect()
}

/// Fragments between periods, empty fragments dropped
///
/// A fragment made only of whitespace is not empty and is kept.
pub fn sentences(cleaned: &str) -> Vec<&str> {
  cleaned.split('.').filter(|segment| !segment.is_empty()).collect()
}

/// Characters in a Unicode letter category, umlauts and ß included
pub fn letter_count(text: &str) -> usize {
  LETTER.find_iter(text).count()
}

pub fn char_count(text: &str, target: char) -> usize {
  text.chars().filter(|&ch| ch == target).count()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_counts_simple_text() {
    let text = "Der Hund lief schnell. Die Katze schlief.";
    let counts = TextCounts::from_text(text, &words(text));

    assert_eq!(counts.total_chars, 41);
    assert_eq!(counts.total_chars_no_spaces, 35);
    assert_eq!(counts.total_letters, 33);
    assert_eq!(counts.total_words, 7);
    assert_eq!(counts.total_periods, 2);
    assert_eq!(counts.total_commas, 0);
  }

  #[test]
  fn test_umlauts_and_eszett_are_letters() {
    assert_eq!(letter_count("Größe"), 5);
    assert_eq!(letter_count("Übermäßig 42"), 9);
  }

  #[test]
  fn test_chars_are_counted_as_scalars() {
    let counts = TextCounts::from_text("Fuß", &words("Fuß"));
    assert_eq!(counts.total_chars, 3);
  }

  #[test]
  fn test_words_keep_order_and_include_digits() {
    assert_eq!(words("zB ca 1000 Menschen kamen."), vec!["zB", "ca", "1000", "Menschen", "kamen"]);
    assert_eq!(words("snake_case, Wörter"), vec!["snake_case", "Wörter"]);
  }

  #[test]
  fn test_combining_marks_split_words() {
    // Decomposed "März": the diaeresis is a mark, not a letter
    let text = "Im Ma\u{0308}rz.";
    assert_eq!(words(text), vec!["Im", "Ma", "rz"]);
    assert_eq!(letter_count(text), 6);
  }

  #[test]
  fn test_joiners_split_words() {
    assert_eq!(words("Auf\u{200C}lage"), vec!["Auf", "lage"]);
  }

  #[test]
  fn test_precomposed_umlaut_stays_in_word() {
    assert_eq!(words("Im März."), vec!["Im", "März"]);
  }

  #[test]
  fn test_sentences_drop_empty_fragments() {
    assert_eq!(sentences("Eins. Zwei."), vec!["Eins", " Zwei"]);
    assert_eq!(sentences("Eins.."), vec!["Eins"]);
    assert_eq!(sentences(". ."), vec![" "]);
    assert!(sentences("").is_empty());
  }

  #[test]
  fn test_whitespace_counts_exclude_tabs_and_newlines() {
    let counts = TextCounts::from_text("a\tb\nc d", &words("a\tb\nc d"));
    assert_eq!(counts.total_chars, 7);
    assert_eq!(counts.total_chars_no_spaces, 4);
  }

  #[test]
  fn test_empty_text_counts_are_zero() {
    assert_eq!(TextCounts::from_text("", &[]), TextCounts::default());
  }
}
