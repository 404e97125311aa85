//! Text normalization
//!
//! Rewrites raw German prose into a canonical cleaned form before any
//! counting happens. Quotes are dropped, dashes become commas, date periods
//! and abbreviation periods are removed so they are not mistaken for
//! sentence ends, numeric separators are stripped and every sentence
//! terminator becomes a period.
//!
//! The rules run in a fixed order. A handful of inputs are not a fixed point
//! of this pipeline: a date period that only becomes `". März"` once spaces
//! are collapsed or `?`/`!` turn into periods is rewritten on a second pass.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Quote glyphs that are deleted outright
const QUOTES: [char; 4] = ['"', '„', '“', '”'];

/// Dash sequences that read as a clause break
const DASH_BREAKS: [&str; 2] = [" -", " –"];

/// Words that may follow a date-style ordinal period ("3. März")
const DATE_WORDS: [&str; 13] = [
  "Januar",
  "Februar",
  "März",
  "April",
  "Mai",
  "Juni",
  "Juli",
  "August",
  "September",
  "Oktober",
  "November",
  "Dezember",
  "Jahrhundert",
];

/// Abbreviation forms and their period-free replacement, applied in order
const ABBREVIATIONS: [(&str, &str); 20] = [
  ("z.B.", "zB"),
  ("z. B.", "zB"),
  ("d.h.", "dh"),
  ("d. h.", "dh"),
  ("u.a.", "ua"),
  ("u. a.", "ua"),
  ("i.d.R.", "idR"),
  ("i. d. R.", "idR"),
  ("ca.", "ca"),
  ("bzw.", "bzw"),
  ("etc.", "etc"),
  ("usw.", "usw"),
  ("ggf.", "ggf"),
  ("vgl.", "vgl"),
  ("Mio.", "Mio"),
  ("Mrd.", "Mrd"),
  ("bzgl.", "bzgl"),
  ("evtl.", "evtl"),
  ("Dr.", "Dr"),
  ("Prof.", "Prof"),
];

static DIGIT_COMMA_DIGIT: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(\d),(\d)").expect("digit comma pattern is valid"));

static DIGIT_PERIOD_DIGIT: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(\d)\.(\d)").expect("digit period pattern is valid"));

static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("space run pattern is valid"));

/// Normalize raw text into its cleaned form
///
/// Empty input comes back unchanged.
pub fn normalize(raw: &str) -> String {
  if raw.is_empty() {
    return String::new();
  }

  let mut text = strip_quotes(raw);
  text = text.replace(';', ",");
  text = replace_dash_breaks(&text);
  text = text.replace('-', "");
  text = drop_date_periods(&text);
  text = expand_abbreviations(&text);
  text = strip_between_digits(&text, &DIGIT_COMMA_DIGIT);
  text = strip_between_digits(&text, &DIGIT_PERIOD_DIGIT);
  text = SPACE_RUN.replace_all(&text, " ").into_owned();
  text = unify_terminators(&text);

  debug!(raw_chars = raw.chars().count(), cleaned_chars = text.chars().count(), "normalized text");
  text
}

fn strip_quotes(text: &str) -> String {
  text.chars().filter(|ch| !QUOTES.contains(ch)).collect()
}

/// " -" and " –" become a comma; the space in front of the dash goes with it
fn replace_dash_breaks(text: &str) -> String {
  DASH_BREAKS.iter().fold(text.to_string(), |acc, dash| acc.replace(dash, ","))
}

fn drop_date_periods(text: &str) -> String {
  DATE_WORDS.iter().fold(text.to_string(), |acc, word| {
    acc.replace(&format!(". {word}"), &format!(" {word}"))
  })
}

fn expand_abbreviations(text: &str) -> String {
  ABBREVIATIONS.iter().fold(text.to_string(), |acc, (short, long)| acc.replace(short, long))
}

/// Remove the separator matched by `pattern` wherever a digit sits on both sides.
///
/// Matches can share a digit ("1,2,3"), so the replacement is repeated until
/// nothing changes. Each round removes at least one character.
fn strip_between_digits(text: &str, pattern: &Regex) -> String {
  let mut current = text.to_string();
  while let Cow::Owned(next) = pattern.replace_all(&current, "${1}${2}") {
    current = next;
  }
  current
}

fn unify_terminators(text: &str) -> String {
  text.replace(&['!', '?'][..], ".")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_empty_input_is_returned_unchanged() {
    assert_eq!(normalize(""), "");
  }

  #[test]
  fn test_plain_sentence_is_untouched() {
    let text = "Der Hund lief schnell. Die Katze schlief.";
    assert_eq!(normalize(text), text);
  }

  #[test]
  fn test_quotes_are_removed() {
    assert_eq!(normalize("Er sagte „Hallo“ und \"Tschüss”."), "Er sagte Hallo und Tschüss.");
  }

  #[test]
  fn test_semicolon_becomes_comma() {
    assert_eq!(normalize("Erstens; zweitens."), "Erstens, zweitens.");
  }

  #[test]
  fn test_dash_breaks_become_commas() {
    assert_eq!(normalize("Er kam - und ging."), "Er kam, und ging.");
    assert_eq!(normalize("Er kam – und ging."), "Er kam, und ging.");
  }

  #[test]
  fn test_dash_before_space_keeps_trailing_space() {
    // Only the leading space is consumed, so the dash's trailing space stays behind the comma
    assert_eq!(normalize("A -B"), "A,B");
    assert_eq!(normalize("A - B"), "A, B");
  }

  #[test]
  fn test_inner_hyphens_are_deleted() {
    assert_eq!(normalize("E-Mail-Adresse."), "EMailAdresse.");
  }

  #[test]
  fn test_date_periods_are_dropped() {
    assert_eq!(normalize("Am 3. März kam er."), "Am 3 März kam er.");
    assert_eq!(normalize("Im 19. Jahrhundert."), "Im 19 Jahrhundert.");
  }

  #[test]
  fn test_abbreviations_are_expanded() {
    assert_eq!(normalize("z.B. ca. 1.000 Menschen kamen!"), "zB ca 1000 Menschen kamen.");
    assert_eq!(normalize("d. h. u.a. i. d. R. usw."), "dh ua idR usw");
    assert_eq!(normalize("Dr. Prof. Mio. Mrd."), "Dr Prof Mio Mrd");
  }

  #[test]
  fn test_spaced_long_abbreviation_wins() {
    assert_eq!(normalize("Das gilt i. d. R. immer."), "Das gilt idR immer.");
    assert_eq!(normalize("Das gilt i.d.R. immer."), "Das gilt idR immer.");
  }

  #[test]
  fn test_numeric_separators_are_stripped() {
    assert_eq!(normalize("Es waren 1,5 Liter."), "Es waren 15 Liter.");
    assert_eq!(normalize("Zahl 1.234.567 hier."), "Zahl 1234567 hier.");
    assert_eq!(normalize("Liste 1,2,3 fertig."), "Liste 123 fertig.");
  }

  #[test]
  fn test_comma_after_word_is_kept() {
    assert_eq!(normalize("Er kam, 3 Leute."), "Er kam, 3 Leute.");
  }

  #[test]
  fn test_space_runs_collapse() {
    assert_eq!(normalize("Viel    Platz   hier."), "Viel Platz hier.");
  }

  #[test]
  fn test_terminators_become_periods() {
    assert_eq!(normalize("Wirklich? Ja! Gut."), "Wirklich. Ja. Gut.");
  }

  #[test]
  fn test_normalize_is_deterministic() {
    let text = "„Heute“ – am 1. Mai – kamen ca. 2.500 Leute; z. B. Dr. Müller!";
    assert_eq!(normalize(text), normalize(text));
  }

  #[test]
  fn test_second_pass_is_a_fixed_point() {
    let samples = [
      "Der Hund lief schnell. Die Katze schlief.",
      "z.B. ca. 1.000 Menschen kamen!",
      "„Heute“ – am 1. Mai – kamen ca. 2.500 Leute; z. B. Dr. Müller!",
      "Ein  Satz  mit   Lücken, und - Strichen?",
    ];
    for sample in samples {
      let once = normalize(sample);
      assert_eq!(normalize(&once), once, "not a fixed point: {sample:?}");
    }
  }

  #[test]
  fn test_date_period_exposed_late_is_not_a_fixed_point() {
    // The date rule runs before spaces collapse and before "?" turns into "."
    let once = normalize("Am 3.  März.");
    assert_eq!(once, "Am 3. März.");
    assert_eq!(normalize(&once), "Am 3 März.");

    let once = normalize("Wann? März.");
    assert_eq!(once, "Wann. März.");
    assert_eq!(normalize(&once), "Wann März.");
  }
}
