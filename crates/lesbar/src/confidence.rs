//! 95% confidence intervals for the estimators
//!
//! Mean-type estimators (W, SZ, K) use the normal approximation around the
//! point estimate. Percentage estimators (P, Q) use a Wald interval on the
//! underlying fraction, clamped to [0, 1].

use serde::Serialize;

use crate::estimators::{Estimators, Proportion};

/// Two-sided 95% quantile of the standard normal distribution
pub const Z_95: f64 = 1.96;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ConfidenceInterval {
  pub low: f64,
  pub high: f64,
}

impl ConfidenceInterval {
  pub fn point(value: f64) -> Self {
    Self { low: value, high: value }
  }

  pub fn is_point(&self) -> bool {
    self.low == self.high
  }

  pub fn contains(&self, value: f64) -> bool {
    self.low <= value && value <= self.high
  }

  /// Bounds scaled by 100, for showing a fraction interval as percentages
  pub fn as_percent(&self) -> Self {
    Self { low: self.low * 100.0, high: self.high * 100.0 }
  }
}

/// Intervals for all five estimators; `p` and `q` are fractions
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Intervals {
  pub w: ConfidenceInterval,
  pub sz: ConfidenceInterval,
  pub k: ConfidenceInterval,
  pub p: ConfidenceInterval,
  pub q: ConfidenceInterval,
}

/// Sample standard deviation (n - 1 denominator); 0 for fewer than two values
pub fn sample_std_dev(values: &[f64]) -> f64 {
  if values.len() < 2 {
    return 0.0;
  }

  let n = values.len() as f64;
  let mean = values.iter().sum::<f64>() / n;
  let squared: f64 = values.iter().map(|value| (value - mean).powi(2)).sum();
  (squared / (n - 1.0)).sqrt()
}

/// Normal-approximation interval around a mean-type estimate
///
/// The spread comes from `samples`, the standard error divides by `sqrt(n)`.
/// With `n <= 1` there is no variance estimate and the interval is a point.
pub fn mean_interval(estimate: f64, samples: &[f64], n: usize) -> ConfidenceInterval {
  if n <= 1 {
    return ConfidenceInterval::point(estimate);
  }

  let se = sample_std_dev(samples) / (n as f64).sqrt();
  ConfidenceInterval { low: estimate - Z_95 * se, high: estimate + Z_95 * se }
}

/// Wald interval for a fraction `p` observed over `n` trials, clamped to [0, 1]
pub fn proportion_interval(p: f64, n: usize) -> ConfidenceInterval {
  if n == 0 {
    return ConfidenceInterval::point(p);
  }

  let se = (p * (1.0 - p) / n as f64).sqrt();
  ConfidenceInterval { low: (p - Z_95 * se).max(0.0), high: (p + Z_95 * se).min(1.0) }
}

impl Intervals {
  /// Build every interval from the per-unit samples of one text
  pub fn compute(
    estimates: &Estimators,
    word_letters: &[f64],
    sentence_letters: &[f64],
    sentence_commas: &[f64],
    total_periods: usize,
    lower: Proportion,
    upper: Proportion,
  ) -> Self {
    Self {
      w: mean_interval(estimates.w, word_letters, word_letters.len()),
      sz: mean_interval(estimates.sz, sentence_letters, total_periods),
      k: mean_interval(estimates.k, sentence_commas, total_periods),
      p: proportion_interval(lower.fraction(), lower.total),
      q: proportion_interval(upper.fraction(), upper.total),
    }
  }
}
