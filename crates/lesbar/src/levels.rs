//! Implicit language levels
//!
//! Each estimator is pushed through a saturating `tanh` curve onto a 0-12
//! scale. The coefficients are calibration constants of the model and must
//! not be tuned.

use serde::Serialize;

use crate::estimators::Estimators;

/// Upper bound of every level
pub const MAX_LEVEL: f64 = 12.0;

/// `6 * (1 + tanh(slope * x - offset))`, with `x` optionally replaced by its fourth root
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelCurve {
  pub slope: f64,
  pub offset: f64,
  pub fourth_root: bool,
}

pub const W_CURVE: LevelCurve = LevelCurve { slope: 0.76, offset: 4.72, fourth_root: false };
pub const SZ_CURVE: LevelCurve = LevelCurve { slope: 0.017, offset: 1.86, fourth_root: false };
pub const K_CURVE: LevelCurve = LevelCurve { slope: 1.0, offset: 1.36, fourth_root: false };
pub const P_CURVE: LevelCurve = LevelCurve { slope: 2.85, offset: 4.32, fourth_root: true };
pub const Q_CURVE: LevelCurve = LevelCurve { slope: 1.38, offset: 2.51, fourth_root: true };

impl LevelCurve {
  pub fn apply(&self, estimate: f64) -> f64 {
    let x = if self.fourth_root { estimate.powf(0.25) } else { estimate };
    (MAX_LEVEL / 2.0) * (1.0 + (self.slope * x - self.offset).tanh())
  }
}

/// Levels L1..L5 and their mean
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Levels {
  pub l1: f64,
  pub l2: f64,
  pub l3: f64,
  pub l4: f64,
  pub l5: f64,
  /// Aggregate level LT
  pub total: f64,
}

impl Levels {
  pub fn from_estimators(estimators: &Estimators) -> Self {
    let l1 = W_CURVE.apply(estimators.w);
    let l2 = SZ_CURVE.apply(estimators.sz);
    let l3 = K_CURVE.apply(estimators.k);
    let l4 = P_CURVE.apply(estimators.p);
    let l5 = Q_CURVE.apply(estimators.q);

    Self { l1, l2, l3, l4, l5, total: (l1 + l2 + l3 + l4 + l5) / 5.0 }
  }

  pub fn as_array(&self) -> [f64; 5] {
    [self.l1, self.l2, self.l3, self.l4, self.l5]
  }
}
