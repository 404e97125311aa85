//! Readability and complexity metrics for German prose
//!
//! Raw text is normalized, counted and turned into five estimators with 95%
//! confidence intervals, which are then mapped onto five implicit language
//! levels and their mean.

pub mod analysis;
pub mod confidence;
pub mod config;
pub mod counts;
pub mod error;
pub mod estimators;
pub mod levels;
pub mod normalizer;
pub mod report;

pub use analysis::{analyze, AnalysisResult};
pub use config::{OutputFormat, ReportConfig};
pub use error::{LesbarError, Result};
pub use normalizer::normalize;
