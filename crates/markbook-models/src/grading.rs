//! Grade aggregation: average score and classification banding.
//!
//! Pure functions over a student's grade set. Both are deterministic and
//! independent of the order in which grades are supplied.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Classification band for a student's average grade.
///
/// Bands are inclusive on their lower bound: an average of exactly 0.70
/// is a Distinction, exactly 0.60 a Merit, exactly 0.40 a Pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Classification {
    Distinction,
    Merit,
    Pass,
    Fail,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Distinction => "Distinction",
            Self::Merit => "Merit",
            Self::Pass => "Pass",
            Self::Fail => "Fail",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Average of a grade set, rounded to 2 decimal places.
///
/// An empty set averages to 0.0; zero is the defined default, not an error.
/// Rounding is half away from zero (`f64::round` semantics), so 0.875
/// rounds to 0.88.
pub fn average(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    (mean * 100.0).round() / 100.0
}

/// Classification for an average grade.
///
/// A student with no grades averages 0.0 and therefore classifies as
/// [`Classification::Fail`].
pub fn classify(avg: f64) -> Classification {
    if avg >= 0.7 {
        Classification::Distinction
    } else if avg >= 0.6 {
        Classification::Merit
    } else if avg >= 0.4 {
        Classification::Pass
    } else {
        Classification::Fail
    }
}
