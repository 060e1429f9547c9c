//! Badge comparing the rule-based price with the ML prediction.

use charter_utils::format::format_fixed;
use std::fmt;

/// Visual class of the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    /// Rule-based price at or above the prediction
    Positive,
    /// Rule-based price below the prediction
    Negative,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MlBadge {
    pub tone: BadgeTone,
    pub text: String,
}

impl MlBadge {
    /// `None` when the response carried no delta (rule-based mode).
    pub fn from_delta(delta: Option<f64>) -> Option<MlBadge> {
        let delta = delta?;
        let tone = if delta >= 0.0 {
            BadgeTone::Positive
        } else {
            BadgeTone::Negative
        };
        let sign = if tone == BadgeTone::Positive { "+" } else { "" };
        Some(MlBadge {
            tone,
            text: format!("ML Δ {}{}", sign, format_fixed(delta, 0)),
        })
    }
}

impl fmt::Display for MlBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_delta_gets_plus_sign() {
        let badge = MlBadge::from_delta(Some(396.46)).unwrap();
        assert_eq!(badge.tone, BadgeTone::Positive);
        assert_eq!(badge.text, "ML Δ +396");
    }

    #[test]
    fn zero_counts_as_positive() {
        let badge = MlBadge::from_delta(Some(0.0)).unwrap();
        assert_eq!(badge.tone, BadgeTone::Positive);
        assert_eq!(badge.text, "ML Δ +0");
    }

    #[test]
    fn negative_delta() {
        let badge = MlBadge::from_delta(Some(-1520.7)).unwrap();
        assert_eq!(badge.tone, BadgeTone::Negative);
        assert_eq!(badge.text, "ML Δ -1521");
    }

    #[test]
    fn nan_delta_degrades() {
        let badge = MlBadge::from_delta(Some(f64::NAN)).unwrap();
        assert_eq!(badge.tone, BadgeTone::Negative);
        assert_eq!(badge.text, "ML Δ —");
    }

    #[test]
    fn no_delta_no_badge() {
        assert!(MlBadge::from_delta(None).is_none());
    }
}
