//! Confidence badge for identification results

use dioxus::prelude::*;

/// Confidence bands used for badge styling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// Band thresholds: >= 0.7 high, >= 0.4 medium, else low.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.7 {
            ConfidenceLevel::High
        } else if confidence >= 0.4 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    fn class(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "confidence-high",
            ConfidenceLevel::Medium => "confidence-medium",
            ConfidenceLevel::Low => "confidence-low",
        }
    }
}

/// Rounded "NN% match" pill, colored by confidence band
#[component]
pub fn ConfidenceBadge(confidence: f64) -> Element {
    let percentage = (confidence * 100.0).round() as i64;
    let level = ConfidenceLevel::from_confidence(confidence);
    rsx! {
        span {
            class: "inline-flex items-center px-3 py-1 rounded-full text-sm font-medium {level.class()}",
            "{percentage}% match"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_thresholds() {
        assert_eq!(ConfidenceLevel::from_confidence(0.95), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_confidence(0.7), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_confidence(0.69), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_confidence(0.4), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_confidence(0.39), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_confidence(0.0), ConfidenceLevel::Low);
    }
}
