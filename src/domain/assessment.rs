//! Risk assessment result types.
//!
//! Represents the output of the Alzheimer's disease risk prediction.

use serde::{Deserialize, Serialize};

/// Disclaimer shown whenever risk is predicted. Mandatory for the at-risk
/// label; never attached to the not-at-risk label.
pub const DISCLAIMER: &str = "Not a final diagnosis, only a prediction. This is \
not a medical diagnosis. Please consult a healthcare professional for further \
evaluation.";

/// Binary risk classification for Alzheimer's disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    /// Not likely at risk
    NotAtRisk,
    /// At risk, professional evaluation advised
    AtRisk,
}

impl RiskLabel {
    /// Get the user-facing message for this label.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotAtRisk => "You are not likely to have Alzheimer's disease.",
            Self::AtRisk => "You are at risk of having Alzheimer's disease.",
        }
    }

    /// Disclaimer text, present if and only if risk is predicted.
    #[must_use]
    pub fn disclaimer(&self) -> Option<&'static str> {
        match self {
            Self::NotAtRisk => None,
            Self::AtRisk => Some(DISCLAIMER),
        }
    }

    #[must_use]
    pub fn is_at_risk(&self) -> bool {
        matches!(self, Self::AtRisk)
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAtRisk => write!(f, "NOT AT RISK"),
            Self::AtRisk => write!(f, "AT RISK"),
        }
    }
}

/// Complete prediction result handed back to the input boundary.
///
/// Ephemeral; exists only for the duration of rendering a response.
#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    /// Risk classification
    pub label: RiskLabel,

    /// User-facing message for the label
    pub message: &'static str,

    /// Present if and only if the label is `AtRisk`
    pub disclaimer: Option<&'static str>,

    /// Timestamp of the assessment
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl RiskAssessment {
    /// Create a new assessment from a predicted label.
    #[must_use]
    pub fn new(label: RiskLabel) -> Self {
        Self {
            label,
            message: label.message(),
            disclaimer: label.disclaimer(),
            created_at: chrono::Utc::now(),
        }
    }
}
