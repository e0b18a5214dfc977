use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One follow-up email (a touch-point) in a generated sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
    /// Natural-language send time, e.g. "Tuesday morning, 2 days after the call".
    pub recommended_date: String,
    /// Only present in the `reasoned` variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

/// The ordered touch-points exactly as the model returned them.
/// Six is the intended length but neither truncated nor padded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSequence {
    pub emails: Vec<EmailDraft>,
}

/// Which email schema and instruction version to use.
///
/// `Compact` is the current shape. `Reasoned` is the earlier shape that also asks
/// the model to justify each touch-point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceVariant {
    #[default]
    Compact,
    Reasoned,
}

#[derive(Debug, Error)]
#[error("unknown sequence variant '{0}'")]
pub struct UnknownVariant(String);

impl FromStr for SequenceVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(SequenceVariant::Compact),
            "reasoned" => Ok(SequenceVariant::Reasoned),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for SequenceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceVariant::Compact => write!(f, "compact"),
            SequenceVariant::Reasoned => write!(f, "reasoned"),
        }
    }
}
