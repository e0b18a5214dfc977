//! Generation settings: six independent two-way toggles and the instruction
//! fragment each value selects.
//!
//! The mapping is a pure lookup: the same settings always produce the same
//! fragments, so instruction assembly never needs a network call to test.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Casual,
    Formal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brevity {
    #[default]
    Brief,
    Standard,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Directness {
    #[default]
    Polite,
    Direct,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emojis {
    #[default]
    None,
    Minimal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    #[default]
    Value,
    Relationship,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    #[default]
    Patient,
    Urgent,
}

/// The six-toggle style configuration for a generated sequence.
/// Missing keys in a request body fall back to the per-toggle default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub tone: Tone,
    pub brevity: Brevity,
    pub directness: Directness,
    pub emojis: Emojis,
    pub focus: Focus,
    pub urgency: Urgency,
}

impl Tone {
    pub fn instruction(self) -> &'static str {
        match self {
            Tone::Casual => {
                "Casual and friendly. Open with \"Hey\" and their first name, and write like a quick note to someone you already know."
            }
            Tone::Formal => {
                "Formal and professional. Open with \"Hi\" and their first name, and keep the wording polished, no slang."
            }
        }
    }
}

impl Brevity {
    pub fn instruction(self) -> &'static str {
        match self {
            Brevity::Brief => "Ultra short, 1-2 sentences max per email. Reads like a text message.",
            Brevity::Standard => "Standard length, 3-4 sentences max per email.",
        }
    }
}

impl Directness {
    pub fn instruction(self) -> &'static str {
        match self {
            Directness::Polite => {
                "Polite and low-pressure. Phrase asks softly (\"would it make sense to...\")."
            }
            Directness::Direct => "Direct. State the ask plainly in one line, no hedging.",
        }
    }
}

impl Emojis {
    pub fn instruction(self) -> &'static str {
        match self {
            Emojis::None => "Use no emojis anywhere.",
            Emojis::Minimal => "At most one emoji per email, and only in the sign-off line.",
        }
    }
}

impl Focus {
    pub fn instruction(self) -> &'static str {
        match self {
            Focus::Value => {
                "Lead with value: tie every email to an outcome they care about (time saved, money, fewer headaches)."
            }
            Focus::Relationship => {
                "Lead with the relationship: reference personal details they shared and keep it human."
            }
        }
    }
}

impl Urgency {
    pub fn instruction(self) -> &'static str {
        match self {
            Urgency::Patient => {
                "Patient pacing: space the emails out over about a month, starting 1-2 days after the call."
            }
            Urgency::Urgent => {
                "Urgent pacing: tight gaps, the whole sequence within about 10 days, starting the same day as the call."
            }
        }
    }
}
