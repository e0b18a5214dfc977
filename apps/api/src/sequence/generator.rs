//! Sequence Generation Client: transcript + settings → ordered follow-up emails.
//!
//! Flow: build_instruction(settings, variant) → sequence_schema(variant) →
//!       one LLM call → `EmailSequence` returned in the order received.

use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::prompts::{NO_INVENTION_INSTRUCTION, TRANSCRIPT_VOICE_INSTRUCTION};
use crate::llm_client::{CompletionRequest, LlmClient, LlmError, Schema};
use crate::sequence::models::{EmailSequence, SequenceVariant};
use crate::sequence::prompts::{
    COMPACT_VARIANT_INSTRUCTION, REASONED_VARIANT_INSTRUCTION, SEQUENCE_SYSTEM_TEMPLATE,
};
use crate::sequence::settings::GenerationSettings;

/// Number of touch-points the instruction asks for. Not enforced on the response.
pub const TOUCH_POINTS: usize = 6;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("transcript cannot be empty")]
    EmptyTranscript,

    #[error("email generation failed: {0}")]
    Llm(#[from] LlmError),
}

/// Assembles the system instruction for the given settings. Pure and deterministic.
pub fn build_instruction(settings: &GenerationSettings, variant: SequenceVariant) -> String {
    let variant_instruction = match variant {
        SequenceVariant::Compact => COMPACT_VARIANT_INSTRUCTION,
        SequenceVariant::Reasoned => REASONED_VARIANT_INSTRUCTION,
    };

    SEQUENCE_SYSTEM_TEMPLATE
        .replace("{tone_instruction}", settings.tone.instruction())
        .replace("{brevity_instruction}", settings.brevity.instruction())
        .replace("{directness_instruction}", settings.directness.instruction())
        .replace("{emoji_instruction}", settings.emojis.instruction())
        .replace("{focus_instruction}", settings.focus.instruction())
        .replace("{urgency_instruction}", settings.urgency.instruction())
        .replace("{voice_instruction}", TRANSCRIPT_VOICE_INSTRUCTION)
        .replace("{no_invention_instruction}", NO_INVENTION_INSTRUCTION)
        .replace("{variant_instruction}", variant_instruction)
}

/// `{ emails: [{ subject, body, recommendedDate, reasoning? }] }`
pub fn sequence_schema(variant: SequenceVariant) -> Schema {
    let mut email = Schema::object()
        .required_property("subject", Schema::string("Email subject line. No emojis."))
        .required_property("body", Schema::string("Email body, ready to send."))
        .required_property(
            "recommendedDate",
            Schema::string("When to send it, relative to the call."),
        );

    if variant == SequenceVariant::Reasoned {
        email = email.required_property(
            "reasoning",
            Schema::string("Why this touch-point and why this timing."),
        );
    }

    Schema::object().required_property(
        "emails",
        Schema::array(email).with_description("The follow-up emails, in sending order."),
    )
}

pub fn build_request(
    transcript: &str,
    settings: &GenerationSettings,
    variant: SequenceVariant,
) -> CompletionRequest {
    CompletionRequest {
        content: transcript.to_string(),
        system_instruction: build_instruction(settings, variant),
        response_schema: sequence_schema(variant),
    }
}

/// Generates the follow-up sequence for a transcript.
pub async fn generate(
    transcript: &str,
    settings: &GenerationSettings,
    variant: SequenceVariant,
    llm: &LlmClient,
) -> Result<EmailSequence, GenerationError> {
    if transcript.trim().is_empty() {
        return Err(GenerationError::EmptyTranscript);
    }

    info!("Generating {variant} email sequence with settings {settings:?}");
    let sequence = llm
        .call_json::<EmailSequence>(&build_request(transcript, settings, variant))
        .await?;

    if sequence.emails.len() != TOUCH_POINTS {
        warn!(
            "Expected {} emails, model returned {}",
            TOUCH_POINTS,
            sequence.emails.len()
        );
    }
    info!("Email sequence generated: {} emails", sequence.emails.len());

    Ok(sequence)
}
