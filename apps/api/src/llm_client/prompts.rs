// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// Keeps the model in the prospect's vocabulary instead of sales-speak.
pub const TRANSCRIPT_VOICE_INSTRUCTION: &str = "\
    Use the words and language the people in the transcript actually use. \
    If the transcript is not in English, write in the transcript's language.";

/// Guards against hallucinated specifics in either notes or emails.
pub const NO_INVENTION_INSTRUCTION: &str = "\
    Never invent names, numbers, dates, or promises that do not appear in the transcript.";
