// Transcript analysis: the fifteen-field note record.
// All LLM calls go through llm_client.

pub mod extractor;
pub mod handlers;
pub mod models;
pub mod prompts;
