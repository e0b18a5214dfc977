// Follow-up email sequence generation.
// Settings select instruction fragments; all LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod settings;
