// Resume screening: score uploaded resumes against a job description.
// All LLM calls go through llm_client; this module never talks HTTP to the provider.

pub mod analysis;
pub mod handlers;
pub mod models;
pub mod orchestrator;
pub mod prompts;
pub mod recovery;

#[cfg(test)]
pub mod testing;
