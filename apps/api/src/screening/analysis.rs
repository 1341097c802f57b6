//! Analysis Requester: sends one resume/job pair to the model and returns its raw reply.

use tracing::warn;

use crate::llm_client::CompletionProvider;
use crate::screening::prompts::build_analysis_prompt;

/// Upper bound on reply length. The expected JSON object is well under this.
pub const ANALYSIS_MAX_TOKENS: u32 = 200;

/// What came back from the provider, before any parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawModelReply {
    /// Reply text, trimmed.
    Text(String),
    /// Transport or provider failure, as a diagnostic message.
    Failed(String),
}

/// Never returns an error: provider failures are folded into `RawModelReply::Failed`.
pub async fn request_analysis(
    provider: &dyn CompletionProvider,
    resume_text: &str,
    job_description: &str,
) -> RawModelReply {
    let prompt = build_analysis_prompt(resume_text, job_description);

    match provider.complete(&prompt, ANALYSIS_MAX_TOKENS).await {
        Ok(text) => RawModelReply::Text(text.trim().to_string()),
        Err(e) => {
            warn!("Analysis request failed: {e}");
            RawModelReply::Failed(e.to_string())
        }
    }
}
