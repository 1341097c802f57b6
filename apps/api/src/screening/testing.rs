//! In-process `CompletionProvider` fake for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{CompletionProvider, LlmError};

/// Replies with a fixed string and records every prompt it receives. When a
/// failure marker is set, prompts containing it fail with an overloaded error.
pub struct FakeProvider {
    reply: String,
    fail_marker: Option<String>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl FakeProvider {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            fail_marker: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_on(mut self, marker: &str) -> Self {
        self.fail_marker = Some(marker.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(prompt, _)| prompt.clone())
            .collect()
    }

    pub fn max_tokens_seen(&self) -> Vec<u32> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, max_tokens)| *max_tokens)
            .collect()
    }
}

#[async_trait]
impl CompletionProvider for FakeProvider {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), max_tokens));

        match &self.fail_marker {
            Some(marker) if prompt.contains(marker.as_str()) => Err(LlmError::Api {
                status: 529,
                message: "overloaded".to_string(),
            }),
            _ => Ok(self.reply.clone()),
        }
    }
}
