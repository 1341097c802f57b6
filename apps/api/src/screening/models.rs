use std::collections::BTreeMap;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// One uploaded document as received from the multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Bytes,
}

/// The normalized analysis result for one document.
///
/// `score`, `skills` and `summary` are always serialized, with zero values on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub success: bool,
    pub score: i64,
    /// Label to skill name. Serialized in label order, not the order the model
    /// wrote them: `skill10` sorts before `skill2`.
    pub skills: BTreeMap<String, String>,
    pub summary: String,
    #[serde(rename = "error", default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// The JSON candidate that failed to parse. Only set on parse failures.
    #[serde(rename = "raw_response", default, skip_serializing_if = "Option::is_none")]
    pub raw_reply: Option<String>,
}

impl AnalysisRecord {
    pub fn succeeded(score: i64, skills: BTreeMap<String, String>, summary: String) -> Self {
        Self {
            success: true,
            score,
            skills,
            summary,
            error_message: None,
            raw_reply: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            score: 0,
            skills: BTreeMap::new(),
            summary: String::new(),
            error_message: Some(message.into()),
            raw_reply: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEntry {
    pub file_index: usize,
    pub file_name: String,
    pub analysis: AnalysisRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    pub total_files: usize,
    pub job_description: String,
    pub results: Vec<BatchEntry>,
}
