//! Request Orchestrator: extract, analyze and recover, per uploaded document.
//!
//! Flow: extract (blocking pool) → join pages → request_analysis → recover.
//!
//! Every failure, including a panic inside the PDF parser, comes back as an
//! `AnalysisRecord` with `success: false`. Nothing here returns an error.

use std::any::Any;

use tracing::{error, info, warn};

use crate::extraction::extract;
use crate::llm_client::CompletionProvider;
use crate::screening::analysis::{request_analysis, RawModelReply};
use crate::screening::models::{AnalysisRecord, BatchEntry, BatchResult, UploadedFile};
use crate::screening::recovery::recover;

pub async fn process_one(
    provider: &dyn CompletionProvider,
    file: &UploadedFile,
    job_description: &str,
) -> AnalysisRecord {
    let bytes = file.bytes.clone();
    let file_name = file.file_name.clone();

    // PDF parsing is CPU-bound and may panic on hostile input.
    let extracted = match tokio::task::spawn_blocking(move || extract(&bytes, &file_name)).await
    {
        Ok(Ok(extracted)) => extracted,
        Ok(Err(e)) => {
            warn!(file_name = %file.file_name, "Extraction failed: {e}");
            return AnalysisRecord::failed(e.to_string());
        }
        Err(e) => {
            let message = if e.is_panic() {
                panic_message(e.into_panic())
            } else {
                e.to_string()
            };
            error!(file_name = %file.file_name, "Extraction task failed: {message}");
            return AnalysisRecord::failed(format!("Processing failed: {message}"));
        }
    };

    let resume_text = extracted.into_joined();

    match request_analysis(provider, &resume_text, job_description).await {
        RawModelReply::Text(reply) => recover(&reply),
        RawModelReply::Failed(message) => AnalysisRecord::failed(message),
    }
}

/// Processes `files` one after another in input order. The result always has
/// one entry per file, at the file's original index.
pub async fn process_many(
    provider: &dyn CompletionProvider,
    files: &[UploadedFile],
    job_description: &str,
) -> BatchResult {
    let mut results = Vec::with_capacity(files.len());

    for (file_index, file) in files.iter().enumerate() {
        let analysis = process_one(provider, file, job_description).await;
        info!(
            file_index,
            file_name = %file.file_name,
            success = analysis.success,
            "Processed document"
        );
        results.push(BatchEntry {
            file_index,
            file_name: file.file_name.clone(),
            analysis,
        });
    }

    BatchResult {
        total_files: files.len(),
        job_description: job_description.to_string(),
        results,
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "extraction panicked".to_string()
    }
}
