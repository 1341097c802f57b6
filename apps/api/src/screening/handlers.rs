//! Axum route handlers for resume uploads.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::screening::models::{AnalysisRecord, BatchResult, UploadedFile};
use crate::screening::orchestrator::{process_many, process_one};
use crate::state::AppState;

const JOB_DESC_FIELD: &str = "job_desc";

/// Fields collected from an upload form. Unknown fields are skipped.
struct UploadForm {
    files: Vec<UploadedFile>,
    job_desc: Option<String>,
}

impl UploadForm {
    async fn read(mut multipart: Multipart, file_field: &str) -> Result<Self, AppError> {
        let mut files = Vec::new();
        let mut job_desc = None;

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some(name) if name == file_field => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    files.push(UploadedFile { file_name, bytes });
                }
                Some(JOB_DESC_FIELD) => job_desc = Some(field.text().await?),
                _ => {}
            }
        }

        Ok(Self { files, job_desc })
    }

    fn require_job_desc(&mut self) -> Result<String, AppError> {
        self.job_desc
            .take()
            .ok_or_else(|| missing_field(JOB_DESC_FIELD))
    }
}

fn missing_field(name: &str) -> AppError {
    AppError::UnprocessableEntity(format!("missing form field `{name}`"))
}

/// POST /api/upload-cv
///
/// Scores a single resume against `job_desc`. Document-level failures are
/// reported in the record, not as an HTTP error.
pub async fn handle_upload_cv(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisRecord>, AppError> {
    let mut form = UploadForm::read(multipart, "file").await?;
    let job_desc = form.require_job_desc()?;
    let file = form
        .files
        .into_iter()
        .next()
        .ok_or_else(|| missing_field("file"))?;

    info!(file_name = %file.file_name, bytes = file.bytes.len(), "Scoring single resume");

    let record = process_one(state.llm.as_ref(), &file, &job_desc).await;
    Ok(Json(record))
}

/// POST /api/upload-cvs
///
/// Scores every file in `files` against the same `job_desc`, sequentially and
/// in upload order.
pub async fn handle_upload_cvs(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<BatchResult>, AppError> {
    let mut form = UploadForm::read(multipart, "files").await?;
    let job_desc = form.require_job_desc()?;
    if form.files.is_empty() {
        return Err(missing_field("files"));
    }

    info!(total_files = form.files.len(), "Scoring resume batch");

    let batch = process_many(state.llm.as_ref(), &form.files, &job_desc).await;
    Ok(Json(batch))
}
