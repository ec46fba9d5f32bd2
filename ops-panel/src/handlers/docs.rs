use crate::dtos::{DocumentListResponse, DocumentResponse, DocumentSummary};
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use service_core::error::AppError;

/// Any failure yields a fixed `Failed to load <label>` body; the cause is
/// only logged.
#[tracing::instrument(skip(state))]
pub async fn get_document(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DocumentResponse>, AppError> {
    match state.documents.fetch(&key).await {
        Ok(record) => Ok(Json(record.into())),
        Err(e) => {
            tracing::error!(key = %key, error = ?e, "Failed to load document");
            Err(AppError::Internal(format!(
                "Failed to load {}",
                e.public_label()
            )))
        }
    }
}

pub async fn list_documents(State(state): State<AppState>) -> Json<DocumentListResponse> {
    let documents = state
        .documents
        .catalog()
        .into_iter()
        .map(|(key, title)| DocumentSummary {
            key,
            title: title.to_string(),
        })
        .collect();

    Json(DocumentListResponse { documents })
}
