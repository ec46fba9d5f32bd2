use crate::dtos::ResourceStatusResponse;
use crate::services::ProbeError;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use metrics::counter;
use service_core::error::AppError;

impl From<ProbeError> for AppError {
    fn from(err: ProbeError) -> Self {
        match err {
            ProbeError::InvalidIdentifier(_) => AppError::BadRequest(anyhow::Error::new(err)),
            ProbeError::InvalidFileName(_)
            | ProbeError::Failure { .. }
            | ProbeError::NotAFile { .. }
            | ProbeError::OutsideBaseDir { .. } => AppError::Internal(err.to_string()),
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn get_resource_status(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Json<ResourceStatusResponse>, AppError> {
    let descriptor = state.probe.probe(&identifier).await.map_err(|e| {
        if let ProbeError::InvalidIdentifier(_) = e {
            counter!("resource_probes_total", "outcome" => "rejected").increment(1);
            tracing::warn!(identifier = %identifier, "rejected resource identifier");
        } else {
            counter!("resource_probes_total", "outcome" => "error").increment(1);
            tracing::error!(identifier = %identifier, error = ?e, "resource probe failed");
        }
        AppError::from(e)
    })?;

    let outcome = if descriptor.exists() { "present" } else { "absent" };
    counter!("resource_probes_total", "outcome" => outcome).increment(1);

    Ok(Json(descriptor.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use std::path::PathBuf;

    #[test]
    fn caller_errors_map_to_bad_request() {
        let response = AppError::from(ProbeError::InvalidIdentifier("..".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn filesystem_errors_map_to_server_error() {
        for err in [
            ProbeError::NotAFile {
                path: PathBuf::from("/srv/data/nested"),
            },
            ProbeError::OutsideBaseDir {
                path: PathBuf::from("/srv/data/link"),
            },
        ] {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
