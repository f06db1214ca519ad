use super::SharedService;
use super::responses::{PauseRequest, PauseResponse};
use crate::errors::{AppError, AppResult};
use crate::models::PauseRecord;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use std::sync::Arc;
use tracing::debug;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "rpauselogger",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// `POST /pause`. A malformed body counts as an invalid identifier.
pub async fn toggle_pause(
    State(service): State<SharedService>,
    payload: Result<Json<PauseRequest>, JsonRejection>,
) -> AppResult<Json<PauseResponse>> {
    let raw = match payload {
        Ok(Json(req)) => req.badge_id.unwrap_or_default(),
        Err(rejection) => {
            debug!(reason = %rejection, "unusable pause request body");
            return Err(AppError::InvalidIdentifier(String::new()));
        }
    };

    let outcome = blocking(service, move |svc| svc.toggle(&raw)).await?;
    Ok(Json(PauseResponse::from(outcome)))
}

/// `GET /history`
pub async fn history(State(service): State<SharedService>) -> AppResult<Json<Vec<PauseRecord>>> {
    let records = blocking(service, |svc| svc.history()).await?;
    Ok(Json(records))
}

/// The store does blocking file I/O and may wait on its writer lock.
async fn blocking<T, F>(service: SharedService, f: F) -> AppResult<T>
where
    T: Send + 'static,
    F: FnOnce(&crate::core::PauseService) -> AppResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || f(Arc::as_ref(&service)))
        .await
        .map_err(|e| AppError::Storage(format!("store task failed: {e}")))?
}
