//! Wire types of the HTTP surface and the error → status mapping.

use crate::errors::AppError;
use crate::models::{EmployeeRecord, PauseOutcome};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PauseRequest {
    #[serde(default, alias = "matricule")]
    pub badge_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum PauseResponse {
    Start {
        message: String,
        employee: EmployeeRecord,
        #[serde(with = "crate::utils::time::iso")]
        start_time: DateTime<Utc>,
    },
    End {
        message: String,
        employee: EmployeeRecord,
        #[serde(with = "crate::utils::time::iso")]
        start_time: DateTime<Utc>,
        #[serde(with = "crate::utils::time::iso")]
        end_time: DateTime<Utc>,
        duration_minutes: i64,
        over_threshold: bool,
    },
}

impl From<PauseOutcome> for PauseResponse {
    fn from(outcome: PauseOutcome) -> Self {
        let message = outcome.message();
        match outcome {
            PauseOutcome::Started { employee, start } => PauseResponse::Start {
                message,
                employee,
                start_time: start,
            },
            PauseOutcome::Ended {
                employee,
                start,
                end,
                duration_minutes,
                classification,
            } => PauseResponse::End {
                message,
                employee,
                start_time: start,
                end_time: end,
                duration_minutes,
                over_threshold: classification.is_over(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidIdentifier(_) | AppError::UnknownEmployee(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::StoreBusy(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label sent to clients; details stay in the logs.
    pub fn public_label(&self) -> &'static str {
        match self {
            AppError::InvalidIdentifier(_) => "invalid identifier",
            AppError::UnknownEmployee(_) => "unknown employee",
            AppError::StoreBusy(_) => "store busy",
            _ => "storage failure",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            debug!(error = %self, "request rejected");
        }
        (
            status,
            Json(ErrorBody {
                error: self.public_label(),
            }),
        )
            .into_response()
    }
}
