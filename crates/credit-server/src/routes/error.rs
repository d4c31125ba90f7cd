//! API error mapping
//!
//! Every handler returns `Result<_, ApiError>`; failures render as a
//! problem-details JSON body.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use credit::DomainError;

use crate::models::FieldErrors;

/// Error body returned for every failed request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProblemDetails {
    pub title: String,
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub exception: String,
    pub details: BTreeMap<String, String>,
}

/// API-level error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request body failed field validation
    #[error("Invalid request: {0}")]
    InvalidRequest(FieldErrors),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Domain(err) => match err {
                DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
                DomainError::InvalidInstallmentDate { .. }
                | DomainError::InvalidInstallmentCount { .. }
                | DomainError::OwnershipMismatch { .. }
                | DomainError::Validation(_) => StatusCode::BAD_REQUEST,
                DomainError::UniquenessViolation(_) => StatusCode::CONFLICT,
                DomainError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn exception(&self) -> &'static str {
        match self {
            Self::Domain(err) => match err {
                DomainError::NotFound { .. } => "NotFound",
                DomainError::InvalidInstallmentDate { .. } => "InvalidInstallmentDate",
                DomainError::InvalidInstallmentCount { .. } => "InvalidInstallmentCount",
                DomainError::OwnershipMismatch { .. } => "OwnershipMismatch",
                DomainError::UniquenessViolation(_) => "UniquenessViolation",
                DomainError::Validation(_) => "Validation",
                DomainError::Repository(_) => "Repository",
            },
            Self::InvalidRequest(_) => "InvalidRequest",
            Self::Internal(_) => "Internal",
        }
    }

    fn title(status: StatusCode) -> &'static str {
        match status {
            StatusCode::NOT_FOUND => "Not Found! Consult the documentation",
            StatusCode::BAD_REQUEST => "Bad Request! Consult the documentation",
            StatusCode::CONFLICT => "Conflict! Consult the documentation",
            _ => "Internal Server Error! Consult the documentation",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let exception = self.exception().to_string();

        // Don't expose internal error details to clients
        let details = match self {
            Self::InvalidRequest(errors) => errors.into_map(),
            Self::Domain(DomainError::Repository(ref msg)) | Self::Internal(ref msg) => {
                tracing::error!(error = %msg, "Request failed");
                BTreeMap::from([("message".to_string(), "Internal server error".to_string())])
            }
            Self::Domain(err) => BTreeMap::from([("message".to_string(), err.to_string())]),
        };

        let body = ProblemDetails {
            title: Self::title(status).to_string(),
            timestamp: Utc::now(),
            status: status.as_u16(),
            exception,
            details,
        };

        (status, Json(body)).into_response()
    }
}
