//! Response types for the stamp reporting API.
//!
//! This module defines the report bodies, the error response structures
//! and error handling for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Notification, ReportResult, Respite};

/// Body of the worked-time endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkedTimeResponse {
    /// The employee reported on.
    pub employee_id: u32,
    /// The reporting day.
    pub day: NaiveDate,
    /// Whether the report could be computed.
    pub succeeded: bool,
    /// Total worked time in whole seconds.
    pub worked_seconds: i64,
    /// Total worked time in hours, rounded to two decimal places.
    pub worked_hours: Decimal,
    /// Corrections applied to the day's stamps.
    pub notifications: Vec<Notification>,
}

impl WorkedTimeResponse {
    /// Builds the body from a worked-time report.
    pub fn from_report(employee_id: u32, day: NaiveDate, report: ReportResult<Duration>) -> Self {
        let worked_seconds = report.result.num_seconds();
        Self {
            employee_id,
            day,
            succeeded: report.succeeded,
            worked_seconds,
            worked_hours: seconds_to_hours(worked_seconds),
            notifications: report.notifications,
        }
    }
}

/// A single respite in a response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespiteBody {
    /// When the employee clocked out.
    pub start: NaiveDateTime,
    /// When the employee clocked back in.
    pub end: NaiveDateTime,
    /// Length of the respite in whole seconds.
    pub duration_seconds: i64,
}

impl From<Respite> for RespiteBody {
    fn from(respite: Respite) -> Self {
        Self {
            start: respite.start(),
            end: respite.end(),
            duration_seconds: respite.duration().num_seconds(),
        }
    }
}

/// Body of the respites endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespitesResponse {
    /// The employee reported on.
    pub employee_id: u32,
    /// The reporting day.
    pub day: NaiveDate,
    /// Whether the report could be computed.
    pub succeeded: bool,
    /// The threshold the respites were selected with.
    pub max_minutes: i64,
    /// The respites, in chronological order.
    pub respites: Vec<RespiteBody>,
    /// Corrections applied to the day's stamps.
    pub notifications: Vec<Notification>,
}

impl RespitesResponse {
    /// Builds the body from a respites report.
    pub fn from_report(
        employee_id: u32,
        day: NaiveDate,
        max_minutes: i64,
        report: ReportResult<Vec<Respite>>,
    ) -> Self {
        Self {
            employee_id,
            day,
            succeeded: report.succeeded,
            max_minutes,
            respites: report.result.into_iter().map(Into::into).collect(),
            notifications: report.notifications,
        }
    }
}

fn seconds_to_hours(seconds: i64) -> Decimal {
    (Decimal::new(seconds, 0) / Decimal::new(3600, 0)).round_dp(2)
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates an error for a path or query that could not be parsed.
    pub fn malformed_request(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_REQUEST", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidArgument { argument, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_ARGUMENT",
                    format!("Invalid argument '{}'", argument),
                    message,
                ),
            },
            EngineError::StoreUnavailable { message } => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::with_details("STORE_UNAVAILABLE", "Stamp store unavailable", message),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}
