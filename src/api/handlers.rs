//! HTTP request handlers for the stamp reporting API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Duration;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::reports::DailyReportsManager;

use super::request::{DayPath, RespitesQuery};
use super::response::{ApiError, ApiErrorResponse, RespitesResponse, WorkedTimeResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/employees/:employee_id/days/:day/worked-time",
            get(worked_time_handler),
        )
        .route(
            "/employees/:employee_id/days/:day/respites",
            get(respites_handler),
        )
        .with_state(state)
}

/// Handler for GET /employees/:employee_id/days/:day/worked-time.
async fn worked_time_handler(
    State(state): State<AppState>,
    path: Result<Path<DayPath>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing worked time request");

    let DayPath { employee_id, day } = match path {
        Ok(Path(path)) => path,
        Err(rejection) => return malformed(correlation_id, rejection.body_text()),
    };

    let start_time = Instant::now();
    let manager = DailyReportsManager::new(state.store(), state.config().correction);
    let report = manager.worked_time_for_day(employee_id, day);

    info!(
        correlation_id = %correlation_id,
        employee_id,
        %day,
        succeeded = report.succeeded,
        notifications = report.notifications.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Worked time report completed"
    );

    json_ok(WorkedTimeResponse::from_report(employee_id, day, report))
}

/// Handler for GET /employees/:employee_id/days/:day/respites.
async fn respites_handler(
    State(state): State<AppState>,
    path: Result<Path<DayPath>, PathRejection>,
    query: Result<Query<RespitesQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing respites request");

    let DayPath { employee_id, day } = match path {
        Ok(Path(path)) => path,
        Err(rejection) => return malformed(correlation_id, rejection.body_text()),
    };
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return malformed(correlation_id, rejection.body_text()),
    };

    let max_minutes = query
        .max_minutes
        .unwrap_or(state.config().default_max_respite_minutes);

    let Some(max_duration) = Duration::try_minutes(max_minutes) else {
        return rejected(
            correlation_id,
            EngineError::invalid_argument("max_minutes", format!("{} is out of range", max_minutes)),
        );
    };

    let start_time = Instant::now();
    let manager = DailyReportsManager::new(state.store(), state.config().correction);

    match manager.respites_for_day(employee_id, day, max_duration) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                employee_id,
                %day,
                max_minutes,
                succeeded = report.succeeded,
                respites = report.result.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Respites report completed"
            );
            json_ok(RespitesResponse::from_report(
                employee_id,
                day,
                max_minutes,
                report,
            ))
        }
        Err(err) => rejected(correlation_id, err),
    }
}

fn json_ok<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn rejected(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Report request rejected"
    );
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn malformed(correlation_id: Uuid, message: String) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %message,
        "Malformed request"
    );
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ApiError::malformed_request(message)),
    )
        .into_response()
}
