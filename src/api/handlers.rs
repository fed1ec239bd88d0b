//! HTTP request handlers for the attendance tracker API.
//!
//! This module contains the handler functions for all API endpoints. All
//! attendance, summary, payment, and import/export operations act on the
//! currently active profile; profile CRUD manages the profile list itself.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post, put},
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{YearMonth, summary_for_month};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{AttendanceRecord, Profile};
use crate::store::PersistedState;
use crate::transfer::{apply_import, export_filename, export_profile, parse_profile_document};

use super::request::{
    ActivateProfileRequest, CreateProfileRequest, PaidAmountRequest, RecordAttendanceRequest,
    ThemeRequest, UpdateSettingsRequest,
};
use super::response::{ApiError, ApiErrorResponse, ProfileInfo, ProfileListResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/profiles", get(list_profiles).post(create_profile))
        .route("/profiles/:id", axum::routing::delete(delete_profile))
        .route("/profiles/:id/settings", put(update_settings))
        .route("/active-profile", put(activate_profile))
        .route("/theme", put(set_theme))
        .route("/summary/:year/:month", get(month_summary))
        .route(
            "/attendance/:date",
            put(record_attendance).delete(clear_attendance),
        )
        .route("/months/:key/paid", put(set_paid_amount))
        .route("/export", get(export_active))
        .route("/import", post(import_active))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error response.
fn reject_json(rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde.
            let body_text = err.body_text();
            warn!(error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
}

/// Runs a fallible mutation against the store, folding store and domain
/// errors into one response type.
fn apply_update<R>(
    state: &AppState,
    f: impl FnOnce(&mut PersistedState) -> TrackerResult<R>,
) -> Result<R, ApiErrorResponse> {
    match state.store().update(f) {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(err)) => Err(err.into()),
        Err(err) => Err(err.into()),
    }
}

/// Resolves the active profile mutably inside an update closure.
fn active_profile_mut(state: &mut PersistedState) -> TrackerResult<&mut Profile> {
    let active_id = state.active_profile_id.clone();
    state
        .profile_mut(&active_id)
        .ok_or(TrackerError::ProfileNotFound { id: active_id })
}

/// Handler for `GET /profiles`.
async fn list_profiles(State(state): State<AppState>) -> impl IntoResponse {
    let response = state.store().read(|state| ProfileListResponse {
        profiles: state
            .profiles
            .iter()
            .map(|p| ProfileInfo {
                id: p.id.clone(),
                name: p.name.clone(),
            })
            .collect(),
        active_profile_id: state.active_profile_id.clone(),
    });
    Json(response)
}

/// Handler for `POST /profiles`.
async fn create_profile(
    State(state): State<AppState>,
    payload: Result<Json<CreateProfileRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return reject_json(rejection).into_response(),
    };

    if request.name.trim().is_empty() {
        return ApiErrorResponse::from(TrackerError::InvalidProfileField {
            field: "name".to_string(),
            message: "cannot be empty".to_string(),
        })
        .into_response();
    }

    let result = apply_update(&state, |state| {
        let profile = Profile::new(request.name.trim());
        let info = ProfileInfo {
            id: profile.id.clone(),
            name: profile.name.clone(),
        };
        state.profiles.push(profile);
        Ok(info)
    });

    match result {
        Ok(info) => {
            info!(profile_id = %info.id, "Created profile");
            (StatusCode::CREATED, Json(info)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Handler for `DELETE /profiles/:id`.
///
/// Deleting the active profile (or the last profile) triggers the
/// self-healing rules: the first remaining profile is activated, or a
/// default profile is synthesized when none remain.
async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let result = apply_update(&state, |state| {
        let index = state
            .profiles
            .iter()
            .position(|p| p.id == id)
            .ok_or(TrackerError::ProfileNotFound { id: id.clone() })?;
        state.profiles.remove(index);
        state.ensure_active_profile();
        Ok(())
    });

    match result {
        Ok(()) => {
            info!(profile_id = %id, "Deleted profile");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Handler for `PUT /profiles/:id/settings`.
async fn update_settings(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateSettingsRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return reject_json(rejection).into_response(),
    };

    if let Err(err) = validate_settings(&request) {
        return ApiErrorResponse::from(err).into_response();
    }

    let result = apply_update(&state, |state| {
        let profile = state
            .profile_mut(&id)
            .ok_or(TrackerError::ProfileNotFound { id: id.clone() })?;
        profile.monthly_salary = request.monthly_salary;
        profile.overtime_rate = request.overtime_rate;
        profile.weekly_off_days = request.weekly_off_days.iter().copied().collect();
        Ok(())
    });

    match result {
        Ok(()) => {
            info!(profile_id = %id, "Updated profile settings");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Editor-side validation of salary terms and the off-day schedule.
fn validate_settings(request: &UpdateSettingsRequest) -> TrackerResult<()> {
    if request.monthly_salary < Decimal::ZERO {
        return Err(TrackerError::InvalidProfileField {
            field: "monthlySalary".to_string(),
            message: "cannot be negative".to_string(),
        });
    }
    if let Some(rate) = request.overtime_rate {
        if rate < Decimal::ZERO {
            return Err(TrackerError::InvalidProfileField {
                field: "overtimeRate".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
    }
    if let Some(day) = request.weekly_off_days.iter().find(|d| **d > 6) {
        return Err(TrackerError::InvalidProfileField {
            field: "weeklyOffDays".to_string(),
            message: format!("{} is not a weekday index (0..=6)", day),
        });
    }
    let distinct: std::collections::BTreeSet<u8> =
        request.weekly_off_days.iter().copied().collect();
    if distinct.len() > 2 {
        return Err(TrackerError::InvalidProfileField {
            field: "weeklyOffDays".to_string(),
            message: "at most 2 days allowed".to_string(),
        });
    }
    Ok(())
}

/// Handler for `PUT /active-profile`.
async fn activate_profile(
    State(state): State<AppState>,
    payload: Result<Json<ActivateProfileRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return reject_json(rejection).into_response(),
    };

    let result = apply_update(&state, |state| {
        if !state.profiles.iter().any(|p| p.id == request.id) {
            return Err(TrackerError::ProfileNotFound {
                id: request.id.clone(),
            });
        }
        state.active_profile_id = request.id.clone();
        Ok(())
    });

    match result {
        Ok(()) => {
            info!(profile_id = %request.id, "Activated profile");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Handler for `PUT /theme`.
async fn set_theme(
    State(state): State<AppState>,
    payload: Result<Json<ThemeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return reject_json(rejection).into_response(),
    };

    let result = apply_update(&state, |state| {
        state.theme = request.theme;
        Ok(())
    });

    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

/// Handler for `GET /summary/:year/:month`.
///
/// Derives the payroll summary for the active profile. A month the
/// profile has never touched reads as an empty ledger and summarizes to
/// zeros.
async fn month_summary(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let Some(target) = YearMonth::new(year, month) else {
        return ApiErrorResponse::from(TrackerError::InvalidMonthKey {
            key: format!("{:04}-{:02}", year, month),
        })
        .into_response();
    };

    let summary = state
        .store()
        .read(|state| state.active_profile().map(|p| summary_for_month(p, target)));

    match summary {
        Some(summary) => {
            info!(
                correlation_id = %correlation_id,
                month = %target.key(),
                total_income = %summary.total_income,
                "Calculated monthly summary"
            );
            Json(summary).into_response()
        }
        None => ApiErrorResponse::from(TrackerError::ProfileNotFound {
            id: "active".to_string(),
        })
        .into_response(),
    }
}

/// Handler for `PUT /attendance/:date`.
async fn record_attendance(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
    payload: Result<Json<RecordAttendanceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return reject_json(rejection).into_response(),
    };

    let date_key = YearMonth::date_key(date);
    if request.overtime < Decimal::ZERO {
        return ApiErrorResponse::from(TrackerError::InvalidAttendance {
            date: date_key,
            message: "overtime cannot be negative".to_string(),
        })
        .into_response();
    }

    let month_key = YearMonth::from_date(date).key();
    let record = AttendanceRecord {
        status: request.status,
        overtime: request.overtime,
    };

    let result = apply_update(&state, |state| {
        let profile = active_profile_mut(state)?;
        profile
            .month_mut(&month_key)
            .attendance
            .insert(date_key.clone(), record.clone());
        Ok(())
    });

    match result {
        Ok(()) => {
            info!(date = %date_key, status = %record.status, "Recorded attendance");
            Json(record).into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Handler for `DELETE /attendance/:date`.
///
/// Removing a record that was never stored is a no-op, not an error.
async fn clear_attendance(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> impl IntoResponse {
    let date_key = YearMonth::date_key(date);
    let month_key = YearMonth::from_date(date).key();

    let result = apply_update(&state, |state| {
        let profile = active_profile_mut(state)?;
        if let Some(ledger) = profile.monthly_data.get_mut(&month_key) {
            ledger.attendance.remove(&date_key);
        }
        Ok(())
    });

    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

/// Handler for `PUT /months/:key/paid`.
async fn set_paid_amount(
    State(state): State<AppState>,
    Path(key): Path<String>,
    payload: Result<Json<PaidAmountRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return reject_json(rejection).into_response(),
    };

    let Some(month) = YearMonth::parse_key(&key) else {
        return ApiErrorResponse::from(TrackerError::InvalidMonthKey { key }).into_response();
    };
    if request.paid_amount < Decimal::ZERO {
        return ApiErrorResponse::from(TrackerError::InvalidProfileField {
            field: "paidAmount".to_string(),
            message: "cannot be negative".to_string(),
        })
        .into_response();
    }

    let result = apply_update(&state, |state| {
        let profile = active_profile_mut(state)?;
        profile.month_mut(&month.key()).paid_amount = request.paid_amount;
        Ok(())
    });

    match result {
        Ok(()) => {
            info!(month = %month.key(), paid = %request.paid_amount, "Updated paid amount");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Handler for `GET /export`.
///
/// Serializes the active profile and names the download after the
/// profile and the export date.
async fn export_active(State(state): State<AppState>) -> impl IntoResponse {
    let exported = state.store().read(|state| {
        state
            .active_profile()
            .map(|p| (export_profile(p), p.name.clone()))
    });

    match exported {
        Some((document, name)) => {
            let filename = export_filename(&name, Utc::now().date_naive());
            info!(filename = %filename, "Exported profile");
            (
                [(
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", filename),
                )],
                Json(document),
            )
                .into_response()
        }
        None => ApiErrorResponse::from(TrackerError::ProfileNotFound {
            id: "active".to_string(),
        })
        .into_response(),
    }
}

/// Handler for `POST /import`.
///
/// Parses and validates the document in full before touching the active
/// profile; a rejected document leaves existing data untouched. On
/// acceptance the active profile's terms and ledgers are replaced while
/// its id and name are preserved.
async fn import_active(State(state): State<AppState>, body: String) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let document = match parse_profile_document(&body) {
        Ok(document) => document,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Import rejected");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let result = apply_update(&state, |state| {
        let profile = active_profile_mut(state)?;
        apply_import(profile, document);
        Ok(())
    });

    match result {
        Ok(()) => {
            info!(correlation_id = %correlation_id, "Imported profile document");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => err.into_response(),
    }
}
