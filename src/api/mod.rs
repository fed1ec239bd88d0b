//! HTTP API module for the attendance tracker.
//!
//! This module provides the REST endpoints for managing profiles,
//! recording attendance, and deriving monthly payroll summaries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    ActivateProfileRequest, CreateProfileRequest, PaidAmountRequest, RecordAttendanceRequest,
    ThemeRequest, UpdateSettingsRequest,
};
pub use response::{ApiError, ProfileInfo, ProfileListResponse};
pub use state::AppState;
