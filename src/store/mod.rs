//! Persisted application state.
//!
//! This module holds the process-wide state (profiles, active profile id,
//! theme preference) and the JSON key-value store it is persisted to under
//! a single versioned key.

mod state;
mod state_store;

pub use state::{DEFAULT_PROFILE_NAME, PersistedState, Theme};
pub use state_store::{STATE_KEY, StateStore};
