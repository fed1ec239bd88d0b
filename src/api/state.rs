//! Application state for the attendance tracker API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::StateStore;

/// Shared application state.
///
/// Wraps the persistent state store so every handler reads and mutates
/// the same profiles through one save-on-mutation path.
#[derive(Clone)]
pub struct AppState {
    store: Arc<StateStore>,
}

impl AppState {
    /// Creates a new application state around the given store.
    pub fn new(store: StateStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the state store.
    pub fn store(&self) -> &StateStore {
        &self.store
    }
}
