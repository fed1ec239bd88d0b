//! Application state model.
//!
//! This module defines the persisted application state: the profile list,
//! the active profile reference, and the theme preference, together with
//! the self-healing rules that keep the active reference valid.

use serde::{Deserialize, Serialize};

use crate::models::Profile;

/// Name given to a synthesized profile when none exists.
pub const DEFAULT_PROFILE_NAME: &str = "Default";

/// Color theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

/// The process-wide state persisted between sessions.
///
/// At least one profile always exists and exactly one is active;
/// [`PersistedState::ensure_active_profile`] restores that invariant
/// whenever profiles are removed or a loaded document references a
/// profile that no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    /// All configured profiles.
    pub profiles: Vec<Profile>,
    /// Id of the currently active profile.
    pub active_profile_id: String,
    /// Theme preference.
    #[serde(default)]
    pub theme: Theme,
}

impl Default for PersistedState {
    fn default() -> Self {
        let profile = Profile::new(DEFAULT_PROFILE_NAME);
        let active_profile_id = profile.id.clone();
        Self {
            profiles: vec![profile],
            active_profile_id,
            theme: Theme::default(),
        }
    }
}

impl PersistedState {
    /// Restores the at-least-one-profile and valid-active-reference
    /// invariants, synthesizing a default profile when needed.
    ///
    /// Returns true when the state was changed.
    pub fn ensure_active_profile(&mut self) -> bool {
        let mut changed = false;
        if self.profiles.is_empty() {
            self.profiles.push(Profile::new(DEFAULT_PROFILE_NAME));
            changed = true;
        }
        if !self.profiles.iter().any(|p| p.id == self.active_profile_id) {
            self.active_profile_id = self.profiles[0].id.clone();
            changed = true;
        }
        changed
    }

    /// Returns the active profile.
    ///
    /// `None` only when the active reference dangles; callers that run
    /// [`Self::ensure_active_profile`] first always get a profile.
    pub fn active_profile(&self) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == self.active_profile_id)
    }

    /// Returns the active profile mutably.
    pub fn active_profile_mut(&mut self) -> Option<&mut Profile> {
        let id = self.active_profile_id.clone();
        self.profile_mut(&id)
    }

    /// Returns the profile with the given id mutably.
    pub fn profile_mut(&mut self, id: &str) -> Option<&mut Profile> {
        self.profiles.iter_mut().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_has_one_active_profile() {
        let state = PersistedState::default();
        assert_eq!(state.profiles.len(), 1);
        assert_eq!(state.profiles[0].name, DEFAULT_PROFILE_NAME);
        assert_eq!(state.active_profile_id, state.profiles[0].id);
        assert_eq!(state.theme, Theme::Light);
    }

    #[test]
    fn test_ensure_active_synthesizes_profile_when_empty() {
        let mut state = PersistedState::default();
        state.profiles.clear();

        assert!(state.ensure_active_profile());
        assert_eq!(state.profiles.len(), 1);
        assert_eq!(state.active_profile_id, state.profiles[0].id);
    }

    #[test]
    fn test_ensure_active_repairs_dangling_reference() {
        let mut state = PersistedState::default();
        state.active_profile_id = "dangling".to_string();

        assert!(state.ensure_active_profile());
        assert_eq!(state.active_profile_id, state.profiles[0].id);
    }

    #[test]
    fn test_ensure_active_is_a_noop_on_valid_state() {
        let mut state = PersistedState::default();
        let before = state.clone();

        assert!(!state.ensure_active_profile());
        assert_eq!(state, before);
    }

    #[test]
    fn test_active_profile_lookup() {
        let mut state = PersistedState::default();
        state.profiles.push(Profile::new("Second"));

        let active = state.active_profile().unwrap();
        assert_eq!(active.name, DEFAULT_PROFILE_NAME);

        state.active_profile_id = state.profiles[1].id.clone();
        assert_eq!(state.active_profile().unwrap().name, "Second");
    }

    #[test]
    fn test_active_profile_mut_allows_edits() {
        let mut state = PersistedState::default();
        state.active_profile_mut().unwrap().name = "Renamed".to_string();
        assert_eq!(state.active_profile().unwrap().name, "Renamed");
    }

    #[test]
    fn test_theme_serialization_is_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }

    #[test]
    fn test_state_round_trips_with_camel_case_fields() {
        let state = PersistedState::default();
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"activeProfileId\""));
        assert!(json.contains("\"theme\":\"light\""));

        let back: PersistedState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }

    #[test]
    fn test_missing_theme_defaults_to_light() {
        let json = r#"{
            "profiles": [{"id": "p1", "name": "A"}],
            "activeProfileId": "p1"
        }"#;
        let state: PersistedState = serde_json::from_str(json).unwrap();
        assert_eq!(state.theme, Theme::Light);
    }
}
