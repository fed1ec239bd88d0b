//! JSON-file state store.
//!
//! This module persists the whole application state as one document under
//! a single versioned key in a JSON file, with a load-or-default startup
//! path and save-on-every-mutation writes.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, info};

use crate::error::{TrackerError, TrackerResult};

use super::PersistedState;

/// The versioned key the state document lives under.
///
/// Bumping the version retires old documents instead of misreading them.
pub const STATE_KEY: &str = "attendance-tracker/state-v1";

/// File-backed store for the persisted application state.
///
/// The file holds a JSON object mapping [`STATE_KEY`] to the state
/// document. Reads run against an in-memory copy behind a lock; every
/// mutation is written back in full before the update call returns, via a
/// temp-file rename so a crashed write never truncates the previous
/// document.
///
/// # Example
///
/// ```no_run
/// use attendance_tracker::store::StateStore;
///
/// let store = StateStore::open("./data/state.json")?;
/// let profile_count = store.read(|state| state.profiles.len());
/// # Ok::<(), attendance_tracker::error::TrackerError>(())
/// ```
#[derive(Debug)]
pub struct StateStore {
    path: PathBuf,
    state: RwLock<PersistedState>,
}

impl StateStore {
    /// Opens the store, loading existing state or starting from the
    /// default.
    ///
    /// A missing file yields the default state (one active profile). A
    /// file that exists but cannot be read or parsed is an error; the
    /// store never silently discards a document it cannot understand.
    /// The self-healing active-profile rules run on whatever was loaded.
    pub fn open<P: AsRef<Path>>(path: P) -> TrackerResult<Self> {
        let path = path.as_ref().to_path_buf();
        let mut state = match Self::load(&path)? {
            Some(state) => {
                info!(path = %path.display(), "Loaded persisted state");
                state
            }
            None => {
                info!(path = %path.display(), "No persisted state, starting fresh");
                PersistedState::default()
            }
        };
        state.ensure_active_profile();

        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    /// Runs a closure against the current state under a read lock.
    pub fn read<R>(&self, f: impl FnOnce(&PersistedState) -> R) -> R {
        let state = self.state.read().expect("state lock poisoned");
        f(&state)
    }

    /// Runs a mutating closure against the state and persists the result.
    ///
    /// The document is saved on every mutation; if the write fails the
    /// error is returned but the in-memory mutation stands, so a later
    /// update can retry the save.
    pub fn update<R>(&self, f: impl FnOnce(&mut PersistedState) -> R) -> TrackerResult<R> {
        let mut state = self.state.write().expect("state lock poisoned");
        let result = f(&mut state);
        self.save(&state)?;
        Ok(result)
    }

    fn load(path: &Path) -> TrackerResult<Option<PersistedState>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path).map_err(|err| TrackerError::StateLoad {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        let mut document: HashMap<String, PersistedState> = serde_json::from_str(&contents)
            .map_err(|err| TrackerError::StateLoad {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;

        Ok(document.remove(STATE_KEY))
    }

    fn save(&self, state: &PersistedState) -> TrackerResult<()> {
        let persist_err = |err: String| TrackerError::StatePersist {
            path: self.path.display().to_string(),
            message: err,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| persist_err(err.to_string()))?;
            }
        }

        let mut document = HashMap::new();
        document.insert(STATE_KEY, state);
        let contents =
            serde_json::to_string_pretty(&document).map_err(|err| persist_err(err.to_string()))?;

        // Write-then-rename keeps the previous document intact if the
        // process dies mid-write.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents).map_err(|err| persist_err(err.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|err| persist_err(err.to_string()))?;

        debug!(path = %self.path.display(), "Persisted state");
        Ok(())
    }
}
