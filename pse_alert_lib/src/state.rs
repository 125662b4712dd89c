//! JSON file holding the identity of the last event that was alerted on.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from reading or writing the state file.
#[derive(Error, Debug)]
pub enum StateError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid state file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Persisted across runs. Serializes to `{}` when nothing has been handled yet.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct EventState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_event_id: Option<String>,
}

impl EventState {
    pub fn handled(event_id: impl Into<String>) -> Self {
        Self {
            last_event_id: Some(event_id.into()),
        }
    }

    /// True when `event_id` is the last event already alerted on.
    pub fn is_handled(&self, event_id: &str) -> bool {
        self.last_event_id.as_deref() == Some(event_id)
    }
}

/// File-backed store for [`EventState`].
///
/// Reads never fail from the caller's point of view: a missing file is created
/// with the empty state and an unreadable one is treated as empty. Writes go to
/// a sibling `.tmp` file first and are renamed into place.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the state, creating an empty-state file when none exists.
    pub fn load(&self) -> EventState {
        if !self.path.exists() {
            tracing::info!(
                "State file {} does not exist. Creating a new one.",
                self.path.display()
            );
            self.save(&EventState::default());
            return EventState::default();
        }
        match self.try_load() {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Failed to load state, treating it as empty: {}", e);
                EventState::default()
            }
        }
    }

    /// Reads and parses the state file without any fallback.
    pub fn try_load(&self) -> Result<EventState, StateError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| StateError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StateError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Writes the state, logging and swallowing failures. Returns whether the
    /// new state reached disk.
    pub fn save(&self, state: &EventState) -> bool {
        match self.try_save(state) {
            Ok(()) => {
                tracing::info!("State saved: {}", describe(state));
                true
            }
            Err(e) => {
                tracing::error!("Failed to save state: {}", e);
                false
            }
        }
    }

    /// Writes the state, replacing the previous file in one rename.
    pub fn try_save(&self, state: &EventState) -> Result<(), StateError> {
        let body = serde_json::to_string(state).map_err(|source| StateError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        let tmp = self.tmp_path();
        let io_err = |source| StateError::Io {
            path: self.path.clone(),
            source,
        };
        if let Err(e) = fs::write(&tmp, body) {
            let _ = fs::remove_file(&tmp);
            return Err(io_err(e));
        }
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            io_err(e)
        })
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "state.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn describe(state: &EventState) -> String {
    match &state.last_event_id {
        Some(id) => format!("{{'last_event_id': {}}}", id),
        None => "{}".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> StateStore {
        StateStore::new(dir.path().join("state2.json"))
    }

    #[test]
    fn missing_file_yields_empty_state_and_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(!store.path().exists());

        let state = store.load();
        assert_eq!(state, EventState::default());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{}");
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let state = EventState::handled(r#"{"cen":-10.0}"#);

        assert!(store.save(&state));
        assert_eq!(store.load(), state);
        assert!(!dir.path().join("state2.json.tmp").exists());
    }

    #[test]
    fn file_format_matches_schema() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&EventState::handled("abc"));
        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, r#"{"last_event_id":"abc"}"#);
    }

    #[test]
    fn corrupt_file_is_treated_as_empty_and_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json").unwrap();

        assert!(matches!(store.try_load(), Err(StateError::Corrupt { .. })));
        assert_eq!(store.load(), EventState::default());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "not json");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"last_event_id":"x","extra":1}"#).unwrap();
        assert_eq!(store.load(), EventState::handled("x"));
    }

    #[test]
    fn save_into_missing_directory_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("nope").join("state2.json"));
        assert!(!store.save(&EventState::handled("x")));
        assert!(matches!(
            store.try_save(&EventState::handled("x")),
            Err(StateError::Io { .. })
        ));
    }

    #[test]
    fn is_handled_compares_ids() {
        let state = EventState::handled("a");
        assert!(state.is_handled("a"));
        assert!(!state.is_handled("b"));
        assert!(!EventState::default().is_handled("a"));
    }
}
