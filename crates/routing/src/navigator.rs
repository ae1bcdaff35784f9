//! Navigation boundary.
//!
//! The client requests navigation; the host shell owns the actual view
//! stack. Tests use [`RecordingNavigator`] to assert that a redirect was
//! requested without any rendering involved.

use std::sync::Mutex;

/// Sink for navigation requests plus the current location.
pub trait Navigator: Send + Sync {
    /// Path of the currently displayed route.
    fn current_path(&self) -> String;

    /// Request navigation to `path`.
    fn navigate(&self, path: &str);
}

/// Navigator that records requests in memory.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    inner: Mutex<RecordedState>,
}

#[derive(Debug, Default)]
struct RecordedState {
    current: String,
    history: Vec<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(path: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(RecordedState {
                current: path.into(),
                history: Vec::new(),
            }),
        }
    }

    /// Every navigation requested so far, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.inner.lock().expect("navigator lock poisoned").history.clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.inner.lock().expect("navigator lock poisoned").current.clone()
    }

    fn navigate(&self, path: &str) {
        let mut state = self.inner.lock().expect("navigator lock poisoned");
        state.current = path.to_owned();
        state.history.push(path.to_owned());
    }
}
