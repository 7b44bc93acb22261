// State management module
//
// This module provides the StateManager which wraps SessionState with
// thread-safe access using Arc<RwLock<T>> and emits change events so the
// presentation surface can react without polling.

use crate::models::{Category, DisplayPhase, JokeResult, SessionState, UserConfig};
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

/// Change events emitted when session state is modified
#[derive(Clone, Debug, PartialEq)]
pub enum StateChange {
    /// The language/category filter changed
    SelectionChanged { language: String, category: Category },

    /// The display surface moved to a new phase and/or text
    DisplayUpdated {
        phase: DisplayPhase,
        text: Option<String>,
    },
}

/// Thread-safe session state manager with event emission
///
/// This is the central state management component that:
/// - Provides thread-safe access to [`SessionState`] via `Arc<RwLock<T>>`
/// - Detects state changes and emits [`StateChange`] events
/// - Drives the display state machine:
///   `Idle -> Loading -> {Displayed, Failed, Empty}`, re-entering `Loading`
///   on every new request
///
/// # Usage
///
/// Always use `StateManager` instead of mutating [`SessionState`] directly:
/// - [`read()`](Self::read) for reading state without cloning
/// - [`update()`](Self::update) for mutations with automatic change events
/// - [`subscribe()`](Self::subscribe) for listening to state changes
pub struct StateManager {
    /// The session state protected by RwLock for thread-safe access
    state: Arc<RwLock<SessionState>>,

    /// Broadcast channel for emitting state change events.
    /// Multiple subscribers can listen for state changes.
    state_tx: broadcast::Sender<StateChange>,
}

impl StateManager {
    /// Create a new StateManager with default state
    pub fn new() -> Self {
        let (state_tx, _) = broadcast::channel(100);
        Self {
            state: Arc::new(RwLock::new(SessionState::default())),
            state_tx,
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn snapshot(&self) -> SessionState {
        self.state.read().unwrap().clone()
    }

    /// Execute a function with read access to the state
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SessionState) -> R,
    {
        let state = self.state.read().unwrap();
        f(&state)
    }

    /// Update the state and emit change events
    ///
    /// Captures the old state, applies the update function, diffs the two,
    /// and broadcasts one event per observed change.
    ///
    /// # Returns
    /// The StateChange events that were emitted
    pub fn update<F>(&self, update_fn: F) -> Vec<StateChange>
    where
        F: FnOnce(&mut SessionState),
    {
        let mut state = self.state.write().unwrap();
        let old_state = state.clone();

        update_fn(&mut state);

        let changes = detect_changes(&old_state, &state);

        for change in &changes {
            // Ignore send errors - it's OK if no one is listening
            let _ = self.state_tx.send(change.clone());
        }

        changes
    }

    /// Subscribe to state change events
    ///
    /// Returns a receiver that will get notified of all future state changes.
    /// Multiple subscribers can listen simultaneously.
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.state_tx.subscribe()
    }

    // Convenience methods for common state updates

    /// Change the active language
    pub fn set_language(&self, language: impl Into<String>) -> Vec<StateChange> {
        let language = language.into();
        self.update(|state| {
            state.selection.language = language;
        })
    }

    /// Change the active category
    pub fn set_category(&self, category: Category) -> Vec<StateChange> {
        self.update(|state| {
            state.selection.category = category;
        })
    }

    /// Enter `Loading` for a new request. The previous text stays on the
    /// surface until the result lands.
    pub fn begin_request(&self) -> Vec<StateChange> {
        self.update(|state| {
            state.phase = DisplayPhase::Loading;
        })
    }

    /// Apply a finished request to the display surface.
    pub fn finish_request(&self, result: &JokeResult) -> Vec<StateChange> {
        self.update(|state| {
            state.apply_result(result);
        })
    }

    /// Seed the selection from the user configuration.
    pub fn load_from_user_config(&self, user_config: &UserConfig) -> Vec<StateChange> {
        self.update(|state| {
            let settings = &user_config.settings;
            state.selection.language = settings.default_language.clone();
            state.selection.category = Category::parse(&settings.default_category);

            tracing::info!(
                "Loaded user config: language={}, category={}",
                state.selection.language,
                state.selection.category
            );
        })
    }
}

/// Detect what changed between two states and generate events
fn detect_changes(old: &SessionState, new: &SessionState) -> Vec<StateChange> {
    let mut changes = Vec::new();

    if old.selection != new.selection {
        changes.push(StateChange::SelectionChanged {
            language: new.selection.language.clone(),
            category: new.selection.category.clone(),
        });
    }

    if old.phase != new.phase || old.current_text != new.current_text {
        changes.push(StateChange::DisplayUpdated {
            phase: new.phase,
            text: new.current_text.clone(),
        });
    }

    changes
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

// Make StateManager cloneable for sharing across tasks
impl Clone for StateManager {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            state_tx: self.state_tx.clone(),
        }
    }
}
