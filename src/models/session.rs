use crate::models::joke::JokeResult;
use crate::models::selection::{Category, SelectionState};

/// Lifecycle of the joke display surface.
///
/// `Loading` is re-entered on every new request; there is no terminal
/// phase, the surface is always re-triggerable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayPhase {
    #[default]
    Idle,
    Loading,
    Displayed,
    Failed,
    Empty,
}

impl DisplayPhase {
    /// The phase a finished request lands in.
    pub fn from_result(result: &JokeResult) -> Self {
        match result {
            JokeResult::Delivered(_) => DisplayPhase::Displayed,
            JokeResult::FetchFailed => DisplayPhase::Failed,
            JokeResult::NoCustomJokes => DisplayPhase::Empty,
        }
    }
}

/// Single source of truth for per-session display state.
///
/// `SessionState` is wrapped in `Arc<RwLock<SessionState>>` by
/// [`crate::state::StateManager`]; mutate it through the manager's
/// `update()` so change events are emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Active language/category filter.
    pub selection: SelectionState,

    /// Where the display surface is in its request lifecycle.
    pub phase: DisplayPhase,

    /// Text currently on the display surface (joke or placeholder).
    /// Kept across `Loading` so the previous joke stays visible until
    /// the new result lands.
    pub current_text: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            selection: SelectionState::default(),
            phase: DisplayPhase::Idle,
            current_text: None,
        }
    }
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        self.phase == DisplayPhase::Loading
    }

    /// Whether the active category routes to the local custom collection.
    pub fn is_custom_selected(&self) -> bool {
        self.selection.category == Category::Custom
    }

    /// Apply a finished request: phase from the result kind, text from its
    /// display rendering (placeholders included).
    pub fn apply_result(&mut self, result: &JokeResult) {
        self.phase = DisplayPhase::from_result(result);
        self.current_text = Some(result.display_text().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session() {
        let session = SessionState::default();
        assert_eq!(session.phase, DisplayPhase::Idle);
        assert!(session.current_text.is_none());
        assert!(!session.is_loading());
        assert!(!session.is_custom_selected());
    }

    #[test]
    fn test_phase_from_result() {
        assert_eq!(
            DisplayPhase::from_result(&JokeResult::Delivered("X".to_string())),
            DisplayPhase::Displayed
        );
        assert_eq!(
            DisplayPhase::from_result(&JokeResult::FetchFailed),
            DisplayPhase::Failed
        );
        assert_eq!(
            DisplayPhase::from_result(&JokeResult::NoCustomJokes),
            DisplayPhase::Empty
        );
    }

    #[test]
    fn test_apply_result_sets_placeholder_text() {
        let mut session = SessionState::default();
        session.apply_result(&JokeResult::NoCustomJokes);
        assert_eq!(session.phase, DisplayPhase::Empty);
        assert_eq!(
            session.current_text.as_deref(),
            Some("No custom jokes available. Add some!")
        );
    }

    #[test]
    fn test_apply_result_overwrites_previous_text() {
        let mut session = SessionState::default();
        session.apply_result(&JokeResult::Delivered("first".to_string()));
        session.apply_result(&JokeResult::Delivered("second".to_string()));
        assert_eq!(session.current_text.as_deref(), Some("second"));
        assert_eq!(session.phase, DisplayPhase::Displayed);
    }

    #[test]
    fn test_custom_selected() {
        let mut session = SessionState::default();
        session.selection.category = Category::Custom;
        assert!(session.is_custom_selected());
    }
}
