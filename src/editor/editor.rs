use super::notify::{StackChange, Subscriber};
use crate::config::Config;
use crate::history::{Action, HistoryState};

/// Editor store: holds the current history state and swaps it for the
/// reduced one on every action.
pub struct Editor {
    state: HistoryState,
    subscribers: Vec<Subscriber>,
}

impl Editor {
    /// Create empty editor
    pub fn new() -> Self {
        Self::from_state(HistoryState::new())
    }

    /// Create editor with initial text (not undoable)
    pub fn from_text(text: &str) -> Self {
        Self::from_state(HistoryState::from_text(text))
    }

    pub fn with_config(text: &str, config: &Config) -> Self {
        Self::from_state(HistoryState::from_text(text).with_limit(config.history_limit))
    }

    pub fn from_state(state: HistoryState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    /// Register a listener for stack changes
    pub fn subscribe(&mut self, subscriber: impl FnMut(&StackChange) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Apply one action. Returns whether anything changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let kind = action.kind();
        let transition = self.state.apply(action);

        if !transition.changed {
            tracing::debug!(action = %kind, "no-op");
            return false;
        }

        self.state = transition.state;

        let change = StackChange::new(kind, &self.state);
        tracing::debug!(
            action = %kind,
            undo = change.undo_len,
            redo = change.redo_len,
            chars = self.state.content().chars().count(),
            "applied"
        );

        for subscriber in &mut self.subscribers {
            subscriber(&change);
        }
        true
    }

    /// Replace the whole content
    pub fn edit(&mut self, text: impl Into<String>) -> bool {
        self.dispatch(Action::Edit(text.into()))
    }

    /// Undo last edit
    pub fn undo(&mut self) -> bool {
        self.dispatch(Action::Undo)
    }

    /// Redo last undone edit
    pub fn redo(&mut self) -> bool {
        self.dispatch(Action::Redo)
    }

    /// Append a character
    pub fn insert_char(&mut self, c: char) -> bool {
        let mut text = self.text().to_string();
        text.push(c);
        self.edit(text)
    }

    pub fn insert_newline(&mut self) -> bool {
        self.insert_char('\n')
    }

    /// Remove the last character; nothing is recorded on empty content
    pub fn backspace(&mut self) -> bool {
        let mut text = self.text().to_string();
        if text.pop().is_none() {
            return false;
        }
        self.edit(text)
    }

    /// Empty the content as a single undoable edit
    pub fn clear(&mut self) -> bool {
        if self.text().is_empty() {
            return false;
        }
        self.edit(String::new())
    }

    /// Check if can undo
    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    /// Check if can redo
    pub fn can_redo(&self) -> bool {
        self.state.can_redo()
    }

    /// Get text content
    pub fn text(&self) -> &str {
        self.state.content()
    }

    pub fn undo_stack(&self) -> &[String] {
        self.state.undo_stack()
    }

    pub fn redo_stack(&self) -> &[String] {
        self.state.redo_stack()
    }

    /// Get line count
    pub fn line_count(&self) -> usize {
        self.text().split('\n').count()
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
