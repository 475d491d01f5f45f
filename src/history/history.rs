use super::action::Action;

/// Immutable snapshot of the editor: current content plus both history stacks.
///
/// Stacks are ordered oldest-first, so the most recent snapshot is the last
/// element. Every transition produces a new value through [`HistoryState::apply`];
/// an existing state is never changed in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryState {
    content: String,
    undo_stack: Vec<String>,
    redo_stack: Vec<String>,
    limit: Option<usize>,
}

/// Result of reducing one [`Action`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: HistoryState,
    /// False when the action was a no-op (undo/redo on an empty stack)
    pub changed: bool,
}

impl HistoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            content: text.to_string(),
            ..Self::default()
        }
    }

    /// Cap the undo stack at `limit` entries, dropping the oldest first.
    /// `None` keeps every snapshot.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self.enforce_limit();
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn undo_stack(&self) -> &[String] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[String] {
        &self.redo_stack
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Reduce `action` against this state
    pub fn apply(&self, action: Action) -> Transition {
        match action {
            Action::Edit(new_content) => Transition {
                state: self.edit(new_content),
                changed: true,
            },
            Action::Undo => match self.undo() {
                Some(state) => Transition {
                    state,
                    changed: true,
                },
                None => self.unchanged(),
            },
            Action::Redo => match self.redo() {
                Some(state) => Transition {
                    state,
                    changed: true,
                },
                None => self.unchanged(),
            },
        }
    }

    /// Push the current content onto the undo stack, replace it, and drop
    /// the redo history.
    pub fn edit(&self, new_content: String) -> Self {
        let mut undo_stack = self.undo_stack.clone();
        undo_stack.push(self.content.clone());

        let mut next = Self {
            content: new_content,
            undo_stack,
            redo_stack: Vec::new(),
            limit: self.limit,
        };
        next.enforce_limit();
        next
    }

    /// `None` when there is nothing to undo
    pub fn undo(&self) -> Option<Self> {
        let (previous, rest) = self.undo_stack.split_last()?;

        let mut redo_stack = self.redo_stack.clone();
        redo_stack.push(self.content.clone());

        Some(Self {
            content: previous.clone(),
            undo_stack: rest.to_vec(),
            redo_stack,
            limit: self.limit,
        })
    }

    /// `None` when there is nothing to redo
    pub fn redo(&self) -> Option<Self> {
        let (next, rest) = self.redo_stack.split_last()?;

        let mut undo_stack = self.undo_stack.clone();
        undo_stack.push(self.content.clone());

        // Undo length returns to what it was before the matching undo,
        // which already satisfied the limit.
        Some(Self {
            content: next.clone(),
            undo_stack,
            redo_stack: rest.to_vec(),
            limit: self.limit,
        })
    }

    fn unchanged(&self) -> Transition {
        Transition {
            state: self.clone(),
            changed: false,
        }
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            if self.undo_stack.len() > limit {
                let excess = self.undo_stack.len() - limit;
                self.undo_stack.drain(..excess);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_does_not_touch_the_source_state() {
        let before = HistoryState::from_text("a");
        let after = before.apply(Action::Edit("ab".to_string())).state;

        assert_eq!(before.content(), "a");
        assert!(before.undo_stack().is_empty());
        assert_eq!(after.content(), "ab");
    }

    #[test]
    fn limit_drops_oldest_snapshots() {
        let mut state = HistoryState::new().with_limit(Some(2));
        for text in ["a", "ab", "abc"] {
            state = state.edit(text.to_string());
        }

        assert_eq!(state.undo_stack(), ["a", "ab"]);
    }
}
