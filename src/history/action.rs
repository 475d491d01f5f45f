/// A single user action against the history buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the content, recording the old content for undo
    Edit(String),
    Undo,
    Redo,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Edit(_) => ActionKind::Edit,
            Action::Undo => ActionKind::Undo,
            Action::Redo => ActionKind::Redo,
        }
    }
}

/// Payload-free tag of an [`Action`], used in notifications and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Edit,
    Undo,
    Redo,
}

impl ActionKind {
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Edit => "Edit",
            ActionKind::Undo => "Undo",
            ActionKind::Redo => "Redo",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
