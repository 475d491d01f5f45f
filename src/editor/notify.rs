use crate::history::{ActionKind, HistoryState};

/// Stack-changed notification, sent after every action that changed state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackChange {
    pub kind: ActionKind,
    pub undo_len: usize,
    pub redo_len: usize,
}

impl StackChange {
    pub fn new(kind: ActionKind, state: &HistoryState) -> Self {
        Self {
            kind,
            undo_len: state.undo_stack().len(),
            redo_len: state.redo_stack().len(),
        }
    }
}

pub type Subscriber = Box<dyn FnMut(&StackChange)>;
