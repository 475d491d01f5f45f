pub mod action;
pub mod history;

pub use action::{Action, ActionKind};
pub use history::{HistoryState, Transition};
