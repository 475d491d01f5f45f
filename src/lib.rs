pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod gui;
pub mod history;
pub mod keymap;
pub mod logging;
pub mod ui;

// Re-export commonly used types
pub use config::{AnimationConfig, Config};
pub use editor::{Editor, StackChange};
pub use error::{Error, Result};
pub use gui::GuiApp;
pub use history::{Action, ActionKind, HistoryState, Transition};
pub use keymap::{map_key, Command, Focus};
pub use ui::{render, App};
