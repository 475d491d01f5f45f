pub mod editor;
pub mod notify;

pub use editor::Editor;
pub use notify::{StackChange, Subscriber};
