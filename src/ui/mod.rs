pub mod animation;
pub mod app;
pub mod renderer;
pub mod stack_view;
pub mod terminal;

pub use animation::Animation;
pub use app::App;
pub use renderer::{entry_label, render, render_at};
pub use stack_view::StackView;
pub use terminal::{init, restore, Tui};
