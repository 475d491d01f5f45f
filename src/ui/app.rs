use super::animation::Animation;
use super::stack_view::StackView;
use crate::config::Config;
use crate::editor::{Editor, StackChange};
use crate::history::ActionKind;
use crate::keymap::{map_key, Command, Focus};
use crossterm::event::{self, Event, KeyEvent};
use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Instant;

/// Application state
pub struct App {
    pub editor: Editor,
    pub config: Config,
    pub focus: Focus,
    pub undo_view: StackView,
    pub redo_view: StackView,
    pub should_quit: bool,
    pub status_message: String,
    entrance: Animation,
    flash: Option<(ActionKind, Animation)>,
    last_change: Rc<Cell<Option<StackChange>>>,
}

impl App {
    /// Create new app with empty editor
    pub fn new() -> Self {
        Self::with_config("", Config::default())
    }

    pub fn with_config(text: &str, config: Config) -> Self {
        let mut editor = Editor::with_config(text, &config);

        let last_change = Rc::new(Cell::new(None));
        let sink = Rc::clone(&last_change);
        editor.subscribe(move |change| sink.set(Some(*change)));

        Self {
            editor,
            entrance: Animation::new(Instant::now(), config.animation.entrance()),
            config,
            focus: Focus::default(),
            undo_view: StackView::new(),
            redo_view: StackView::new(),
            should_quit: false,
            status_message: String::new(),
            flash: None,
            last_change,
        }
    }

    /// Poll for one terminal event, waiting at most one tick
    pub fn handle_input(&mut self) -> io::Result<()> {
        if event::poll(self.config.tick_rate())? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key, Instant::now());
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if let Some(command) = map_key(key, self.focus) {
            self.execute(command, now);
        }
    }

    pub fn execute(&mut self, command: Command, now: Instant) {
        match command {
            Command::Quit => {
                tracing::info!("quit requested");
                self.should_quit = true;
            }
            Command::Undo => {
                if !self.editor.undo() {
                    self.status_message = "Nothing to undo".to_string();
                }
            }
            Command::Redo => {
                if !self.editor.redo() {
                    self.status_message = "Nothing to redo".to_string();
                }
            }
            Command::Insert(c) => {
                self.editor.insert_char(c);
            }
            Command::Newline => {
                self.editor.insert_newline();
            }
            Command::Backspace => {
                self.editor.backspace();
            }
            Command::Clear => {
                self.editor.clear();
            }
            Command::FocusNext => self.focus = self.focus.next(),
            Command::ScrollUp => match self.focus {
                Focus::UndoList => self.undo_view.scroll_up(self.editor.undo_stack().len()),
                Focus::RedoList => self.redo_view.scroll_up(self.editor.redo_stack().len()),
                Focus::Editor => {}
            },
            Command::ScrollDown => match self.focus {
                Focus::UndoList => self.undo_view.scroll_down(),
                Focus::RedoList => self.redo_view.scroll_down(),
                Focus::Editor => {}
            },
            Command::JumpUndoToNewest => self.undo_view.jump_to_newest(),
            Command::JumpRedoToNewest => self.redo_view.jump_to_newest(),
        }

        if let Some(change) = self.last_change.take() {
            self.on_stack_change(change, now);
        }
    }

    fn on_stack_change(&mut self, change: StackChange, now: Instant) {
        match change.kind {
            ActionKind::Edit => self.status_message.clear(),
            ActionKind::Undo | ActionKind::Redo => {
                self.status_message = change.kind.label().to_string();
                self.flash = Some((
                    change.kind,
                    Animation::new(now, self.config.animation.flash()),
                ));
            }
        }
    }

    /// Slide-in progress of the panels
    pub fn entrance_progress(&self, now: Instant) -> f32 {
        self.entrance.progress_at(now)
    }

    /// The undo/redo button currently highlighted, if its flash is running
    pub fn flashing(&self, now: Instant) -> Option<ActionKind> {
        self.flash
            .filter(|(_, anim)| anim.is_running_at(now))
            .map(|(kind, _)| kind)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
