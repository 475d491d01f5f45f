use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Editor,
    UndoList,
    RedoList,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Editor => Focus::UndoList,
            Focus::UndoList => Focus::RedoList,
            Focus::RedoList => Focus::Editor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Undo,
    Redo,
    Insert(char),
    Newline,
    Backspace,
    Clear,
    JumpUndoToNewest,
    JumpRedoToNewest,
    FocusNext,
    ScrollUp,
    ScrollDown,
    Quit,
}

/// Translate a key press into a command.
///
/// Undo/redo shortcuts are matched before anything else so a modified
/// `z`/`y` is never inserted as text. Key releases map to nothing.
pub fn map_key(key: KeyEvent, focus: Focus) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let command_mod = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);

    if command_mod {
        return match key.code {
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'z' if key.modifiers.contains(KeyModifiers::SHIFT) => Some(Command::Redo),
                'z' => Some(Command::Undo),
                'y' => Some(Command::Redo),
                'q' => Some(Command::Quit),
                'l' => Some(Command::Clear),
                _ => None,
            },
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Tab => Some(Command::FocusNext),
        KeyCode::Up if focus != Focus::Editor => Some(Command::ScrollUp),
        KeyCode::Down if focus != Focus::Editor => Some(Command::ScrollDown),
        KeyCode::Home | KeyCode::End => match focus {
            Focus::UndoList => Some(Command::JumpUndoToNewest),
            Focus::RedoList => Some(Command::JumpRedoToNewest),
            Focus::Editor => None,
        },
        KeyCode::Char(c) if focus == Focus::Editor && plain(key.modifiers) => {
            Some(Command::Insert(c))
        }
        KeyCode::Enter if focus == Focus::Editor => Some(Command::Newline),
        KeyCode::Backspace if focus == Focus::Editor => Some(Command::Backspace),
        _ => None,
    }
}

/// No modifier other than shift
fn plain(modifiers: KeyModifiers) -> bool {
    modifiers.difference(KeyModifiers::SHIFT).is_empty()
}
