use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use stackpad::{map_key, Command, Focus};

fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn ctrl(c: char) -> KeyEvent {
    key(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[test]
fn test_undo_redo_shortcuts() {
    assert_eq!(map_key(ctrl('z'), Focus::Editor), Some(Command::Undo));
    assert_eq!(map_key(ctrl('y'), Focus::Editor), Some(Command::Redo));
    assert_eq!(
        map_key(key(KeyCode::Char('z'), KeyModifiers::SUPER), Focus::Editor),
        Some(Command::Undo)
    );
    assert_eq!(
        map_key(
            key(KeyCode::Char('Z'), KeyModifiers::CONTROL | KeyModifiers::SHIFT),
            Focus::Editor
        ),
        Some(Command::Redo)
    );
}

#[test]
fn test_shortcuts_work_from_any_focus() {
    for focus in [Focus::Editor, Focus::UndoList, Focus::RedoList] {
        assert_eq!(map_key(ctrl('z'), focus), Some(Command::Undo));
        assert_eq!(map_key(ctrl('q'), focus), Some(Command::Quit));
    }
}

#[test]
fn test_modified_chars_are_never_inserted() {
    assert_eq!(map_key(ctrl('a'), Focus::Editor), None);
    assert_eq!(
        map_key(key(KeyCode::Char('x'), KeyModifiers::ALT), Focus::Editor),
        None
    );
    assert_eq!(
        map_key(
            key(KeyCode::Char('X'), KeyModifiers::ALT | KeyModifiers::SHIFT),
            Focus::Editor
        ),
        None
    );
    assert_eq!(
        map_key(key(KeyCode::Char('z'), KeyModifiers::NONE), Focus::Editor),
        Some(Command::Insert('z'))
    );
    assert_eq!(
        map_key(key(KeyCode::Char('Z'), KeyModifiers::SHIFT), Focus::Editor),
        Some(Command::Insert('Z'))
    );
}

#[test]
fn test_list_navigation() {
    let up = key(KeyCode::Up, KeyModifiers::NONE);
    let end = key(KeyCode::End, KeyModifiers::NONE);

    assert_eq!(map_key(up, Focus::Editor), None);
    assert_eq!(map_key(up, Focus::UndoList), Some(Command::ScrollUp));
    assert_eq!(map_key(end, Focus::UndoList), Some(Command::JumpUndoToNewest));
    assert_eq!(map_key(end, Focus::RedoList), Some(Command::JumpRedoToNewest));
    assert_eq!(
        map_key(key(KeyCode::Char('x'), KeyModifiers::NONE), Focus::RedoList),
        None
    );
}

#[test]
fn test_focus_cycles() {
    assert_eq!(Focus::Editor.next(), Focus::UndoList);
    assert_eq!(Focus::UndoList.next(), Focus::RedoList);
    assert_eq!(Focus::RedoList.next(), Focus::Editor);
}

#[test]
fn test_key_release_is_ignored() {
    let mut release = ctrl('z');
    release.kind = KeyEventKind::Release;
    assert_eq!(map_key(release, Focus::Editor), None);
}
