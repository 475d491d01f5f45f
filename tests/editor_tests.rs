use stackpad::{ActionKind, Config, Editor, StackChange};
use std::cell::RefCell;
use std::rc::Rc;

fn recorded(editor: &mut Editor) -> Rc<RefCell<Vec<StackChange>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    editor.subscribe(move |change| sink.borrow_mut().push(*change));
    log
}

#[test]
fn test_empty_editor() {
    let editor = Editor::new();
    assert_eq!(editor.text(), "");
    assert_eq!(editor.line_count(), 1);
    assert!(!editor.can_undo());
}

#[test]
fn test_from_text_is_not_undoable() {
    let mut editor = Editor::from_text("Hello");
    assert_eq!(editor.text(), "Hello");
    assert!(!editor.undo());
    assert_eq!(editor.text(), "Hello");
}

#[test]
fn test_typing_records_every_keystroke() {
    let mut editor = Editor::new();

    for c in "Hi".chars() {
        editor.insert_char(c);
    }
    editor.insert_newline();
    editor.insert_char('!');

    assert_eq!(editor.text(), "Hi\n!");
    assert_eq!(editor.line_count(), 2);
    assert_eq!(editor.undo_stack(), ["", "H", "Hi", "Hi\n"]);
}

#[test]
fn test_backspace() {
    let mut editor = Editor::from_text("Hello");

    assert!(editor.backspace());
    assert_eq!(editor.text(), "Hell");

    editor.undo();
    assert_eq!(editor.text(), "Hello");
}

#[test]
fn test_backspace_multibyte() {
    let mut editor = Editor::from_text("héé");
    editor.backspace();
    assert_eq!(editor.text(), "hé");
}

#[test]
fn test_backspace_on_empty_records_nothing() {
    let mut editor = Editor::new();
    assert!(!editor.backspace());
    assert!(!editor.can_undo());
}

#[test]
fn test_clear_is_one_undo_step() {
    let mut editor = Editor::from_text("Hello World");

    assert!(editor.clear());
    assert_eq!(editor.text(), "");
    assert!(!editor.clear());

    editor.undo();
    assert_eq!(editor.text(), "Hello World");
}

#[test]
fn test_multiple_undo_redo() {
    let mut editor = Editor::new();

    editor.insert_char('A');
    editor.insert_char('B');
    editor.insert_char('C');

    assert_eq!(editor.text(), "ABC");

    editor.undo();
    assert_eq!(editor.text(), "AB");

    editor.undo();
    assert_eq!(editor.text(), "A");

    editor.redo();
    assert_eq!(editor.text(), "AB");

    editor.redo();
    assert_eq!(editor.text(), "ABC");
    assert!(!editor.redo());
}

#[test]
fn test_new_edit_drops_redo() {
    let mut editor = Editor::new();
    editor.edit("one");
    editor.edit("two");
    editor.undo();
    assert!(editor.can_redo());

    editor.edit("three");
    assert!(!editor.can_redo());
    assert_eq!(editor.undo_stack(), ["", "one"]);
}

#[test]
fn test_subscribers_see_each_change_once() {
    let mut editor = Editor::new();
    let log = recorded(&mut editor);

    editor.edit("a");
    editor.edit("ab");
    editor.undo();
    editor.redo();

    let kinds: Vec<ActionKind> = log.borrow().iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        [ActionKind::Edit, ActionKind::Edit, ActionKind::Undo, ActionKind::Redo]
    );
    assert_eq!(
        log.borrow().last().copied(),
        Some(StackChange {
            kind: ActionKind::Redo,
            undo_len: 2,
            redo_len: 0,
        })
    );
}

#[test]
fn test_noop_actions_do_not_notify() {
    let mut editor = Editor::new();
    let log = recorded(&mut editor);

    editor.undo();
    editor.redo();
    editor.backspace();

    assert!(log.borrow().is_empty());
}

#[test]
fn test_config_history_limit() {
    let config = Config {
        history_limit: Some(1),
        ..Config::default()
    };
    let mut editor = Editor::with_config("", &config);

    editor.edit("a");
    editor.edit("b");

    assert_eq!(editor.undo_stack(), ["a"]);
}
