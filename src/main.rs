use stackpad::{Editor, HistoryState};

fn print_state(label: &str, state: &HistoryState) {
    println!("{label}");
    println!("   Content: {:?}", state.content());
    println!("   Undo:    {:?}", state.undo_stack());
    println!("   Redo:    {:?}", state.redo_stack());
}

fn main() {
    println!("Stackpad - undo/redo history walkthrough\n");

    let mut editor = Editor::new();
    editor.subscribe(|change| {
        println!("   [{}] undo={} redo={}", change.kind, change.undo_len, change.redo_len);
    });

    editor.edit("a");
    print_state("edit(\"a\")", editor.state());

    editor.edit("ab");
    print_state("edit(\"ab\")", editor.state());

    editor.undo();
    print_state("undo()", editor.state());

    editor.redo();
    print_state("redo()", editor.state());

    editor.undo();
    editor.edit("ax");
    print_state("undo() then edit(\"ax\") drops the redo history", editor.state());

    // Nothing left to redo: no notification, no change
    editor.redo();
    print_state("redo() on empty redo stack", editor.state());
}
