use proptest::prelude::*;
use stackpad::{Action, HistoryState};

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        "[a-c]{0,4}".prop_map(Action::Edit),
        Just(Action::Undo),
        Just(Action::Redo),
    ]
}

fn replay(actions: Vec<Action>) -> HistoryState {
    actions
        .into_iter()
        .fold(HistoryState::new(), |state, action| state.apply(action).state)
}

proptest! {
    #[test]
    fn undo_after_edit_restores_prior_content(
        actions in prop::collection::vec(action(), 0..24),
        text in "[a-z]{0,6}",
    ) {
        let before = replay(actions);
        let edited = before.apply(Action::Edit(text)).state;
        let undone = edited.apply(Action::Undo);

        prop_assert!(undone.changed);
        prop_assert_eq!(undone.state.content(), before.content());
        prop_assert_eq!(undone.state.undo_stack(), before.undo_stack());
    }

    #[test]
    fn undo_then_redo_is_identity(actions in prop::collection::vec(action(), 0..24)) {
        let state = replay(actions);
        prop_assume!(state.can_undo());

        let round_trip = state.apply(Action::Undo).state.apply(Action::Redo).state;
        prop_assert_eq!(round_trip, state);
    }

    #[test]
    fn edit_always_clears_redo(
        actions in prop::collection::vec(action(), 0..24),
        text in "[a-z]{0,6}",
    ) {
        let state = replay(actions).apply(Action::Edit(text)).state;
        prop_assert!(state.redo_stack().is_empty());
    }

    #[test]
    fn empty_stacks_make_undo_redo_noops(actions in prop::collection::vec(action(), 0..24)) {
        let state = replay(actions);

        if !state.can_undo() {
            let transition = state.apply(Action::Undo);
            prop_assert!(!transition.changed);
            prop_assert_eq!(&transition.state, &state);
        }
        if !state.can_redo() {
            let transition = state.apply(Action::Redo);
            prop_assert!(!transition.changed);
            prop_assert_eq!(&transition.state, &state);
        }
    }

    #[test]
    fn snapshot_count_is_conserved_by_undo_redo(actions in prop::collection::vec(action(), 0..24)) {
        let edits = actions.iter().filter(|a| matches!(a, Action::Edit(_))).count();
        let state = replay(actions);
        prop_assert!(state.undo_stack().len() + state.redo_stack().len() <= edits);
    }
}
