//! Property tests for the two-field interaction state.

use proptest::prelude::*;

use qcompass::{to_compass, to_qcad, Axis, InteractionState};

#[derive(Debug, Clone)]
enum Action {
    EditQcad(String),
    EditCompass(String),
    Swap,
    Clear,
}

fn field_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (-720.0f64..720.0).prop_map(|x| x.to_string()),
        "[0-9.eE+-]{1,8}",
        "[a-z ]{1,6}",
    ]
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        field_text().prop_map(Action::EditQcad),
        field_text().prop_map(Action::EditCompass),
        Just(Action::Swap),
        Just(Action::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: right after an edit, the other field is derived from the edited one.
    #[test]
    fn property_edit_keeps_fields_consistent(
        history in proptest::collection::vec(action(), 0..12),
        axis_is_qcad in any::<bool>(),
        text in field_text(),
    ) {
        let mut state = InteractionState::new();
        for a in history {
            apply(&mut state, a);
        }

        if axis_is_qcad {
            state.edit_qcad(text.clone());
            prop_assert_eq!(state.qcad_text(), text.as_str());
            prop_assert_eq!(state.compass_text(), to_compass(&text));
            prop_assert_eq!(state.last_edited(), Some(Axis::Qcad));
        } else {
            state.edit_compass(text.clone());
            prop_assert_eq!(state.compass_text(), text.as_str());
            prop_assert_eq!(state.qcad_text(), to_qcad(&text));
            prop_assert_eq!(state.last_edited(), Some(Axis::Compass));
        }
    }

    /// PROPERTY: swapping twice restores the state exactly.
    #[test]
    fn property_double_swap_is_identity(history in proptest::collection::vec(action(), 0..12)) {
        let mut state = InteractionState::new();
        for a in history {
            apply(&mut state, a);
        }
        let before = state.clone();
        state.swap();
        prop_assert_eq!(state.qcad_text(), before.compass_text());
        prop_assert_eq!(state.compass_text(), before.qcad_text());
        state.swap();
        prop_assert_eq!(state, before);
    }

    /// PROPERTY: clear always leaves both fields empty.
    #[test]
    fn property_clear_empties(history in proptest::collection::vec(action(), 0..12)) {
        let mut state = InteractionState::new();
        for a in history {
            apply(&mut state, a);
        }
        state.clear();
        prop_assert!(state.is_empty());
    }
}

fn apply(state: &mut InteractionState, action: Action) {
    match action {
        Action::EditQcad(text) => state.edit_qcad(text),
        Action::EditCompass(text) => state.edit_compass(text),
        Action::Swap => state.swap(),
        Action::Clear => state.clear(),
    }
}
