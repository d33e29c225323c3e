//! Property tests for the constructor slice.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use burgerline_core::environment::FixedClock;
use burgerline_core::reducer::Reducer;
use burgerline_storefront::environment::StorefrontEnvironment;
use burgerline_storefront::mocks::{MockApi, MockCredentialStore, MockSnapshotStore};
use burgerline_storefront::selection::{
    SelectionAction, SelectionReducer, SelectionState, selectors,
};
use burgerline_storefront::{Ingredient, IngredientKind, InstanceId};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

type TestEnv = StorefrontEnvironment<MockApi, MockCredentialStore, MockSnapshotStore>;
type TestReducer = SelectionReducer<MockApi, MockCredentialStore, MockSnapshotStore>;

fn test_env() -> TestEnv {
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).single().unwrap());
    StorefrontEnvironment::new(
        MockApi::new(),
        MockCredentialStore::new(),
        MockSnapshotStore::new(),
        Arc::new(clock),
    )
}

fn ingredient(id: String, kind: IngredientKind, price: u32) -> Ingredient {
    Ingredient {
        name: format!("Ingredient {id}"),
        id,
        kind,
        proteins: 1,
        fat: 1,
        carbohydrates: 1,
        calories: 1,
        price,
        image: String::new(),
        image_mobile: String::new(),
        image_large: String::new(),
    }
}

/// Editing operations only; submission is covered by the unit tests.
#[derive(Debug, Clone)]
enum EditOp {
    PlaceBun { id: u8, price: u32 },
    PlaceFilling { id: u8, price: u32 },
    RemoveExisting { slot: usize },
    RemoveAbsent,
    MoveUp { index: usize },
    MoveDown { index: usize },
}

fn edit_op() -> impl Strategy<Value = EditOp> {
    prop_oneof![
        (any::<u8>(), 1u32..1000).prop_map(|(id, price)| EditOp::PlaceBun { id, price }),
        (any::<u8>(), 1u32..1000).prop_map(|(id, price)| EditOp::PlaceFilling { id, price }),
        (0usize..16).prop_map(|slot| EditOp::RemoveExisting { slot }),
        Just(EditOp::RemoveAbsent),
        (0usize..20).prop_map(|index| EditOp::MoveUp { index }),
        (0usize..20).prop_map(|index| EditOp::MoveDown { index }),
    ]
}

fn apply(state: &mut SelectionState, op: &EditOp, env: &TestEnv) {
    let reducer = TestReducer::new();
    let action = match op {
        EditOp::PlaceBun { id, price } => SelectionAction::Place {
            ingredient: ingredient(format!("bun-{id}"), IngredientKind::Bun, *price),
        },
        EditOp::PlaceFilling { id, price } => SelectionAction::Place {
            ingredient: ingredient(format!("main-{id}"), IngredientKind::Main, *price),
        },
        EditOp::RemoveExisting { slot } => {
            let Some(filling) = state.fillings.get(slot % state.fillings.len().max(1)) else {
                return;
            };
            SelectionAction::Remove {
                instance_id: filling.instance_id,
            }
        },
        EditOp::RemoveAbsent => SelectionAction::Remove {
            instance_id: InstanceId::new(),
        },
        EditOp::MoveUp { index } => SelectionAction::MoveUp { index: *index },
        EditOp::MoveDown { index } => SelectionAction::MoveDown { index: *index },
    };
    let effects = reducer.reduce(state, action, env);
    // Editing never issues async work.
    assert!(
        !effects
            .iter()
            .any(|e| matches!(e, burgerline_core::effect::Effect::Future(_))),
        "editing operation issued a request"
    );
}

proptest! {
    /// The filling count changes only through placements (+1) and removals
    /// of an existing placement (-1); everything else preserves it. The bun
    /// slot never leaks into the fillings.
    #[test]
    fn filling_count_accounting(ops in prop::collection::vec(edit_op(), 1..40)) {
        let env = test_env();
        let mut state = SelectionState::default();

        for op in &ops {
            let before = state.fillings.len();
            let removable = !state.fillings.is_empty();
            apply(&mut state, op, &env);
            let after = state.fillings.len();

            match op {
                EditOp::PlaceFilling { .. } => prop_assert_eq!(after, before + 1),
                EditOp::RemoveExisting { .. } if removable => prop_assert_eq!(after, before - 1),
                _ => prop_assert_eq!(after, before),
            }

            for filling in &state.fillings {
                prop_assert_ne!(filling.ingredient.kind, IngredientKind::Bun);
            }
        }
    }

    /// Price is always 2x the bun price plus the sum of filling prices,
    /// whatever the edit history was.
    #[test]
    fn price_matches_the_selection(ops in prop::collection::vec(edit_op(), 1..40)) {
        let env = test_env();
        let mut state = SelectionState::default();

        for op in &ops {
            apply(&mut state, op, &env);
        }

        let expected = state
            .bun
            .as_ref()
            .map_or(0u64, |b| u64::from(b.ingredient.price) * 2)
            + state
                .fillings
                .iter()
                .map(|f| u64::from(f.ingredient.price))
                .sum::<u64>();
        prop_assert_eq!(selectors::total_price(&state), expected);
    }

    /// Moves only permute the fillings: the multiset of instance ids is
    /// preserved, and a move never touches the bun.
    #[test]
    fn moves_are_permutations(
        count in 2usize..8,
        moves in prop::collection::vec((any::<bool>(), 0usize..8), 1..20),
    ) {
        let env = test_env();
        let mut state = SelectionState::default();
        for i in 0..count {
            apply(
                &mut state,
                &EditOp::PlaceFilling { id: u8::try_from(i).unwrap_or(0), price: 10 },
                &env,
            );
        }

        let mut expected: Vec<InstanceId> =
            state.fillings.iter().map(|f| f.instance_id).collect();
        expected.sort_unstable_by_key(|id| format!("{id}"));

        for (up, index) in moves {
            let op = if up {
                EditOp::MoveUp { index }
            } else {
                EditOp::MoveDown { index }
            };
            apply(&mut state, &op, &env);
        }

        let mut actual: Vec<InstanceId> =
            state.fillings.iter().map(|f| f.instance_id).collect();
        actual.sort_unstable_by_key(|id| format!("{id}"));
        prop_assert_eq!(actual, expected);
    }

    /// The submission sequence is always [bun, fillings.., bun] when a bun
    /// is present.
    #[test]
    fn submission_sequence_is_framed(ops in prop::collection::vec(edit_op(), 1..40)) {
        let env = test_env();
        let mut state = SelectionState::default();
        for op in &ops {
            apply(&mut state, op, &env);
        }

        let ids = selectors::ingredient_ids(&state);
        if let Some(bun) = &state.bun {
            prop_assert_eq!(ids.len(), state.fillings.len() + 2);
            prop_assert_eq!(ids.first(), Some(&bun.ingredient.id));
            prop_assert_eq!(ids.last(), Some(&bun.ingredient.id));
        } else {
            prop_assert_eq!(ids.len(), state.fillings.len());
        }
    }
}
