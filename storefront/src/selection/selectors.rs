//! Pure read functions over the constructor slice.

use crate::selection::SelectionState;

/// Total price: the bun counts twice (top and bottom), fillings once each.
/// Zero contribution from a missing bun.
#[must_use]
pub fn total_price(state: &SelectionState) -> u64 {
    let bun_price = state
        .bun
        .as_ref()
        .map_or(0u64, |b| u64::from(b.ingredient.price) * 2);
    let fillings: u64 = state
        .fillings
        .iter()
        .map(|f| u64::from(f.ingredient.price))
        .sum();
    bun_price + fillings
}

/// The catalog id sequence submitted upstream: the bun id frames the
/// fillings at both ends. Without a bun, just the filling ids.
#[must_use]
pub fn ingredient_ids(state: &SelectionState) -> Vec<String> {
    let mut ids = Vec::with_capacity(state.fillings.len() + 2);
    if let Some(bun) = &state.bun {
        ids.push(bun.ingredient.id.clone());
    }
    ids.extend(state.fillings.iter().map(|f| f.ingredient.id.clone()));
    if let Some(bun) = &state.bun {
        ids.push(bun.ingredient.id.clone());
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bun, patty, sauce};
    use crate::types::PlacedIngredient;

    #[test]
    fn price_doubles_the_bun_and_sums_fillings() {
        let state = SelectionState {
            bun: Some(PlacedIngredient::new(bun("b1", 100))),
            fillings: vec![
                PlacedIngredient::new(patty("m1", 50)),
                PlacedIngredient::new(sauce("s1", 20)),
            ],
            ..SelectionState::default()
        };
        assert_eq!(total_price(&state), 2 * 100 + 50 + 20);
    }

    #[test]
    fn price_is_zero_for_an_empty_selection() {
        assert_eq!(total_price(&SelectionState::default()), 0);
    }

    #[test]
    fn price_without_bun_counts_fillings_only() {
        let state = SelectionState {
            fillings: vec![PlacedIngredient::new(patty("m1", 50))],
            ..SelectionState::default()
        };
        assert_eq!(total_price(&state), 50);
    }

    #[test]
    fn submission_sequence_frames_fillings_with_the_bun() {
        let state = SelectionState {
            bun: Some(PlacedIngredient::new(bun("b1", 100))),
            fillings: vec![
                PlacedIngredient::new(patty("m1", 50)),
                PlacedIngredient::new(patty("m1", 50)),
            ],
            ..SelectionState::default()
        };
        assert_eq!(ingredient_ids(&state), ["b1", "m1", "m1", "b1"]);
    }
}
