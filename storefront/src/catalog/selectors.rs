//! Pure read functions over the catalog slice.

use std::collections::HashMap;

use crate::catalog::CatalogState;
use crate::types::{Ingredient, IngredientKind};

/// Per-kind item counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    /// Number of buns.
    pub buns: usize,
    /// Number of main fillings.
    pub mains: usize,
    /// Number of sauces.
    pub sauces: usize,
}

/// All buns, catalog order preserved.
#[must_use]
pub fn buns(state: &CatalogState) -> Vec<&Ingredient> {
    of_kind(state, IngredientKind::Bun)
}

/// All main fillings, catalog order preserved.
#[must_use]
pub fn mains(state: &CatalogState) -> Vec<&Ingredient> {
    of_kind(state, IngredientKind::Main)
}

/// All sauces, catalog order preserved.
#[must_use]
pub fn sauces(state: &CatalogState) -> Vec<&Ingredient> {
    of_kind(state, IngredientKind::Sauce)
}

fn of_kind(state: &CatalogState, kind: IngredientKind) -> Vec<&Ingredient> {
    state.items.iter().filter(|i| i.kind == kind).collect()
}

/// Look up an ingredient by catalog id, cache first.
#[must_use]
pub fn by_id<'a>(state: &'a CatalogState, id: &str) -> Option<&'a Ingredient> {
    state
        .cache
        .get(id)
        .or_else(|| state.items.iter().find(|i| i.id == id))
}

/// Items grouped per kind. Every kind is present in the result even when the
/// catalog has no items of that kind, so callers never branch on a missing
/// category.
#[must_use]
pub fn grouped(state: &CatalogState) -> HashMap<IngredientKind, Vec<&Ingredient>> {
    let mut groups: HashMap<IngredientKind, Vec<&Ingredient>> = IngredientKind::ALL
        .iter()
        .map(|kind| (*kind, Vec::new()))
        .collect();
    for item in &state.items {
        groups.entry(item.kind).or_default().push(item);
    }
    groups
}

/// Item counts per kind.
#[must_use]
pub fn stats(state: &CatalogState) -> CatalogStats {
    let mut stats = CatalogStats::default();
    for item in &state.items {
        match item.kind {
            IngredientKind::Bun => stats.buns += 1,
            IngredientKind::Main => stats.mains += 1,
            IngredientKind::Sauce => stats.sauces += 1,
        }
    }
    stats
}
