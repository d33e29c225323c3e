//! Domain types shared by all storefront slices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of a catalog ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientKind {
    /// Buns frame the burger; exactly one bun per burger, counted twice.
    Bun,
    /// Main fillings (patties, cheese, vegetables).
    Main,
    /// Sauces.
    Sauce,
}

impl IngredientKind {
    /// All kinds, in display order.
    pub const ALL: [Self; 3] = [Self::Bun, Self::Main, Self::Sauce];
}

/// A catalog ingredient. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Catalog identity.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category.
    #[serde(rename = "type")]
    pub kind: IngredientKind,
    /// Protein content, grams.
    pub proteins: u32,
    /// Fat content, grams.
    pub fat: u32,
    /// Carbohydrate content, grams.
    pub carbohydrates: u32,
    /// Energy, kcal.
    pub calories: u32,
    /// Price in currency units.
    pub price: u32,
    /// Card image URL.
    pub image: String,
    /// Mobile image URL.
    pub image_mobile: String,
    /// Detail view image URL.
    pub image_large: String,
}

/// Identity of a single placement in the constructor.
///
/// The same catalog item can be placed repeatedly; each placement gets its
/// own instance id so it can be removed or reordered individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(Uuid);

impl InstanceId {
    /// Generate a fresh instance id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// An ingredient placed in the constructor, with its placement identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedIngredient {
    /// Placement identity, unique per placement.
    pub instance_id: InstanceId,
    /// The catalog ingredient that was placed.
    pub ingredient: Ingredient,
}

impl PlacedIngredient {
    /// Place an ingredient, generating a fresh instance id.
    #[must_use]
    pub fn new(ingredient: Ingredient) -> Self {
        Self {
            instance_id: InstanceId::new(),
            ingredient,
        }
    }
}

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Accepted, not yet queued.
    Created,
    /// Being prepared.
    Pending,
    /// Ready.
    Done,
}

impl OrderStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Created, Self::Pending, Self::Done];
}

/// An order as reported by the upstream. Read-only once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Upstream identity.
    #[serde(rename = "_id")]
    pub id: String,
    /// Human-readable order number.
    pub number: u64,
    /// Display name.
    pub name: String,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    /// Catalog ids of the order's ingredients; duplicates allowed.
    pub ingredients: Vec<String>,
}

/// An authenticated user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Account creation timestamp, when the upstream reports it.
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last profile update timestamp, when the upstream reports it.
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial profile update; `None` fields are left unchanged upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New login email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
