//! Domain models for recipes, the ingredient catalog and shopping lists

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Recipe identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub i64);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ingredient catalog identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(pub i64);

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog entry for an ingredient type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRef {
    pub id: IngredientId,
    pub name: String,
    pub measurement_unit: String,
}

/// One ingredient requirement of a recipe
///
/// `unit` overrides the catalog's measurement unit when present, which lets a
/// recipe list the same ingredient twice in different units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredientLine {
    pub ingredient_id: IngredientId,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl RecipeIngredientLine {
    pub fn new(ingredient_id: IngredientId, amount: Decimal) -> Self {
        Self {
            ingredient_id,
            amount,
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Unit this line is measured in, falling back to the catalog unit
    pub fn effective_unit<'a>(&'a self, catalog: &'a IngredientRef) -> &'a str {
        self.unit.as_deref().unwrap_or(&catalog.measurement_unit)
    }
}

/// Recipes a user has marked "to buy", in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSelection {
    pub recipe_ids: Vec<RecipeId>,
}

impl CartSelection {
    pub fn new(recipe_ids: Vec<RecipeId>) -> Self {
        Self { recipe_ids }
    }

    pub fn is_empty(&self) -> bool {
        self.recipe_ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.recipe_ids.len()
    }

    pub fn as_slice(&self) -> &[RecipeId] {
        &self.recipe_ids
    }
}

impl FromIterator<RecipeId> for CartSelection {
    fn from_iter<I: IntoIterator<Item = RecipeId>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Summed quantity of one (ingredient, unit) pair in a shopping list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedLine {
    pub name: String,
    pub unit: String,
    pub amount: Decimal,
}
