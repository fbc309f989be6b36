//! Error types for shopping list generation

use crate::models::{IngredientId, RecipeId};
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// A reference that could not be resolved against the stores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingRef {
    Recipe(RecipeId),
    Ingredient(IngredientId),
}

impl fmt::Display for MissingRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingRef::Recipe(id) => write!(f, "recipe {}", id),
            MissingRef::Ingredient(id) => write!(f, "ingredient {}", id),
        }
    }
}

/// Errors produced while aggregating or importing shopping list data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShoppingListError {
    /// User-correctable input problem (empty selection, malformed import row)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(MissingRef),

    /// A stored recipe line carries an amount that can never be valid
    #[error("Data integrity violation: recipe {recipe_id} lists ingredient {ingredient_id} with amount {amount}")]
    DataIntegrity {
        recipe_id: RecipeId,
        ingredient_id: IngredientId,
        amount: Decimal,
    },
}

impl ShoppingListError {
    pub fn nothing_selected() -> Self {
        ShoppingListError::InvalidInput("nothing selected".to_string())
    }

    pub fn recipe_not_found(id: RecipeId) -> Self {
        ShoppingListError::NotFound(MissingRef::Recipe(id))
    }

    pub fn ingredient_not_found(id: IngredientId) -> Self {
        ShoppingListError::NotFound(MissingRef::Ingredient(id))
    }
}
