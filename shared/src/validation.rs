//! Input validation functions
//!
//! Checks applied to cart selections, stored recipe lines and imported
//! catalog rows before they reach the aggregator.

use crate::errors::ShoppingListError;
use crate::models::{RecipeId, RecipeIngredientLine};
use rust_decimal::Decimal;

/// Upper bound on ingredient names and measurement units
pub const MAX_INGREDIENT_FIELD_LEN: usize = 900;

/// A shopping list needs at least one recipe
pub fn validate_selection(recipe_ids: &[RecipeId]) -> Result<(), ShoppingListError> {
    if recipe_ids.is_empty() {
        return Err(ShoppingListError::nothing_selected());
    }
    Ok(())
}

/// Stored amounts must be strictly positive
pub fn validate_line_amount(
    recipe_id: RecipeId,
    line: &RecipeIngredientLine,
) -> Result<(), ShoppingListError> {
    if line.amount <= Decimal::ZERO {
        return Err(ShoppingListError::DataIntegrity {
            recipe_id,
            ingredient_id: line.ingredient_id,
            amount: line.amount,
        });
    }
    Ok(())
}

/// Validate one field of an imported catalog row
pub fn validate_catalog_field(field: &str, value: &str, line: u64) -> Result<(), ShoppingListError> {
    if value.trim().is_empty() {
        return Err(ShoppingListError::InvalidInput(format!(
            "line {}: {} cannot be empty",
            line, field
        )));
    }
    if value.chars().count() > MAX_INGREDIENT_FIELD_LEN {
        return Err(ShoppingListError::InvalidInput(format!(
            "line {}: {} longer than {} characters",
            line, field, MAX_INGREDIENT_FIELD_LEN
        )));
    }
    Ok(())
}
