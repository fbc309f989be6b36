//! Shopping list aggregation
//!
//! Sums the ingredient lines of every selected recipe per
//! (ingredient, unit) pair. Totals are exact decimals and come out in the
//! order their key was first seen while walking the selection, so the same
//! cart always produces the same list.

use crate::errors::ShoppingListError;
use crate::lookup::{IngredientCatalog, RecipeLookup};
use crate::models::{AggregatedLine, IngredientId, RecipeId};
use crate::validation::{validate_line_amount, validate_selection};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Aggregate the ingredients of `recipe_ids` into a shopping list
///
/// Duplicate recipe ids count once per occurrence. Any unknown recipe or
/// ingredient, or any non-positive amount, fails the whole call.
pub fn aggregate<R, C>(
    recipe_ids: &[RecipeId],
    recipes: &R,
    catalog: &C,
) -> Result<Vec<AggregatedLine>, ShoppingListError>
where
    R: RecipeLookup + ?Sized,
    C: IngredientCatalog + ?Sized,
{
    validate_selection(recipe_ids)?;

    let mut positions: HashMap<(IngredientId, String), usize> = HashMap::new();
    let mut totals: Vec<AggregatedLine> = Vec::new();

    for &recipe_id in recipe_ids {
        for line in recipes.ingredient_lines(recipe_id)? {
            validate_line_amount(recipe_id, line)?;
            let ingredient = catalog.ingredient(line.ingredient_id)?;
            let unit = line.effective_unit(ingredient);

            match positions.entry((ingredient.id, unit.to_string())) {
                Entry::Occupied(slot) => {
                    let total = &mut totals[*slot.get()];
                    total.amount = total.amount.checked_add(line.amount).ok_or(
                        ShoppingListError::DataIntegrity {
                            recipe_id,
                            ingredient_id: line.ingredient_id,
                            amount: line.amount,
                        },
                    )?;
                }
                Entry::Vacant(slot) => {
                    slot.insert(totals.len());
                    totals.push(AggregatedLine {
                        name: ingredient.name.clone(),
                        unit: unit.to_string(),
                        amount: line.amount,
                    });
                }
            }
        }
    }

    Ok(totals)
}
