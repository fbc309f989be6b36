//! Read-only lookups used by the aggregator
//!
//! The aggregator never talks to storage directly. Callers hand it something
//! implementing [`RecipeLookup`] and [`IngredientCatalog`]; the backend loads a
//! request-local [`MemoryCatalog`] from Postgres, tests build one by hand.

use crate::errors::ShoppingListError;
use crate::models::{IngredientId, IngredientRef, RecipeId, RecipeIngredientLine};
use std::collections::HashMap;

/// Recipe store: recipe id to its ordered ingredient lines
pub trait RecipeLookup {
    /// Fails with `NotFound` when the recipe does not exist
    fn ingredient_lines(&self, recipe_id: RecipeId) -> Result<&[RecipeIngredientLine], ShoppingListError>;
}

/// Ingredient catalog: ingredient id to name and measurement unit
pub trait IngredientCatalog {
    /// Fails with `NotFound` when the ingredient does not exist
    fn ingredient(&self, id: IngredientId) -> Result<&IngredientRef, ShoppingListError>;
}

/// In-memory recipe store and ingredient catalog
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    recipes: HashMap<RecipeId, Vec<RecipeIngredientLine>>,
    ingredients: HashMap<IngredientId, IngredientRef>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a catalog entry, replacing any previous entry with the same id
    pub fn insert_ingredient(&mut self, ingredient: IngredientRef) {
        self.ingredients.insert(ingredient.id, ingredient);
    }

    /// Register a recipe. A recipe with no lines is still a known recipe.
    pub fn insert_recipe(&mut self, id: RecipeId, lines: Vec<RecipeIngredientLine>) {
        self.recipes.insert(id, lines);
    }

    /// Append a line to a recipe, registering the recipe if needed
    pub fn push_line(&mut self, id: RecipeId, line: RecipeIngredientLine) {
        self.recipes.entry(id).or_default().push(line);
    }

    pub fn with_ingredient(mut self, ingredient: IngredientRef) -> Self {
        self.insert_ingredient(ingredient);
        self
    }

    pub fn with_recipe(mut self, id: RecipeId, lines: Vec<RecipeIngredientLine>) -> Self {
        self.insert_recipe(id, lines);
        self
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }
}

impl RecipeLookup for MemoryCatalog {
    fn ingredient_lines(&self, recipe_id: RecipeId) -> Result<&[RecipeIngredientLine], ShoppingListError> {
        self.recipes
            .get(&recipe_id)
            .map(Vec::as_slice)
            .ok_or_else(|| ShoppingListError::recipe_not_found(recipe_id))
    }
}

impl IngredientCatalog for MemoryCatalog {
    fn ingredient(&self, id: IngredientId) -> Result<&IngredientRef, ShoppingListError> {
        self.ingredients
            .get(&id)
            .ok_or_else(|| ShoppingListError::ingredient_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_unknown_recipe_is_not_found() {
        let catalog = MemoryCatalog::new();
        let err = catalog.ingredient_lines(RecipeId(9)).unwrap_err();
        assert_eq!(err, ShoppingListError::recipe_not_found(RecipeId(9)));
    }

    #[test]
    fn test_empty_recipe_is_known() {
        let catalog = MemoryCatalog::new().with_recipe(RecipeId(1), vec![]);
        assert!(catalog.ingredient_lines(RecipeId(1)).unwrap().is_empty());
    }

    #[test]
    fn test_push_line_keeps_order() {
        let mut catalog = MemoryCatalog::new();
        catalog.push_line(RecipeId(1), RecipeIngredientLine::new(IngredientId(2), Decimal::ONE));
        catalog.push_line(RecipeId(1), RecipeIngredientLine::new(IngredientId(1), Decimal::TWO));

        let ids: Vec<_> = catalog
            .ingredient_lines(RecipeId(1))
            .unwrap()
            .iter()
            .map(|l| l.ingredient_id)
            .collect();
        assert_eq!(ids, vec![IngredientId(2), IngredientId(1)]);
        assert_eq!(catalog.recipe_count(), 1);
    }

    #[test]
    fn test_unknown_ingredient_is_not_found() {
        let catalog = MemoryCatalog::new();
        assert_eq!(
            catalog.ingredient(IngredientId(3)).unwrap_err(),
            ShoppingListError::ingredient_not_found(IngredientId(3))
        );
    }
}
