//! Recipe store repository (read side used by the shopping list)

use anyhow::Result;
use foodgram_shared::{IngredientId, RecipeIngredientLine};
use rust_decimal::Decimal;
use sqlx::PgExecutor;

/// Ingredient line of a recipe
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RecipeLineRow {
    pub recipe_id: i64,
    pub ingredient_id: i64,
    pub amount: Decimal,
    pub unit: Option<String>,
}

impl From<RecipeLineRow> for RecipeIngredientLine {
    fn from(row: RecipeLineRow) -> Self {
        RecipeIngredientLine {
            ingredient_id: IngredientId(row.ingredient_id),
            amount: row.amount,
            unit: row.unit,
        }
    }
}

/// Recipe repository
pub struct RecipeRepository;

impl RecipeRepository {
    /// Which of the given recipe ids exist
    pub async fn existing_ids<'e>(db: impl PgExecutor<'e>, ids: &[i64]) -> Result<Vec<i64>> {
        let rows = sqlx::query_as::<_, (i64,)>("SELECT id FROM recipes WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(db)
            .await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Ingredient lines of several recipes, each recipe's lines in authoring order
    pub async fn lines_for_recipes<'e>(
        db: impl PgExecutor<'e>,
        ids: &[i64],
    ) -> Result<Vec<RecipeLineRow>> {
        let rows = sqlx::query_as::<_, RecipeLineRow>(
            r#"
            SELECT recipe_id, ingredient_id, amount, unit
            FROM recipe_ingredients
            WHERE recipe_id = ANY($1)
            ORDER BY recipe_id, sort_order, id
            "#,
        )
        .bind(ids)
        .fetch_all(db)
        .await?;

        Ok(rows)
    }
}
