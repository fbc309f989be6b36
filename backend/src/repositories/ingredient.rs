//! Ingredient catalog repository

use anyhow::Result;
use foodgram_shared::import::NewIngredient;
use foodgram_shared::{IngredientId, IngredientRef};
use sqlx::{PgExecutor, PgPool};

/// Ingredient row from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct IngredientRow {
    pub id: i64,
    pub name: String,
    pub measurement_unit: String,
}

impl From<IngredientRow> for IngredientRef {
    fn from(row: IngredientRow) -> Self {
        IngredientRef {
            id: IngredientId(row.id),
            name: row.name,
            measurement_unit: row.measurement_unit,
        }
    }
}

/// Ingredient catalog repository
pub struct IngredientRepository;

impl IngredientRepository {
    /// Fetch catalog entries by id; unknown ids are simply absent
    pub async fn find_by_ids<'e>(db: impl PgExecutor<'e>, ids: &[i64]) -> Result<Vec<IngredientRow>> {
        let rows = sqlx::query_as::<_, IngredientRow>(
            r#"
            SELECT id, name, measurement_unit
            FROM ingredients
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(db)
        .await?;

        Ok(rows)
    }

    /// Bulk insert catalog entries, skipping (name, unit) pairs already present
    ///
    /// Returns the number of rows actually inserted.
    pub async fn insert_many(db: &PgPool, ingredients: &[NewIngredient]) -> Result<u64> {
        if ingredients.is_empty() {
            return Ok(0);
        }

        let names: Vec<&str> = ingredients.iter().map(|i| i.name.as_str()).collect();
        let units: Vec<&str> = ingredients
            .iter()
            .map(|i| i.measurement_unit.as_str())
            .collect();

        let result = sqlx::query(
            r#"
            INSERT INTO ingredients (name, measurement_unit)
            SELECT * FROM UNNEST($1::text[], $2::text[])
            ON CONFLICT (name, measurement_unit) DO NOTHING
            "#,
        )
        .bind(&names)
        .bind(&units)
        .execute(db)
        .await?;

        Ok(result.rows_affected())
    }

    /// Total number of catalog entries
    pub async fn count(db: &PgPool) -> Result<i64> {
        let (count,) = sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM ingredients")
            .fetch_one(db)
            .await?;

        Ok(count)
    }
}
