//! Shopping cart repository

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// Shopping cart repository
pub struct CartRepository;

impl CartRepository {
    /// Recipe ids in a user's cart, in the order they were added
    pub async fn recipe_ids_for_user(db: &PgPool, user_id: Uuid) -> Result<Vec<i64>> {
        let rows = sqlx::query_as::<_, (i64,)>(
            r#"
            SELECT recipe_id
            FROM shopping_cart
            WHERE user_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}
