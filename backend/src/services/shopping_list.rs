//! Shopping list export service
//!
//! Turns a user's cart into a downloadable text file:
//! 1. read the cart selection
//! 2. load the selected recipes and the catalog entries they use into a
//!    request-local snapshot
//! 3. run the pure aggregator over the snapshot and render it
//!
//! Storage sits behind [`ShoppingListSource`] so the flow can run against
//! Postgres in production and an in-memory fake in tests.

use crate::config::ShoppingListConfig;
use crate::db;
use crate::error::ApiError;
use crate::repositories::{CartRepository, IngredientRepository, RecipeRepository};
use async_trait::async_trait;
use foodgram_shared::validation::validate_selection;
use foodgram_shared::{
    aggregate, render_document, CartSelection, MemoryCatalog, RecipeId, RecipeIngredientLine,
};
use sqlx::PgPool;
use std::collections::BTreeSet;
use tracing::{debug, info};
use uuid::Uuid;

/// Where carts, recipes and catalog entries are read from
#[async_trait]
pub trait ShoppingListSource: Send + Sync {
    /// The user's cart, in insertion order
    async fn cart(&self, user_id: Uuid) -> anyhow::Result<CartSelection>;

    /// Snapshot of the given recipes and every ingredient they reference.
    /// Recipes that do not exist are left out of the snapshot.
    async fn load_catalog(&self, recipe_ids: &[RecipeId]) -> anyhow::Result<MemoryCatalog>;
}

/// Postgres-backed source
#[derive(Clone)]
pub struct PgShoppingListSource {
    pool: PgPool,
}

impl PgShoppingListSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShoppingListSource for PgShoppingListSource {
    async fn cart(&self, user_id: Uuid) -> anyhow::Result<CartSelection> {
        let ids = CartRepository::recipe_ids_for_user(&self.pool, user_id).await?;
        Ok(ids.into_iter().map(RecipeId).collect())
    }

    async fn load_catalog(&self, recipe_ids: &[RecipeId]) -> anyhow::Result<MemoryCatalog> {
        let ids: Vec<i64> = recipe_ids
            .iter()
            .map(|id| id.0)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        // Recipe rows, their lines and the catalog must agree even if a
        // recipe is deleted concurrently
        let mut tx = db::begin_snapshot(&self.pool).await?;

        let mut catalog = MemoryCatalog::new();
        for id in RecipeRepository::existing_ids(&mut *tx, &ids).await? {
            catalog.insert_recipe(RecipeId(id), Vec::new());
        }

        let rows = RecipeRepository::lines_for_recipes(&mut *tx, &ids).await?;
        let ingredient_ids: Vec<i64> = rows
            .iter()
            .map(|row| row.ingredient_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        for row in rows {
            let recipe_id = RecipeId(row.recipe_id);
            catalog.push_line(recipe_id, RecipeIngredientLine::from(row));
        }

        for row in IngredientRepository::find_by_ids(&mut *tx, &ingredient_ids).await? {
            catalog.insert_ingredient(row.into());
        }

        tx.commit().await?;
        Ok(catalog)
    }
}

/// Rendered shopping list ready to be sent as an attachment
#[derive(Debug, Clone)]
pub struct ShoppingListExport {
    pub filename: String,
    pub body: Vec<u8>,
    pub line_count: usize,
}

/// Shopping list service
pub struct ShoppingListService;

impl ShoppingListService {
    /// Build the shopping list file for a user's cart
    pub async fn export<S>(
        source: &S,
        user_id: Uuid,
        settings: &ShoppingListConfig,
    ) -> Result<ShoppingListExport, ApiError>
    where
        S: ShoppingListSource + ?Sized,
    {
        let cart = source.cart(user_id).await?;
        validate_selection(cart.as_slice())?;

        let catalog = source.load_catalog(cart.as_slice()).await?;
        debug!(
            %user_id,
            recipes = catalog.recipe_count(),
            ingredients = catalog.ingredient_count(),
            "Loaded shopping list snapshot"
        );

        let lines = aggregate(cart.as_slice(), &catalog, &catalog)?;
        let body = render_document(settings.title.as_deref(), &lines);

        info!(
            %user_id,
            recipes = cart.len(),
            lines = lines.len(),
            "Shopping list exported"
        );

        Ok(ShoppingListExport {
            filename: settings.filename.clone(),
            body,
            line_count: lines.len(),
        })
    }
}
