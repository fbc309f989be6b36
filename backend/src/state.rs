//! Application state management
//!
//! Shared state passed to all request handlers via Axum's state extraction.
//! Everything in it is cheap to clone and read-only while serving requests.

use crate::auth::JwtService;
use crate::config::AppConfig;
use crate::services::{PgShoppingListSource, ShoppingListSource};
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Pre-initialized JWT service with cached keys
    pub jwt: JwtService,
    /// Read side used to build shopping lists
    pub shopping_lists: Arc<dyn ShoppingListSource>,
}

impl AppState {
    /// Create state backed by Postgres
    ///
    /// Derives JWT keys from the config secret, so call once at startup.
    pub fn new(db: PgPool, config: AppConfig) -> Self {
        let source = Arc::new(PgShoppingListSource::new(db.clone()));
        Self::with_shopping_source(db, config, source)
    }

    /// Create state with a custom shopping list source
    pub fn with_shopping_source(
        db: PgPool,
        config: AppConfig,
        shopping_lists: Arc<dyn ShoppingListSource>,
    ) -> Self {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry_secs);

        Self {
            db,
            config: Arc::new(config),
            jwt,
            shopping_lists,
        }
    }

    #[inline]
    pub fn db(&self) -> &PgPool {
        &self.db
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }

    #[inline]
    pub fn shopping_lists(&self) -> &dyn ShoppingListSource {
        self.shopping_lists.as_ref()
    }
}
