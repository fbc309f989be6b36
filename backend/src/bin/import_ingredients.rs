//! Ingredient catalog import
//!
//! Loads `import.ingredients_path` (default `data/ingredients.csv`) into the
//! ingredients table. Rows already in the catalog are left untouched, so the
//! import can be re-run safely.

use anyhow::{Context, Result};
use foodgram_backend::{config::AppConfig, db, services::IngredientImportService};
use std::fs::File;
use std::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "foodgram_backend=info,sqlx=warn".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    let path = &config.import.ingredients_path;

    let file = File::open(path).with_context(|| format!("Ingredient file {} not found", path))?;

    let pool = db::create_pool(&config.database).await?;
    db::run_migrations(&pool).await?;

    info!(path = %path, "Importing ingredients");
    let report = IngredientImportService::import(&pool, BufReader::new(file)).await?;

    info!(
        parsed = report.parsed,
        inserted = report.inserted,
        skipped = report.skipped(),
        "Ingredients imported"
    );
    Ok(())
}
