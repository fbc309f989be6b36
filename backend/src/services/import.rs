//! Ingredient catalog bulk import

use crate::error::ApiError;
use crate::repositories::IngredientRepository;
use foodgram_shared::import::parse_ingredients_csv;
use sqlx::PgPool;
use std::io;
use tracing::info;

/// Outcome of an import run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    /// Distinct rows found in the file
    pub parsed: usize,
    /// Rows that were new to the catalog
    pub inserted: u64,
}

impl ImportReport {
    pub fn skipped(&self) -> u64 {
        (self.parsed as u64).saturating_sub(self.inserted)
    }
}

/// Ingredient import service
pub struct IngredientImportService;

impl IngredientImportService {
    /// Parse a `name,measurement_unit` CSV and add new entries to the catalog
    ///
    /// The whole file is validated before anything is written.
    pub async fn import<R: io::Read>(pool: &PgPool, reader: R) -> Result<ImportReport, ApiError> {
        let ingredients = parse_ingredients_csv(reader)?;
        let inserted = IngredientRepository::insert_many(pool, &ingredients).await?;

        let report = ImportReport {
            parsed: ingredients.len(),
            inserted,
        };
        info!(
            parsed = report.parsed,
            inserted = report.inserted,
            skipped = report.skipped(),
            "Ingredient import finished"
        );
        Ok(report)
    }
}
