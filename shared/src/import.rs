//! Ingredient catalog CSV parsing
//!
//! The catalog is seeded from a headerless `name,measurement_unit` file.
//! Exact duplicate rows are dropped; the first occurrence wins.

use crate::errors::ShoppingListError;
use crate::validation::validate_catalog_field;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io;

/// Catalog entry parsed from an import file, not yet assigned an id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewIngredient {
    pub name: String,
    pub measurement_unit: String,
}

/// Parse an ingredient CSV file
pub fn parse_ingredients_csv<R: io::Read>(reader: R) -> Result<Vec<NewIngredient>, ShoppingListError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut seen = HashSet::new();
    let mut parsed = Vec::new();

    for record in rdr.records() {
        let record = record.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or_default();
            ShoppingListError::InvalidInput(format!("line {}: {}", line, e))
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if record.len() != 2 {
            return Err(ShoppingListError::InvalidInput(format!(
                "line {}: expected 2 fields, found {}",
                line,
                record.len()
            )));
        }

        let name = &record[0];
        let measurement_unit = &record[1];
        validate_catalog_field("name", name, line)?;
        validate_catalog_field("measurement unit", measurement_unit, line)?;

        let ingredient = NewIngredient {
            name: name.to_string(),
            measurement_unit: measurement_unit.to_string(),
        };
        if seen.insert(ingredient.clone()) {
            parsed.push(ingredient);
        }
    }

    Ok(parsed)
}
