//! Foodgram Shared Library
//!
//! Pure domain logic for the shopping list: models, read-only store
//! traits, the aggregator and the plain-text renderer. Nothing in this
//! crate performs IO, so it can be exercised with in-memory fakes.

pub mod aggregation;
pub mod errors;
pub mod import;
pub mod lookup;
pub mod models;
pub mod render;
pub mod validation;

// Re-export commonly used items
pub use aggregation::aggregate;
pub use errors::{MissingRef, ShoppingListError};
pub use lookup::{IngredientCatalog, MemoryCatalog, RecipeLookup};
pub use models::{
    AggregatedLine, CartSelection, IngredientId, IngredientRef, RecipeId, RecipeIngredientLine,
};
pub use render::{format_amount, render, render_document};
