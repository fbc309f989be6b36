//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the shared domain crate.

pub mod import;
pub mod shopping_list;

pub use import::{ImportReport, IngredientImportService};
pub use shopping_list::{
    PgShoppingListSource, ShoppingListExport, ShoppingListService, ShoppingListSource,
};
