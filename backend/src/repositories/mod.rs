//! Database repositories
//!
//! Read access to the recipe store, ingredient catalog and carts, plus the
//! catalog bulk insert used by the import.

pub mod cart;
pub mod ingredient;
pub mod recipe;

pub use cart::CartRepository;
pub use ingredient::{IngredientRepository, IngredientRow};
pub use recipe::{RecipeLineRow, RecipeRepository};
