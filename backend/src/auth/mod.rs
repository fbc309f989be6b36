//! Authentication module
//!
//! Verifies JWT bearer tokens issued by the account service.

mod jwt;
mod middleware;

pub use jwt::{Claims, JwtService};
pub use middleware::AuthUser;
