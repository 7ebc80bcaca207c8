//! Authentication module
//!
//! Provides JWT-based authentication with role claims and argon2 password
//! hashing.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, JwtService};
pub use middleware::{AuthUser, RequireEmployee, RequireManager};
pub use password::PasswordService;
