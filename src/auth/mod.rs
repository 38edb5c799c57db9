//! JWT-based authentication over `Authorization: Bearer` headers.

pub mod jwt;

pub use jwt::{Claims, generate_token, validate_token};
