//! JWT token encoding, verification, and claims.

pub mod claims;
pub mod manager;

pub use claims::Claims;
pub use manager::JwtTokenManager;
