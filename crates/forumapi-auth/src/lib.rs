//! # forumapi-auth
//!
//! Authentication for the Forum API.
//!
//! ## Modules
//!
//! - `jwt`: HS256 access/refresh token signing, verification, and decoding
//! - `password`: Argon2id password hashing
//! - `credential`: username/password verification with a uniform failure
//! - `session`: the login, refresh, and logout flow over the token store

pub mod credential;
pub mod jwt;
pub mod password;
pub mod session;

pub use credential::CredentialVerifier;
pub use jwt::{Claims, JwtTokenManager};
pub use password::Argon2PasswordHasher;
pub use session::AuthSessionService;
