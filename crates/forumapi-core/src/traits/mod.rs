//! Capability traits defined in `forumapi-core` and implemented by other crates.

pub mod authentication_repository;
pub mod password_hash;
pub mod token_manager;
pub mod user_repository;

pub use authentication_repository::AuthenticationRepository;
pub use password_hash::PasswordHash;
pub use token_manager::TokenManager;
pub use user_repository::{USERNAME_TAKEN, UserRepository};
