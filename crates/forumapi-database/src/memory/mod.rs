//! Process-local repositories selected with `database.provider = "memory"`.
//!
//! Suitable for single-node deployments and tests only; everything is lost
//! when the process exits.

pub mod authentication;
pub mod user;

pub use authentication::MemoryAuthenticationRepository;
pub use user::MemoryUserRepository;
