//! PostgreSQL repository implementations.

pub mod authentication;
pub mod user;

pub use authentication::PgAuthenticationRepository;
pub use user::PgUserRepository;
