//! # forumapi-database
//!
//! PostgreSQL pool management with embedded migrations, the user and
//! refresh-token repositories, and their process-local counterparts under
//! [`memory`]. [`Stores`] picks one set from `database.provider`.

pub mod connection;
pub mod memory;
pub mod repositories;
pub mod stores;

pub use connection::DatabasePool;
pub use memory::{MemoryAuthenticationRepository, MemoryUserRepository};
pub use repositories::{PgAuthenticationRepository, PgUserRepository};
pub use stores::Stores;
