//! Authentication domain entities.

pub mod model;

pub use model::{NewAuth, RefreshAuth, StoredRefreshToken, UserLogin};
