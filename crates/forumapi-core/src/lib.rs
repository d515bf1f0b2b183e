//! # forumapi-core
//!
//! Core crate for the Forum API. Contains the configuration schema, the
//! capability traits implemented by the auth and database crates, the
//! token and account value types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Forum API crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
