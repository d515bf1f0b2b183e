//! Shared value types.

pub mod token;
pub mod user;

pub use token::TokenPayload;
pub use user::{Credential, NewUser, RegisteredUser};
