//! User domain entities.

pub mod model;

pub use model::{RegisterUser, User};

pub use forumapi_core::types::{Credential, NewUser, RegisteredUser};
