//! # forumapi-service
//!
//! Business logic services for the Forum API. Authentication flows live in
//! `forumapi-auth`; this crate holds account management.

pub mod user;

pub use user::UserService;
