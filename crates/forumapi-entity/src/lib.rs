//! # forumapi-entity
//!
//! Domain entity models for the Forum API. Structs here are either database
//! rows (deriving `sqlx::FromRow`), values returned to callers, or request
//! payloads that check their own shape when built from JSON.

pub mod authentication;
pub mod payload;
pub mod user;
