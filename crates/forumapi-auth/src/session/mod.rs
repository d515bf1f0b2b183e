//! Login, refresh, and logout over the refresh-token store.

pub mod service;

pub use service::AuthSessionService;
