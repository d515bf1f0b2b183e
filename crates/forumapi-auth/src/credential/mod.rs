//! Username/password verification.

pub mod verifier;

pub use verifier::{CredentialVerifier, INVALID_CREDENTIALS};
