//! Password hashing trait.

use crate::result::AppResult;

/// Hash-and-compare primitive for user passwords.
pub trait PasswordHash: Send + Sync + 'static {
    /// Hashes a plaintext password with a fresh salt.
    fn hash(&self, password: &str) -> AppResult<String>;

    /// Returns `Ok(true)` if `password` matches `hash`, `Ok(false)` if not.
    ///
    /// Errors are reserved for hashes that cannot be parsed or checked.
    fn compare(&self, password: &str, hash: &str) -> AppResult<bool>;
}
