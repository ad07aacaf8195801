//! Password hashing and verification
//!
//! Wraps bcrypt so the rest of the crate never touches the digest format
//! directly. Hashing uses the library default cost. Verification reports
//! three distinct outcomes: match, no match, and a digest that cannot be
//! parsed at all (`CorruptDigest`) - a stored-data fault, not a wrong
//! password.

use bcrypt::{hash, verify, DEFAULT_COST};
use thiserror::Error;

/// Errors from password hashing or verification
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Hashing failed (cost out of range, RNG failure)
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Stored digest is not a parseable bcrypt string
    #[error("stored password digest is corrupt")]
    CorruptDigest,
}

/// Hash a plaintext password with bcrypt at the default cost.
///
/// Each call salts independently, so hashing the same password twice
/// produces different digests.
pub fn hash_password(plain: &str) -> Result<String, PasswordError> {
    Ok(hash(plain, DEFAULT_COST)?)
}

/// Check a plaintext password against a stored bcrypt digest.
///
/// Returns `Ok(false)` for a well-formed digest that does not match, and
/// `Err(CorruptDigest)` when the digest itself cannot be parsed. Callers
/// deciding a login should treat both as a failed login, but only the
/// latter is worth logging as a data problem.
pub fn verify_password(plain: &str, digest: &str) -> Result<bool, PasswordError> {
    verify(plain, digest).map_err(|_| PasswordError::CorruptDigest)
}
