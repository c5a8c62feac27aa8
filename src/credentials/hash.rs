//! One-way password hashing.
//!
//! bcrypt generates a fresh random salt per call and emits a
//! self-describing `$2b$cost$saltdigest` string, so verification needs
//! no configuration beyond the stored representation itself. The work
//! factor makes both operations deliberately slow; they always run on
//! the blocking pool so request handling elsewhere is not held up.

use crate::credentials::CredentialError;
use tokio::task;

pub const DEFAULT_COST: u32 = 10;
pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;

/// Hash `plaintext` with the given work factor.
///
/// # Errors
/// Returns an error if hashing fails or the blocking task is cancelled.
pub async fn hash_password(plaintext: &str, cost: u32) -> Result<String, CredentialError> {
    let plaintext = plaintext.to_owned();

    Ok(task::spawn_blocking(move || bcrypt::hash(plaintext, cost)).await??)
}

/// Recompute the digest with the cost and salt embedded in
/// `representation` and compare. bcrypt's digest comparison is
/// constant-time.
///
/// # Errors
/// `MalformedRepresentation` if the stored string does not parse as a
/// bcrypt hash; a plain mismatch is `Ok(false)`.
pub async fn verify_password(
    plaintext: &str,
    representation: &str,
) -> Result<bool, CredentialError> {
    let plaintext = plaintext.to_owned();
    let representation = representation.to_owned();

    task::spawn_blocking(move || bcrypt::verify(plaintext, &representation))
        .await?
        .map_err(|_| CredentialError::MalformedRepresentation)
}
