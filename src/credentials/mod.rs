//! Credential codec and verifier.
//!
//! A [`Codec`] turns a plaintext password into the representation that
//! gets persisted, and decides whether a submitted plaintext matches a
//! stored representation. Two schemes exist:
//!
//! - [`Codec::hashed`]: salted bcrypt. One-way; two encodings of the
//!   same plaintext differ. Verification recomputes the digest with the
//!   cost and salt embedded in the stored string.
//! - [`Codec::encrypted`]: ChaCha20-Poly1305 under a key derived from a
//!   startup secret. Reversible; [`Codec::decode`] recovers the
//!   plaintext.
//!
//! A legitimate mismatch is `Ok(false)`. Structural failures (a stored
//! string the codec cannot read, a tampered ciphertext) surface as
//! errors so callers can log them server-side; either way the caller is
//! expected to answer the client with the same generic rejection.

pub mod cipher;
pub mod hash;

use self::cipher::PasswordCipher;
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("no secret key configured")]
    MissingKey,

    #[error("cost factor {0} outside the supported range 4..=31")]
    InvalidCost(u32),

    #[error("stored credential is malformed")]
    MalformedRepresentation,

    #[error("encryption failed")]
    EncryptionFailed,

    #[error("decryption failed")]
    DecryptionFailed,

    #[error("hashed credentials cannot be decoded")]
    Irreversible,

    #[error("hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("blocking task failed: {0}")]
    Runtime(#[from] tokio::task::JoinError),
}

/// Converts plaintext passwords to stored representations and back
/// (encrypted scheme only), and verifies submissions against them.
///
/// Built once at startup from configuration and injected into handlers;
/// read-only afterwards, so clones are free to share across requests.
#[derive(Clone, Debug)]
pub enum Codec {
    Encrypted(PasswordCipher),
    Hashed { cost: u32 },
}

impl Codec {
    /// Reversible scheme. The 256-bit cipher key is derived from the
    /// configured secret string.
    ///
    /// # Errors
    /// `MissingKey` if the secret is empty.
    pub fn encrypted(secret: &SecretString) -> Result<Self, CredentialError> {
        let secret = secret.expose_secret();

        if secret.is_empty() {
            return Err(CredentialError::MissingKey);
        }

        Ok(Self::Encrypted(PasswordCipher::new(secret)))
    }

    /// One-way scheme with the given bcrypt work factor.
    ///
    /// # Errors
    /// `InvalidCost` outside bcrypt's supported 4..=31 range.
    pub fn hashed(cost: u32) -> Result<Self, CredentialError> {
        if !(hash::MIN_COST..=hash::MAX_COST).contains(&cost) {
            return Err(CredentialError::InvalidCost(cost));
        }

        Ok(Self::Hashed { cost })
    }

    /// Encode a plaintext password into its stored representation.
    ///
    /// Hashing is CPU-bound by design, so the hashed scheme runs on the
    /// blocking pool; encryption is cheap and runs inline.
    ///
    /// # Errors
    /// Returns an error if encryption or hashing fails.
    pub async fn encode(&self, plaintext: &str) -> Result<String, CredentialError> {
        match self {
            Self::Encrypted(cipher) => cipher.encrypt(plaintext),
            Self::Hashed { cost } => hash::hash_password(plaintext, *cost).await,
        }
    }

    /// Recover the plaintext from a stored representation.
    ///
    /// # Errors
    /// `Irreversible` for the hashed scheme; `MalformedRepresentation`
    /// or `DecryptionFailed` if the stored string cannot be read.
    pub fn decode(&self, representation: &str) -> Result<String, CredentialError> {
        match self {
            Self::Encrypted(cipher) => cipher.decrypt(representation),
            Self::Hashed { .. } => Err(CredentialError::Irreversible),
        }
    }

    /// Decide whether `plaintext` matches `representation`.
    ///
    /// Comparison is constant-time in both schemes: bcrypt compares
    /// digests internally, the encrypted scheme compares the recovered
    /// plaintext with `subtle`.
    ///
    /// # Errors
    /// Structural failures only; a wrong password is `Ok(false)`.
    pub async fn verify(
        &self,
        plaintext: &str,
        representation: &str,
    ) -> Result<bool, CredentialError> {
        match self {
            Self::Encrypted(cipher) => {
                let recovered = cipher.decrypt(representation)?;

                Ok(bool::from(
                    recovered.as_bytes().ct_eq(plaintext.as_bytes()),
                ))
            }
            Self::Hashed { .. } => hash::verify_password(plaintext, representation).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_string())
    }

    #[test]
    fn test_encrypted_requires_secret() {
        assert!(matches!(
            Codec::encrypted(&secret("")),
            Err(CredentialError::MissingKey)
        ));
        assert!(Codec::encrypted(&secret("hush hush")).is_ok());
    }

    #[test]
    fn test_hashed_cost_bounds() {
        assert!(matches!(
            Codec::hashed(3),
            Err(CredentialError::InvalidCost(3))
        ));
        assert!(matches!(
            Codec::hashed(32),
            Err(CredentialError::InvalidCost(32))
        ));
        assert!(Codec::hashed(4).is_ok());
        assert!(Codec::hashed(31).is_ok());
    }

    #[tokio::test]
    async fn test_encrypted_round_trip() -> Result<(), CredentialError> {
        let codec = Codec::encrypted(&secret("hush hush"))?;

        let representation = codec.encode("Secr3t!").await?;
        assert_ne!(representation, "Secr3t!");
        assert_eq!(codec.decode(&representation)?, "Secr3t!");

        Ok(())
    }

    #[tokio::test]
    async fn test_encrypted_verify() -> Result<(), CredentialError> {
        let codec = Codec::encrypted(&secret("hush hush"))?;
        let representation = codec.encode("Secr3t!").await?;

        assert!(codec.verify("Secr3t!", &representation).await?);
        assert!(!codec.verify("wrong", &representation).await?);

        Ok(())
    }

    #[tokio::test]
    async fn test_encrypted_wrong_key_fails() -> Result<(), CredentialError> {
        let codec = Codec::encrypted(&secret("hush hush"))?;
        let other = Codec::encrypted(&secret("different"))?;

        let representation = codec.encode("Secr3t!").await?;
        assert!(matches!(
            other.decode(&representation),
            Err(CredentialError::DecryptionFailed)
        ));
        assert!(other.verify("Secr3t!", &representation).await.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn test_hashed_never_stores_plaintext() -> Result<(), CredentialError> {
        let codec = Codec::hashed(4)?;

        let representation = codec.encode("Secr3t!").await?;
        assert_ne!(representation, "Secr3t!");
        assert!(!representation.contains("Secr3t!"));

        Ok(())
    }

    #[tokio::test]
    async fn test_hashed_salt_uniqueness() -> Result<(), CredentialError> {
        let codec = Codec::hashed(4)?;

        let first = codec.encode("Secr3t!").await?;
        let second = codec.encode("Secr3t!").await?;
        assert_ne!(first, second);

        // both still verify
        assert!(codec.verify("Secr3t!", &first).await?);
        assert!(codec.verify("Secr3t!", &second).await?);

        Ok(())
    }

    #[tokio::test]
    async fn test_hashed_verify() -> Result<(), CredentialError> {
        let codec = Codec::hashed(4)?;
        let representation = codec.encode("Secr3t!").await?;

        assert!(codec.verify("Secr3t!", &representation).await?);
        assert!(!codec.verify("wrong", &representation).await?);

        Ok(())
    }

    #[tokio::test]
    async fn test_hashed_is_irreversible() -> Result<(), CredentialError> {
        let codec = Codec::hashed(4)?;
        let representation = codec.encode("Secr3t!").await?;

        assert!(matches!(
            codec.decode(&representation),
            Err(CredentialError::Irreversible)
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_hashed_tampered_digest_rejects() -> Result<(), CredentialError> {
        let codec = Codec::hashed(4)?;
        let representation = codec.encode("Secr3t!").await?;

        // flip the last character of the digest portion; the string
        // still parses, so this must be a plain mismatch, not an error
        let mut tampered = representation.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'a' { 'b' } else { 'a' });

        assert!(!codec.verify("Secr3t!", &tampered).await?);

        Ok(())
    }

    #[tokio::test]
    async fn test_hashed_malformed_representation() -> Result<(), CredentialError> {
        let codec = Codec::hashed(4)?;

        assert!(matches!(
            codec.verify("Secr3t!", "not-a-bcrypt-string").await,
            Err(CredentialError::MalformedRepresentation)
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_encrypted_malformed_representation() -> Result<(), CredentialError> {
        let codec = Codec::encrypted(&secret("hush hush"))?;

        assert!(matches!(
            codec.verify("Secr3t!", "@@not base64@@").await,
            Err(CredentialError::MalformedRepresentation)
        ));

        Ok(())
    }
}
