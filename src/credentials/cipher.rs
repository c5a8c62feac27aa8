//! Reversible password encryption.
//!
//! Representation layout is `base64(nonce (12 bytes) || ciphertext)`,
//! with a fresh random nonce per encryption. The Poly1305 tag makes the
//! ciphertext tamper-evident, so a modified or wrong-key representation
//! fails to decrypt instead of yielding garbage.

use crate::credentials::CredentialError;
use base64ct::{Base64, Encoding};
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Key, Nonce,
};
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};
use std::fmt;

const NONCE_LEN: usize = 12;

/// Cipher for the encrypted scheme, keyed once at startup.
#[derive(Clone)]
pub struct PasswordCipher {
    key: [u8; 32],
}

// keep the key out of logs and error chains
impl fmt::Debug for PasswordCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordCipher(..)")
    }
}

impl PasswordCipher {
    /// Derives the 256-bit cipher key from the configured secret string.
    #[must_use]
    pub fn new(secret: &str) -> Self {
        let digest = Sha256::digest(secret.as_bytes());

        let mut key = [0u8; 32];
        key.copy_from_slice(&digest);

        Self { key }
    }

    /// Encrypts `plaintext` into a storable representation.
    ///
    /// # Errors
    /// Returns an error if encryption fails.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, CredentialError> {
        let cipher = ChaCha20Poly1305::new(Key::from_slice(&self.key));

        let mut nonce_bytes = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = cipher
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|_| CredentialError::EncryptionFailed)?;

        let mut data = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        data.extend_from_slice(&nonce_bytes);
        data.extend_from_slice(&ciphertext);

        Ok(Base64::encode_string(&data))
    }

    /// Recovers the plaintext from a representation produced by
    /// [`encrypt`](Self::encrypt) under the same key.
    ///
    /// # Errors
    /// `MalformedRepresentation` if the input is not base64 or too
    /// short to carry a nonce; `DecryptionFailed` on key mismatch or
    /// tampering.
    pub fn decrypt(&self, representation: &str) -> Result<String, CredentialError> {
        let data = Base64::decode_vec(representation)
            .map_err(|_| CredentialError::MalformedRepresentation)?;

        if data.len() <= NONCE_LEN {
            return Err(CredentialError::MalformedRepresentation);
        }

        let (nonce_bytes, ciphertext) = data.split_at(NONCE_LEN);

        let cipher = ChaCha20Poly1305::new(Key::from_slice(&self.key));

        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .map_err(|_| CredentialError::DecryptionFailed)?;

        String::from_utf8(plaintext).map_err(|_| CredentialError::DecryptionFailed)
    }
}
