//! User persistence.
//!
//! The store keeps one record per email and is only ever asked two
//! things: insert a new user at registration, fetch one by email at
//! login. Email uniqueness is the store's job (unique index in Mongo,
//! map key in memory); callers see a duplicate as
//! [`StoreError::DuplicateEmail`], never as a second record.

pub mod memory;
pub mod mongo;

pub use self::memory::MemoryUserStore;
pub use self::mongo::MongoUserStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A registered user. `password` holds the stored representation
/// produced by the credential codec, never the plaintext.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct User {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user already exists")]
    DuplicateEmail,

    #[error(transparent)]
    Database(#[from] mongodb::error::Error),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a user by email. Absence is a normal outcome, not an error.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Persist a new user.
    async fn insert(&self, user: User) -> Result<(), StoreError>;
}
