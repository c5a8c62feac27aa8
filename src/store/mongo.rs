use crate::store::{StoreError, User, UserStore};
use async_trait::async_trait;
use mongodb::{
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Client, Collection, IndexModel,
};
use tracing::debug;

// server-side code for duplicate key violations
const DUPLICATE_KEY: i32 = 11000;

/// MongoDB-backed user store. A `Collection` handle is cheap to clone,
/// so the store itself is the value shared with request handlers.
#[derive(Clone, Debug)]
pub struct MongoUserStore {
    users: Collection<User>,
}

impl MongoUserStore {
    /// Connect to the database named in the DSN (falling back to
    /// `userDB`) and ensure the unique index on `email` exists.
    ///
    /// # Errors
    /// Returns an error if the connection or index creation fails.
    pub async fn connect(dsn: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(dsn).await?;

        let database = client
            .default_database()
            .unwrap_or_else(|| client.database("userDB"));

        debug!(database = %database.name(), "connected");

        let users = database.collection::<User>("users");

        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        users.create_index(index).await?;

        Ok(Self { users })
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY
        }
        _ => false,
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.find_one(doc! { "email": email }).await?)
    }

    async fn insert(&self, user: User) -> Result<(), StoreError> {
        match self.users.insert_one(&user).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(StoreError::DuplicateEmail),
            Err(e) => Err(e.into()),
        }
    }
}
