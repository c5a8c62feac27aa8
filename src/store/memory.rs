use crate::store::{StoreError, User, UserStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory user store, keyed by email. Backs the handler tests and
/// local experiments that have no MongoDB around.
#[derive(Clone, Debug, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryUserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn insert(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.email) {
            return Err(StoreError::DuplicateEmail);
        }

        users.insert(user.email.clone(), user);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User {
            email: "alice@example.com".to_string(),
            password: "$2b$04$fakefakefakefakefakefake".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() -> Result<(), StoreError> {
        let store = MemoryUserStore::new();

        assert!(store.find_by_email("alice@example.com").await?.is_none());

        store.insert(alice()).await?;

        let found = store.find_by_email("alice@example.com").await?;
        assert_eq!(found.map(|u| u.email), Some("alice@example.com".to_string()));

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_email() -> Result<(), StoreError> {
        let store = MemoryUserStore::new();

        store.insert(alice()).await?;

        assert!(matches!(
            store.insert(alice()).await,
            Err(StoreError::DuplicateEmail)
        ));

        Ok(())
    }
}
