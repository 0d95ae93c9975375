//! In-memory account store.
//!
//! Accounts live for the life of the process. Emails are compared after
//! trimming and lower-casing, so `Alice@Example.com` and `alice@example.com`
//! are the same account.

use std::collections::HashMap;

use payloads::UserId;
use secrecy::SecretBox;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Email already registered")]
    DuplicateEmail,
    #[error("User not found")]
    UserNotFound,
}

#[derive(Debug, Clone)]
struct StoredAccount {
    id: UserId,
    email: String,
    password_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: UserId,
    pub email: String,
}

#[derive(Default)]
pub struct AccountStore {
    accounts: Mutex<HashMap<String, StoredAccount>>,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl AccountStore {
    #[tracing::instrument(skip(self, password_hash), ret)]
    pub async fn create_user(
        &self,
        email: &str,
        password_hash: String,
    ) -> Result<Account, StoreError> {
        let key = normalize_email(email);
        let mut accounts = self.accounts.lock().await;
        if accounts.contains_key(&key) {
            return Err(StoreError::DuplicateEmail);
        }

        let account = StoredAccount {
            id: UserId(Uuid::new_v4()),
            email: email.trim().to_string(),
            password_hash,
        };
        accounts.insert(key, account.clone());
        Ok(Account {
            id: account.id,
            email: account.email,
        })
    }

    /// Look up the id and password hash stored for an email.
    pub async fn get_stored_credentials(
        &self,
        email: &str,
    ) -> Result<(UserId, SecretBox<String>), StoreError> {
        let accounts = self.accounts.lock().await;
        accounts
            .get(&normalize_email(email))
            .map(|account| {
                (
                    account.id,
                    SecretBox::new(Box::new(account.password_hash.clone())),
                )
            })
            .ok_or(StoreError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[tokio::test]
    async fn duplicate_email_is_case_insensitive() {
        let store = AccountStore::default();
        store
            .create_user("Alice@Example.com", "hash".into())
            .await
            .unwrap();

        let result = store.create_user(" alice@example.com", "h2".into()).await;
        assert!(matches!(result, Err(StoreError::DuplicateEmail)));

        // the first account's hash is untouched
        let (_, hash) =
            store.get_stored_credentials("alice@example.com").await.unwrap();
        assert_eq!(hash.expose_secret(), "hash");
    }

    #[tokio::test]
    async fn stored_credentials_round_trip() {
        let store = AccountStore::default();
        let account = store
            .create_user("bob@example.com", "the-hash".into())
            .await
            .unwrap();
        assert_eq!(account.email, "bob@example.com");

        let (id, hash) =
            store.get_stored_credentials("BOB@example.com").await.unwrap();
        assert_eq!(id, account.id);
        assert_eq!(hash.expose_secret(), "the-hash");

        assert!(matches!(
            store.get_stored_credentials("carol@example.com").await,
            Err(StoreError::UserNotFound)
        ));
    }
}
