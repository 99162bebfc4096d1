use std::sync::Arc;

use todos_core::storage::{row_to_password_hash, Result, SqlValue, Statement, StorageError};

use super::TodoStore;

/// Credential lookup is the one statement not scoped to the session user.
const SELECT_PASSWORD_BY_USERNAME: &str = "SELECT password FROM users WHERE username = ?1";

impl TodoStore {
    /// Checks a login attempt against the stored password hash.
    ///
    /// Unknown users and wrong passwords both yield `Ok(false)`. Hash
    /// verification is CPU-bound and runs on the blocking thread pool.
    pub async fn verify_credentials(&self, username: &str, password: &str) -> Result<bool> {
        let statement = Statement::new(
            SELECT_PASSWORD_BY_USERNAME,
            vec![SqlValue::from(username)],
        );
        let result = self.executor.execute(statement).await?;

        let Some(row) = result.first() else {
            tracing::warn!(username, "Login attempt for unknown user");
            return Ok(false);
        };
        let stored_hash = row_to_password_hash(row)?;

        let verifier = Arc::clone(&self.verifier);
        let password = password.to_owned();
        let valid = tokio::task::spawn_blocking(move || verifier.verify(&password, &stored_hash))
            .await
            .map_err(|e| StorageError::Verifier(e.to_string()))?;

        if !valid {
            tracing::warn!(username, "Login attempt with wrong password");
        }
        Ok(valid)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use todos_core::auth::CredentialVerifier;

    use super::super::test_support::{seeded_executor, CountingVerifier};
    use super::super::TodoStore;
    use crate::credentials::Argon2Verifier;

    #[tokio::test]
    async fn test_verify_credentials_accepts_correct_password() {
        let executor = seeded_executor(&["alice"]).await;
        let verifier = Arc::new(CountingVerifier::default());
        let store = TodoStore::new(executor, verifier.clone(), "alice");

        assert!(store.verify_credentials("alice", "alice-password").await.unwrap());
        assert_eq!(verifier.calls(), 1);
    }

    #[tokio::test]
    async fn test_verify_credentials_rejects_wrong_password() {
        let executor = seeded_executor(&["alice"]).await;
        let verifier = Arc::new(CountingVerifier::default());
        let store = TodoStore::new(executor, verifier.clone(), "alice");

        assert!(!store.verify_credentials("alice", "guess").await.unwrap());
        assert_eq!(verifier.calls(), 1);
    }

    #[tokio::test]
    async fn test_verify_credentials_unknown_user_skips_verifier() {
        let executor = seeded_executor(&["alice"]).await;
        let verifier = Arc::new(CountingVerifier::default());
        let store = TodoStore::new(executor, verifier.clone(), "alice");

        assert!(!store.verify_credentials("mallory", "anything").await.unwrap());
        assert_eq!(verifier.calls(), 0);
    }

    #[tokio::test]
    async fn test_verify_credentials_with_argon2_hashes() {
        let executor = Arc::new(
            crate::storage::SqliteExecutor::open_in_memory()
                .await
                .unwrap(),
        );
        let verifier = Argon2Verifier::new();
        let hash = verifier.hash_password("correct horse").unwrap();
        executor.insert_user("carol", &hash).await.unwrap();
        assert!(verifier.verify("correct horse", &hash));

        let store = TodoStore::new(executor, Arc::new(verifier), "carol");

        assert!(store.verify_credentials("carol", "correct horse").await.unwrap());
        assert!(!store.verify_credentials("carol", "battery staple").await.unwrap());
    }
}
