//! Fixtures shared by the store tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Barrier;

use todos_core::auth::CredentialVerifier;
use todos_core::storage::{QueryExecutor, QueryResult, Result, Statement, StorageError};

use super::TodoStore;
use crate::storage::SqliteExecutor;

/// Verifier that accepts `hashed:<password>` and counts its calls.
#[derive(Default)]
pub struct CountingVerifier {
    calls: AtomicUsize,
}

impl CountingVerifier {
    pub fn hash(password: &str) -> String {
        format!("hashed:{password}")
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CredentialVerifier for CountingVerifier {
    fn verify(&self, password: &str, stored_hash: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        stored_hash == Self::hash(password)
    }
}

/// Executor that fails every statement whose SQL contains `needle`.
pub struct FailingExecutor {
    inner: Arc<SqliteExecutor>,
    needle: &'static str,
}

impl FailingExecutor {
    pub fn new(inner: Arc<SqliteExecutor>, needle: &'static str) -> Self {
        Self { inner, needle }
    }
}

#[async_trait]
impl QueryExecutor for FailingExecutor {
    async fn execute(&self, statement: Statement) -> Result<QueryResult> {
        if statement.sql.contains(self.needle) {
            return Err(StorageError::ConnectionFailed("connection reset".to_string()));
        }
        self.inner.execute(statement).await
    }
}

/// Executor that holds every statement until `parties` of them are in flight.
///
/// Statements issued one after another never get past the barrier.
pub struct RendezvousExecutor {
    inner: Arc<SqliteExecutor>,
    barrier: Barrier,
}

impl RendezvousExecutor {
    pub fn new(inner: Arc<SqliteExecutor>, parties: usize) -> Self {
        Self {
            inner,
            barrier: Barrier::new(parties),
        }
    }
}

#[async_trait]
impl QueryExecutor for RendezvousExecutor {
    async fn execute(&self, statement: Statement) -> Result<QueryResult> {
        self.barrier.wait().await;
        self.inner.execute(statement).await
    }
}

/// In-memory database with each user registered as `<name>-password`.
pub async fn seeded_executor(users: &[&str]) -> Arc<SqliteExecutor> {
    let executor = SqliteExecutor::open_in_memory().await.unwrap();
    for user in users {
        let hash = CountingVerifier::hash(&format!("{user}-password"));
        executor.insert_user(user, &hash).await.unwrap();
    }
    Arc::new(executor)
}

/// Store for the first of `users`, plus the executor to build more sessions.
pub async fn seeded_store(users: &[&str]) -> (TodoStore, Arc<SqliteExecutor>) {
    let executor = seeded_executor(users).await;
    let store = store_for(&executor, users[0]);
    (store, executor)
}

pub fn store_for(executor: &Arc<SqliteExecutor>, username: &str) -> TodoStore {
    TodoStore::new(
        executor.clone(),
        Arc::new(CountingVerifier::default()),
        username,
    )
}

/// Id of the owned list titled `title`, if any.
pub async fn list_id(store: &TodoStore, title: &str) -> Option<i64> {
    store
        .list_all_todo_lists()
        .await
        .unwrap()
        .into_iter()
        .find(|list| list.title == title)
        .map(|list| list.id)
}

/// Creates a list and returns its id.
pub async fn create_list(store: &TodoStore, title: &str) -> i64 {
    assert!(store.create_todo_list(title).await.unwrap());
    list_id(store, title).await.unwrap()
}
