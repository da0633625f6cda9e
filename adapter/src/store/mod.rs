use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use kernel::model::id::UserId;
use tokio::sync::RwLock;
use uuid::Uuid;

pub mod model;

use model::{booking::BookingRow, event::EventRow, group::GroupRow, user::UserRow};

/// One named collection of documents keyed by id. Locks are held only for the
/// duration of the synchronous map access, never across an await point.
pub struct Collection<T> {
    docs: Arc<RwLock<HashMap<Uuid, T>>>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            docs: Arc::clone(&self.docs),
        }
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            docs: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<T: Clone> Collection<T> {
    pub async fn get(&self, id: Uuid) -> Option<T> {
        self.docs.read().await.get(&id).cloned()
    }

    pub async fn put(&self, id: Uuid, doc: T) {
        self.docs.write().await.insert(id, doc);
    }

    pub async fn remove(&self, id: Uuid) -> Option<T> {
        self.docs.write().await.remove(&id)
    }

    pub async fn all(&self) -> Vec<T> {
        self.docs.read().await.values().cloned().collect()
    }

    pub async fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.docs.read().await.values().find(|doc| pred(doc)).cloned()
    }

    pub async fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.docs
            .read()
            .await
            .values()
            .filter(|doc| pred(doc))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct TokenEntry {
    pub user_id: UserId,
    pub expires_at: Instant,
}

/// The shared in-memory document store handed to every repository, playing the
/// role the connection pool plays for a database-backed adapter. Cloning is
/// cheap; all clones see the same collections.
#[derive(Clone, Default)]
pub struct DocumentStore {
    pub(crate) users: Collection<UserRow>,
    pub(crate) events: Collection<EventRow>,
    pub(crate) groups: Collection<GroupRow>,
    pub(crate) bookings: Collection<BookingRow>,
    pub(crate) tokens: Arc<RwLock<HashMap<String, TokenEntry>>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn insert_token(&self, token: String, user_id: UserId, ttl: u64) {
        let entry = TokenEntry {
            user_id,
            expires_at: Instant::now() + Duration::from_secs(ttl),
        };
        self.tokens.write().await.insert(token, entry);
    }

    /// Resolves a token to its subject, purging it when expired.
    pub(crate) async fn resolve_token(&self, token: &str) -> Option<UserId> {
        let mut tokens = self.tokens.write().await;
        match tokens.get(token) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.user_id),
            Some(_) => {
                tokens.remove(token);
                None
            }
            None => None,
        }
    }

    pub(crate) async fn remove_token(&self, token: &str) {
        self.tokens.write().await.remove(token);
    }
}
