//! Generic batching loader for relation fields
//!
//! Relation resolvers run once per parent entity, so a naive implementation
//! issues one database query per entity (the N+1 problem). `Loader` collects
//! the keys requested by sibling resolvers during a short scheduling window,
//! fetches them with a single batched call, and hands each caller the result
//! for its own key.
//!
//! Loaders are request-scoped: every GraphQL request gets fresh instances
//! (see [`super::Loaders`]), so the per-key cache lives and dies with the
//! request and batching never spans requests.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::{oneshot, Mutex};

/// How long a flush waits for sibling resolvers to enqueue their keys.
///
/// The window only needs to outlast the synchronous part of one selection
/// level; resolvers that depend on the results run in a later flush cycle.
pub const DEFAULT_FLUSH_DELAY: Duration = Duration::from_millis(1);

/// Error resolving a single key
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// The batched fetch itself failed; every key in the batch gets this
    #[error("store error: {0}")]
    Store(Arc<sqlx::Error>),

    /// The record is required to exist but does not (application error,
    /// distinct from a valid empty result)
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// The batched fetch broke the positional contract; rather than risk
    /// handing a caller a neighboring key's value, the whole batch fails
    #[error("batch fetch returned {got} results for {expected} keys")]
    LengthMismatch { expected: usize, got: usize },

    /// The flush task went away without resolving this key
    #[error("batch flush aborted before resolving key")]
    Aborted,
}

impl From<sqlx::Error> for LoadError {
    fn from(err: sqlx::Error) -> Self {
        Self::Store(Arc::new(err))
    }
}

/// Outcome of loading one key: found, legitimately absent, or failed
pub type ItemResult<V> = Result<Option<V>, LoadError>;

/// A batched fetch against the backing store.
///
/// Implementations receive the deduplicated keys of one batch and must
/// return exactly one result per key, in key order. The loader re-associates
/// results strictly by position, so the store may return records that omit
/// or duplicate the key field. Keys with no record are reported explicitly:
/// `Ok(None)` where absence is valid, `Err(LoadError::NotFound)` where it is
/// not, never silently filtered.
#[async_trait]
pub trait BatchFn<K, V>: Send + Sync + 'static {
    async fn fetch(&self, keys: &[K]) -> Result<Vec<ItemResult<V>>, LoadError>;
}

enum Entry<V> {
    /// Key is in the current or an in-flight batch; senders wake the callers
    Pending(Vec<oneshot::Sender<ItemResult<V>>>),
    Resolved(ItemResult<V>),
}

struct State<K, V> {
    cache: HashMap<K, Entry<V>>,
    queue: Vec<K>,
    flush_scheduled: bool,
}

struct Inner<K, V, B> {
    batch_fn: B,
    delay: Duration,
    state: Mutex<State<K, V>>,
}

/// A per-request, per-relation batching loader
pub struct Loader<K, V, B> {
    inner: Arc<Inner<K, V, B>>,
}

impl<K, V, B> Clone for Loader<K, V, B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V, B> Loader<K, V, B>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
    B: BatchFn<K, V>,
{
    /// Create a loader with the default flush window
    pub fn new(batch_fn: B) -> Self {
        Self::with_delay(batch_fn, DEFAULT_FLUSH_DELAY)
    }

    /// Create a loader with a custom flush window
    pub fn with_delay(batch_fn: B, delay: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                batch_fn,
                delay,
                state: Mutex::new(State {
                    cache: HashMap::new(),
                    queue: Vec::new(),
                    flush_scheduled: false,
                }),
            }),
        }
    }

    /// Load the value for one key.
    ///
    /// Suspends the caller until the key's batch flushes. A key already
    /// resolved within this request is returned from cache without touching
    /// the store; a key already pending joins the in-flight batch instead of
    /// enqueueing again, so a key is in at most one batch at a time.
    pub async fn load(&self, key: K) -> ItemResult<V> {
        let rx = {
            let mut state = self.inner.state.lock().await;
            match state.cache.get_mut(&key) {
                Some(Entry::Resolved(result)) => return result.clone(),
                Some(Entry::Pending(waiters)) => {
                    let (tx, rx) = oneshot::channel();
                    waiters.push(tx);
                    rx
                }
                None => {
                    let (tx, rx) = oneshot::channel();
                    state.cache.insert(key.clone(), Entry::Pending(vec![tx]));
                    state.queue.push(key);
                    if !state.flush_scheduled {
                        state.flush_scheduled = true;
                        let inner = Arc::clone(&self.inner);
                        tokio::spawn(async move {
                            tokio::time::sleep(inner.delay).await;
                            Inner::flush(inner).await;
                        });
                    }
                    rx
                }
            }
        };

        rx.await.unwrap_or(Err(LoadError::Aborted))
    }

    /// Load many keys through [`Self::load`], preserving input order.
    ///
    /// Duplicate keys share one cache entry and one store fetch.
    pub async fn load_many(&self, keys: impl IntoIterator<Item = K>) -> Vec<ItemResult<V>> {
        futures_util::future::join_all(keys.into_iter().map(|key| self.load(key))).await
    }
}

impl<K, V, B> Inner<K, V, B>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
    B: BatchFn<K, V>,
{
    async fn flush(self: Arc<Self>) {
        // Resetting flush_scheduled under the same lock as the queue take
        // means keys enqueued after this point schedule their own flush.
        let keys = {
            let mut state = self.state.lock().await;
            state.flush_scheduled = false;
            std::mem::take(&mut state.queue)
        };
        if keys.is_empty() {
            return;
        }

        tracing::debug!(batch_size = keys.len(), "flushing relation batch");

        let results = match self.batch_fn.fetch(&keys).await {
            Ok(results) if results.len() == keys.len() => results,
            Ok(results) => {
                let err = LoadError::LengthMismatch {
                    expected: keys.len(),
                    got: results.len(),
                };
                tracing::error!(error = %err, "batch fetch violated positional contract");
                vec![Err(err); keys.len()]
            }
            Err(err) => {
                tracing::warn!(error = %err, batch_size = keys.len(), "batch fetch failed");
                vec![Err(err); keys.len()]
            }
        };

        let mut state = self.state.lock().await;
        for (key, result) in keys.into_iter().zip(results) {
            if let Some(Entry::Pending(waiters)) =
                state.cache.insert(key, Entry::Resolved(result.clone()))
            {
                for tx in waiters {
                    // A dropped receiver just means the caller went away
                    let _ = tx.send(result.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Test window long enough that sibling loads reliably share a batch
    const TEST_DELAY: Duration = Duration::from_millis(10);

    /// Mock store: a fixed key → value table, recording every batch it sees
    struct MockStore {
        values: HashMap<String, i64>,
        calls: AtomicUsize,
        batches: std::sync::Mutex<Vec<Vec<String>>>,
        missing_is_error: bool,
    }

    impl MockStore {
        fn new(pairs: &[(&str, i64)]) -> Self {
            Self {
                values: pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), *v))
                    .collect(),
                calls: AtomicUsize::new(0),
                batches: std::sync::Mutex::new(Vec::new()),
                missing_is_error: false,
            }
        }

        /// Like the member-tier relation: a missing record is an error
        fn strict(pairs: &[(&str, i64)]) -> Self {
            Self {
                missing_is_error: true,
                ..Self::new(pairs)
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn batches(&self) -> Vec<Vec<String>> {
            self.batches.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl BatchFn<String, i64> for Arc<MockStore> {
        async fn fetch(&self, keys: &[String]) -> Result<Vec<ItemResult<i64>>, LoadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.batches.lock().unwrap().push(keys.to_vec());
            Ok(keys
                .iter()
                .map(|key| match self.values.get(key) {
                    Some(value) => Ok(Some(*value)),
                    None if self.missing_is_error => Err(LoadError::NotFound {
                        resource: "value",
                        id: key.clone(),
                    }),
                    None => Ok(None),
                })
                .collect())
        }
    }

    /// Store that always fails at the transport level
    struct FailingStore;

    #[async_trait]
    impl BatchFn<String, i64> for FailingStore {
        async fn fetch(&self, _keys: &[String]) -> Result<Vec<ItemResult<i64>>, LoadError> {
            Err(LoadError::Store(Arc::new(sqlx::Error::PoolClosed)))
        }
    }

    /// Store that returns fewer results than keys
    struct ShortStore;

    #[async_trait]
    impl BatchFn<String, i64> for ShortStore {
        async fn fetch(&self, keys: &[String]) -> Result<Vec<ItemResult<i64>>, LoadError> {
            Ok(keys.iter().skip(1).map(|_| Ok(Some(0))).collect())
        }
    }

    #[tokio::test]
    async fn sibling_loads_share_one_batch() {
        let store = Arc::new(MockStore::new(&[("a", 1), ("b", 2)]));
        let loader = Loader::with_delay(Arc::clone(&store), TEST_DELAY);

        let (a, b, a_again) = tokio::join!(
            loader.load("a".to_string()),
            loader.load("b".to_string()),
            loader.load("a".to_string()),
        );

        assert_eq!(a.unwrap(), Some(1));
        assert_eq!(b.unwrap(), Some(2));
        assert_eq!(a_again.unwrap(), Some(1));
        assert_eq!(store.calls(), 1);
        // Duplicates are deduplicated before the store sees the batch
        assert_eq!(store.batches(), vec![vec!["a".to_string(), "b".to_string()]]);
    }

    #[tokio::test]
    async fn resolved_keys_are_cached_for_the_request() {
        let store = Arc::new(MockStore::new(&[("a", 1)]));
        let loader = Loader::with_delay(Arc::clone(&store), TEST_DELAY);

        assert_eq!(loader.load("a".to_string()).await.unwrap(), Some(1));
        assert_eq!(loader.load("a".to_string()).await.unwrap(), Some(1));

        assert_eq!(store.calls(), 1);
    }

    #[tokio::test]
    async fn later_waves_flush_separately() {
        let store = Arc::new(MockStore::new(&[("a", 1), ("b", 2)]));
        let loader = Loader::with_delay(Arc::clone(&store), TEST_DELAY);

        assert_eq!(loader.load("a".to_string()).await.unwrap(), Some(1));
        assert_eq!(loader.load("b".to_string()).await.unwrap(), Some(2));

        assert_eq!(store.calls(), 2);
        assert_eq!(
            store.batches(),
            vec![vec!["a".to_string()], vec!["b".to_string()]]
        );
    }

    #[tokio::test]
    async fn separate_loaders_do_not_share_cache() {
        let store = Arc::new(MockStore::new(&[("a", 1)]));
        let first = Loader::with_delay(Arc::clone(&store), TEST_DELAY);
        let second = Loader::with_delay(Arc::clone(&store), TEST_DELAY);

        assert_eq!(first.load("a".to_string()).await.unwrap(), Some(1));
        assert_eq!(second.load("a".to_string()).await.unwrap(), Some(1));

        // Same key, two requests: two store calls
        assert_eq!(store.calls(), 2);
    }

    #[tokio::test]
    async fn concurrent_tasks_get_the_same_value_from_one_fetch() {
        let store = Arc::new(MockStore::new(&[("p1", 7)]));
        let loader = Loader::with_delay(Arc::clone(&store), TEST_DELAY);

        let first = tokio::spawn({
            let loader = loader.clone();
            async move { loader.load("p1".to_string()).await }
        });
        let second = tokio::spawn({
            let loader = loader.clone();
            async move { loader.load("p1".to_string()).await }
        });

        let (first, second) = tokio::join!(first, second);
        assert_eq!(first.unwrap().unwrap(), Some(7));
        assert_eq!(second.unwrap().unwrap(), Some(7));
        assert_eq!(store.calls(), 1);
        assert_eq!(store.batches(), vec![vec!["p1".to_string()]]);
    }

    #[tokio::test]
    async fn missing_keys_resolve_to_explicit_absence() {
        let store = Arc::new(MockStore::new(&[("a", 1)]));
        let loader = Loader::with_delay(Arc::clone(&store), TEST_DELAY);

        let results = loader
            .load_many(["a".to_string(), "missing".to_string()])
            .await;

        assert_eq!(results[0].clone().unwrap(), Some(1));
        // The caller for the missing key gets an explicit None, never a
        // neighboring key's value
        assert_eq!(results[1].clone().unwrap(), None);
        assert_eq!(store.calls(), 1);
    }

    #[tokio::test]
    async fn strict_relation_reports_missing_keys_as_errors() {
        let store = Arc::new(MockStore::strict(&[("u1", 10)]));
        let loader = Loader::with_delay(Arc::clone(&store), TEST_DELAY);

        let results = loader
            .load_many(["u1".to_string(), "u2".to_string(), "u1".to_string()])
            .await;

        assert_eq!(results[0].clone().unwrap(), Some(10));
        assert_matches!(
            results[1],
            Err(LoadError::NotFound { resource: "value", ref id }) if id == "u2"
        );
        assert_eq!(results[2].clone().unwrap(), Some(10));
        assert_eq!(store.calls(), 1);
        assert_eq!(
            store.batches(),
            vec![vec!["u1".to_string(), "u2".to_string()]]
        );
    }

    #[test_log::test(tokio::test)]
    async fn store_failure_fails_every_key_in_the_batch() {
        let loader = Loader::with_delay(FailingStore, TEST_DELAY);

        let results = loader
            .load_many(["a".to_string(), "b".to_string()])
            .await;

        assert_matches!(results[0], Err(LoadError::Store(_)));
        assert_matches!(results[1], Err(LoadError::Store(_)));
    }

    #[test_log::test(tokio::test)]
    async fn wrong_length_batch_fails_rather_than_misassociating() {
        let loader = Loader::with_delay(ShortStore, TEST_DELAY);

        let results = loader
            .load_many(["a".to_string(), "b".to_string()])
            .await;

        assert_matches!(
            results[0],
            Err(LoadError::LengthMismatch { expected: 2, got: 1 })
        );
        assert_matches!(
            results[1],
            Err(LoadError::LengthMismatch { expected: 2, got: 1 })
        );
    }
}
