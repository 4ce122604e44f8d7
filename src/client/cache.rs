use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;
use tokio::sync::OnceCell;

use crate::error::Result;

/// Results of list requests, keyed by endpoint path.
///
/// Concurrent readers of the same key share one in-flight fetch. A failed
/// fetch leaves the key empty so the next reader tries again.
#[derive(Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<String, Arc<OnceCell<Value>>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetch: F) -> Result<Value>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value>>,
    {
        let cell = {
            let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            entries.entry(key.to_string()).or_default().clone()
        };

        if cell.initialized() {
            tracing::trace!(key, "Query cache hit");
        }
        let value = cell.get_or_try_init(fetch).await?;
        Ok(value.clone())
    }

    /// Drops the cached result for `key`. A fetch already running for it
    /// completes into a detached entry, so the next read fetches again.
    pub fn invalidate(&self, key: &str) {
        let removed = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        if removed.is_some() {
            tracing::debug!(key, "Invalidated cached query");
        }
    }

    pub fn is_cached(&self, key: &str) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .is_some_and(|cell| cell.initialized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KeepsakeError;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_second_read_is_served_from_cache() {
        let cache = QueryCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = cache
                .get_or_fetch("/api/memories", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(json!([1, 2]))
                })
                .await
                .unwrap();
            assert_eq!(value, json!([1, 2]));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(cache.is_cached("/api/memories"));
    }

    #[tokio::test]
    async fn test_concurrent_reads_share_one_fetch() {
        let cache = Arc::new(QueryCache::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = cache.clone();
            let calls = calls.clone();
            handles.push(tokio::spawn(async move {
                cache
                    .get_or_fetch("/api/timeline", || async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(20)).await;
                        Ok(json!(["event"]))
                    })
                    .await
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), json!(["event"]));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let cache = QueryCache::new();
        cache
            .get_or_fetch("/api/love-notes", || async { Ok(json!([])) })
            .await
            .unwrap();

        cache.invalidate("/api/love-notes");
        assert!(!cache.is_cached("/api/love-notes"));

        let value = cache
            .get_or_fetch("/api/love-notes", || async { Ok(json!(["new"])) })
            .await
            .unwrap();
        assert_eq!(value, json!(["new"]));
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let cache = QueryCache::new();
        let err = cache
            .get_or_fetch("/api/memories", || async {
                Err(KeepsakeError::Api {
                    status: 500,
                    message: "Failed to fetch memories".to_string(),
                })
            })
            .await
            .unwrap_err();
        assert!(matches!(err, KeepsakeError::Api { status: 500, .. }));
        assert!(!cache.is_cached("/api/memories"));

        let value = cache
            .get_or_fetch("/api/memories", || async { Ok(json!([])) })
            .await
            .unwrap();
        assert_eq!(value, json!([]));
    }

    #[test]
    fn test_keys_are_independent() {
        let cache = QueryCache::new();
        cache.invalidate("/api/unknown");
        assert!(!cache.is_cached("/api/memories"));
    }
}
