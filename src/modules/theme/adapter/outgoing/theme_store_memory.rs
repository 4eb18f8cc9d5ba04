use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::theme::application::ports::outgoing::{
    StoredTheme, ThemePreferenceStore, ThemeStoreError,
};
use crate::theme::domain::{ThemePreference, VisitorId};

/// Process-local theme storage, used when no Redis URL is configured.
/// Preferences are lost on restart.
///
/// Bounded like the Redis store: an entry expires `ttl` after its last
/// write, and once `capacity` visitors are held, expired entries are purged
/// and then the least recently written one makes room.
#[derive(Debug, Clone)]
pub struct InMemoryThemeStore {
    entries: Arc<RwLock<HashMap<VisitorId, StoredTheme>>>,
    capacity: usize,
    ttl: Duration,
}

impl Default for InMemoryThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryThemeStore {
    pub const DEFAULT_CAPACITY: usize = 10_000;
    pub const DEFAULT_TTL_SECS: u64 = 60 * 60 * 24 * 365;

    pub fn new() -> Self {
        Self::with_limits(Self::DEFAULT_CAPACITY, Self::DEFAULT_TTL_SECS)
    }

    pub fn with_limits(capacity: usize, ttl_secs: u64) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            capacity: capacity.max(1),
            ttl: i64::try_from(ttl_secs)
                .ok()
                .and_then(Duration::try_seconds)
                .unwrap_or(Duration::MAX),
        }
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    fn is_live(&self, stored: &StoredTheme, now: DateTime<Utc>) -> bool {
        now - stored.updated_at < self.ttl
    }

    fn insert(
        &self,
        entries: &mut HashMap<VisitorId, StoredTheme>,
        visitor: VisitorId,
        theme: ThemePreference,
    ) {
        let now = Utc::now();

        if !entries.contains_key(&visitor) && entries.len() >= self.capacity {
            entries.retain(|_, stored| self.is_live(stored, now));

            if entries.len() >= self.capacity {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, stored)| stored.updated_at)
                    .map(|(id, _)| *id);
                if let Some(oldest) = oldest {
                    entries.remove(&oldest);
                    debug!(visitor = %oldest, "Evicted theme preference");
                }
            }
        }

        entries.insert(
            visitor,
            StoredTheme {
                theme,
                updated_at: now,
            },
        );
    }
}

#[async_trait]
impl ThemePreferenceStore for InMemoryThemeStore {
    async fn read(&self, visitor: &VisitorId) -> Result<Option<ThemePreference>, ThemeStoreError> {
        let now = Utc::now();
        Ok(self
            .entries
            .read()
            .await
            .get(visitor)
            .filter(|stored| self.is_live(stored, now))
            .map(|stored| stored.theme))
    }

    async fn write(
        &self,
        visitor: &VisitorId,
        theme: ThemePreference,
    ) -> Result<(), ThemeStoreError> {
        let mut entries = self.entries.write().await;
        self.insert(&mut entries, *visitor, theme);
        Ok(())
    }

    async fn toggle(
        &self,
        visitor: &VisitorId,
        fallback: ThemePreference,
    ) -> Result<ThemePreference, ThemeStoreError> {
        let mut entries = self.entries.write().await;
        let now = Utc::now();

        let current = entries
            .get(visitor)
            .filter(|stored| self.is_live(stored, now))
            .map_or(fallback, |stored| stored.theme);
        let next = current.toggle();

        self.insert(&mut entries, *visitor, next);
        Ok(next)
    }

    async fn ping(&self) -> Result<(), ThemeStoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn read_unknown_visitor_is_none() {
        let store = InMemoryThemeStore::new();

        assert_eq!(store.read(&VisitorId::new()).await, Ok(None));
    }

    #[tokio::test]
    async fn write_overwrites_previous_value() {
        let store = InMemoryThemeStore::new();
        let visitor = VisitorId::new();

        store.write(&visitor, ThemePreference::Dark).await.unwrap();
        store.write(&visitor, ThemePreference::Light).await.unwrap();

        assert_eq!(
            store.read(&visitor).await,
            Ok(Some(ThemePreference::Light))
        );
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn visitors_are_isolated() {
        let store = InMemoryThemeStore::new();
        let first = VisitorId::new();
        let second = VisitorId::new();

        store.write(&first, ThemePreference::Light).await.unwrap();

        assert_eq!(store.read(&second).await, Ok(None));
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let store = InMemoryThemeStore::new();
        let clone = store.clone();
        let visitor = VisitorId::new();

        clone.write(&visitor, ThemePreference::Dark).await.unwrap();

        assert_eq!(store.read(&visitor).await, Ok(Some(ThemePreference::Dark)));
    }

    #[tokio::test]
    async fn full_store_evicts_least_recently_written() {
        let store = InMemoryThemeStore::with_limits(2, 3600);
        let (first, second, third) = (VisitorId::new(), VisitorId::new(), VisitorId::new());

        store.write(&first, ThemePreference::Dark).await.unwrap();
        store.write(&second, ThemePreference::Dark).await.unwrap();
        // rewriting keeps `first` fresh
        store.write(&first, ThemePreference::Light).await.unwrap();
        store.write(&third, ThemePreference::Dark).await.unwrap();

        assert_eq!(store.len().await, 2);
        assert_eq!(store.read(&second).await, Ok(None));
        assert_eq!(store.read(&first).await, Ok(Some(ThemePreference::Light)));
        assert_eq!(store.read(&third).await, Ok(Some(ThemePreference::Dark)));
    }

    #[tokio::test]
    async fn expired_entries_read_as_missing_and_are_purged() {
        let store = InMemoryThemeStore::with_limits(1, 0);
        let (first, second) = (VisitorId::new(), VisitorId::new());

        store.write(&first, ThemePreference::Light).await.unwrap();
        assert_eq!(store.read(&first).await, Ok(None));

        store.write(&second, ThemePreference::Dark).await.unwrap();
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn toggle_starts_from_fallback_when_nothing_stored() {
        let store = InMemoryThemeStore::new();
        let visitor = VisitorId::new();

        assert_eq!(
            store.toggle(&visitor, ThemePreference::Dark).await,
            Ok(ThemePreference::Light)
        );
        // the stored value wins over the fallback from here on
        assert_eq!(
            store.toggle(&visitor, ThemePreference::Light).await,
            Ok(ThemePreference::Dark)
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_toggles_are_never_lost() {
        let store = InMemoryThemeStore::new();
        let visitor = VisitorId::new();
        store.write(&visitor, ThemePreference::Dark).await.unwrap();

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.toggle(&visitor, ThemePreference::Dark).await })
            })
            .collect();
        let mut results = Vec::new();
        for handle in handles {
            results.push(handle.await.unwrap().unwrap());
        }

        assert_eq!(
            results.iter().filter(|t| **t == ThemePreference::Light).count(),
            5
        );
        assert_eq!(store.read(&visitor).await, Ok(Some(ThemePreference::Dark)));
    }
}
