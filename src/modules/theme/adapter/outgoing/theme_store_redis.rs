use async_trait::async_trait;
use chrono::Utc;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;

use crate::theme::application::ports::outgoing::{
    StoredTheme, ThemePreferenceStore, ThemeStoreError,
};
use crate::theme::domain::{ThemePreference, VisitorId};

/// Redis-backed implementation of `ThemePreferenceStore`.
///
/// ## Redis data model
///
/// ```text
/// portfolio:{visitor_id}:theme -> {"theme":"dark","updatedAt":"..."}
/// ```
///
/// Every write sets the key's TTL afresh, so preferences of visitors who
/// stop coming back expire on their own. Toggling is a single Lua script
/// (`GET` + flip + `SET EX`), atomic on the server.
#[derive(Clone)]
pub struct RedisThemeStore {
    pool: Arc<Pool>,
    ttl_secs: u64,
}

/// KEYS[1] preference key; ARGV fallback theme, timestamp, ttl seconds.
/// Accepts the bare value or a JSON record; anything else counts as missing.
const TOGGLE_SCRIPT: &str = r#"
local current = ARGV[1]
local raw = redis.call('GET', KEYS[1])
if raw == 'light' or raw == 'dark' then
  current = raw
elseif raw then
  local ok, record = pcall(cjson.decode, raw)
  if ok and type(record) == 'table' and (record.theme == 'light' or record.theme == 'dark') then
    current = record.theme
  end
end
local next = 'dark'
if current == 'dark' then next = 'light' end
redis.call('SET', KEYS[1], cjson.encode({theme = next, updatedAt = ARGV[2]}), 'EX', ARGV[3])
return next
"#;

impl RedisThemeStore {
    pub fn new(pool: Arc<Pool>, ttl_secs: u64) -> Self {
        Self {
            pool,
            ttl_secs: ttl_secs.max(1),
        }
    }

    fn key(visitor: &VisitorId) -> String {
        format!("portfolio:{visitor}:{}", ThemePreference::STORAGE_KEY)
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, ThemeStoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| ThemeStoreError::StorageError(format!("Pool error: {}", e)))
    }

    fn decode(raw: &str) -> Result<ThemePreference, ThemeStoreError> {
        // Older entries hold the bare value rather than a record.
        if let Ok(theme) = raw.parse::<ThemePreference>() {
            return Ok(theme);
        }
        serde_json::from_str::<StoredTheme>(raw)
            .map(|stored| stored.theme)
            .map_err(|_| ThemeStoreError::CorruptValue(raw.to_string()))
    }
}

#[async_trait]
impl ThemePreferenceStore for RedisThemeStore {
    async fn read(&self, visitor: &VisitorId) -> Result<Option<ThemePreference>, ThemeStoreError> {
        let mut conn = self.get_conn().await?;

        let raw: Option<String> = conn
            .get(Self::key(visitor))
            .await
            .map_err(|e| ThemeStoreError::StorageError(e.to_string()))?;

        raw.as_deref().map(Self::decode).transpose()
    }

    async fn write(
        &self,
        visitor: &VisitorId,
        theme: ThemePreference,
    ) -> Result<(), ThemeStoreError> {
        let record = serde_json::to_string(&StoredTheme::now(theme))
            .map_err(|e| ThemeStoreError::StorageError(e.to_string()))?;

        let mut conn = self.get_conn().await?;
        let _: () = conn
            .set_ex(Self::key(visitor), record, self.ttl_secs)
            .await
            .map_err(|e| ThemeStoreError::StorageError(e.to_string()))?;

        Ok(())
    }

    async fn toggle(
        &self,
        visitor: &VisitorId,
        fallback: ThemePreference,
    ) -> Result<ThemePreference, ThemeStoreError> {
        let mut conn = self.get_conn().await?;

        let next: String = deadpool_redis::redis::cmd("EVAL")
            .arg(TOGGLE_SCRIPT)
            .arg(1)
            .arg(Self::key(visitor))
            .arg(fallback.as_str())
            .arg(Utc::now().to_rfc3339())
            .arg(self.ttl_secs)
            .query_async(&mut conn)
            .await
            .map_err(|e| ThemeStoreError::StorageError(e.to_string()))?;

        Self::decode(&next)
    }

    async fn ping(&self) -> Result<(), ThemeStoreError> {
        let mut conn = self.get_conn().await?;

        deadpool_redis::redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| ThemeStoreError::StorageError(e.to_string()))
    }
}
