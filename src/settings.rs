//! Read-through cache over the `settings` table.
//!
//! Readers may see values up to `ttl` old. Every write made through
//! [`SettingsCache::set`] invalidates the snapshot; code writing settings
//! through the store directly must call [`SettingsCache::invalidate`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::Result;
use crate::store::Store;
use crate::types::Setting;

pub const SECRET_KEY: &str = "secret_key";
pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

struct Snapshot {
    loaded_at: Instant,
    values: Arc<HashMap<String, String>>,
}

pub struct SettingsCache {
    store: Arc<dyn Store>,
    ttl: Duration,
    snapshot: Mutex<Option<Snapshot>>,
}

impl SettingsCache {
    pub fn new(store: Arc<dyn Store>, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            snapshot: Mutex::new(None),
        }
    }

    /// All settings, served from the snapshot while it is fresh.
    pub fn all(&self) -> Result<Arc<HashMap<String, String>>> {
        let mut guard = self.snapshot.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(snapshot) = guard.as_ref() {
            if snapshot.loaded_at.elapsed() < self.ttl {
                return Ok(Arc::clone(&snapshot.values));
            }
        }

        let values: HashMap<String, String> = self
            .store
            .list_settings()?
            .into_iter()
            .map(|s| (s.key, s.value))
            .collect();
        let values = Arc::new(values);
        debug!(count = values.len(), "refreshed settings cache");

        *guard = Some(Snapshot {
            loaded_at: Instant::now(),
            values: Arc::clone(&values),
        });
        Ok(values)
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.all()?.get(key).cloned())
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.store.put_setting(&Setting {
            key: key.to_string(),
            value: value.to_string(),
        })?;
        self.invalidate();
        Ok(())
    }

    pub fn invalidate(&self) {
        *self.snapshot.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// Returns the signing secret, generating and storing one on first use.
    /// Concurrent first calls converge on whichever value was stored first.
    pub fn signing_secret(&self) -> Result<String> {
        if let Some(secret) = self.get(SECRET_KEY)? {
            return Ok(secret);
        }

        let generated = Setting {
            key: SECRET_KEY.to_string(),
            value: Uuid::new_v4().to_string(),
        };
        if self.store.insert_setting_if_absent(&generated)? {
            info!("generated signing secret");
        }
        self.invalidate();

        Ok(self
            .store
            .get_setting(SECRET_KEY)?
            .unwrap_or(generated.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteStore;
    use tempfile::TempDir;

    fn cache(ttl: Duration) -> (TempDir, Arc<dyn Store>, SettingsCache) {
        let temp = TempDir::new().unwrap();
        let store = SqliteStore::new(temp.path().join("test.db")).unwrap();
        store.initialize().unwrap();
        let store: Arc<dyn Store> = Arc::new(store);
        let cache = SettingsCache::new(Arc::clone(&store), ttl);
        (temp, store, cache)
    }

    #[test]
    fn test_set_invalidates_snapshot() {
        let (_temp, _store, cache) = cache(Duration::from_secs(3600));

        assert_eq!(cache.get("username").unwrap(), None);
        cache.set("username", "owner").unwrap();
        assert_eq!(cache.get("username").unwrap().as_deref(), Some("owner"));
    }

    #[test]
    fn test_external_writes_are_stale_until_invalidated() {
        let (_temp, store, cache) = cache(Duration::from_secs(3600));
        assert_eq!(cache.get("theme").unwrap(), None);

        store
            .put_setting(&Setting {
                key: "theme".to_string(),
                value: "dark".to_string(),
            })
            .unwrap();
        assert_eq!(cache.get("theme").unwrap(), None);

        cache.invalidate();
        assert_eq!(cache.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_zero_ttl_always_reloads() {
        let (_temp, store, cache) = cache(Duration::ZERO);
        assert_eq!(cache.get("theme").unwrap(), None);

        store
            .put_setting(&Setting {
                key: "theme".to_string(),
                value: "light".to_string(),
            })
            .unwrap();
        assert_eq!(cache.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_signing_secret_is_stable() {
        let (_temp, store, cache) = cache(DEFAULT_TTL);

        let first = cache.signing_secret().unwrap();
        let second = cache.signing_secret().unwrap();
        assert_eq!(first, second);
        assert_eq!(store.get_setting(SECRET_KEY).unwrap(), Some(first));
    }
}
