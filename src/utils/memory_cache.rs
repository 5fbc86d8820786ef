//! In-memory result cache

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::registry::CalculationOutcome;
use crate::traits::*;
use crate::types::*;

#[derive(Debug, Clone)]
struct CacheEntry {
    outcome: CalculationOutcome,
    expires_at: DateTime<Utc>,
}

/// In-memory cache for tests and single-process use
///
/// Clones share the same underlying map.
#[derive(Debug, Clone)]
pub struct MemoryResultCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl MemoryResultCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored entries, including expired ones not yet dropped
    pub fn len(&self) -> CalcResult<usize> {
        Ok(self.read_entries()?.len())
    }

    pub fn is_empty(&self) -> CalcResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Remove every expired entry; returns how many were dropped
    pub fn purge_expired(&self) -> CalcResult<usize> {
        let now = Utc::now();
        let mut entries = self.write_entries()?;
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        Ok(before - entries.len())
    }

    fn read_entries(
        &self,
    ) -> CalcResult<std::sync::RwLockReadGuard<'_, HashMap<String, CacheEntry>>> {
        self.entries
            .read()
            .map_err(|_| CalcError::Cache("cache lock poisoned".to_string()))
    }

    fn write_entries(
        &self,
    ) -> CalcResult<std::sync::RwLockWriteGuard<'_, HashMap<String, CacheEntry>>> {
        self.entries
            .write()
            .map_err(|_| CalcError::Cache("cache lock poisoned".to_string()))
    }
}

impl Default for MemoryResultCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResultCache for MemoryResultCache {
    async fn get(&self, key: &str) -> CalcResult<Option<CalculationOutcome>> {
        let now = Utc::now();

        let expired = match self.read_entries()?.get(key) {
            Some(entry) if entry.expires_at > now => return Ok(Some(entry.outcome.clone())),
            Some(_) => true,
            None => false,
        };

        if expired {
            self.write_entries()?.remove(key);
        }

        Ok(None)
    }

    async fn put(
        &mut self,
        key: &str,
        outcome: &CalculationOutcome,
        ttl: chrono::Duration,
    ) -> CalcResult<()> {
        let now = Utc::now();
        let expires_at = now.checked_add_signed(ttl).ok_or_else(|| {
            CalcError::Cache(format!(
                "ttl of {} seconds overflows the expiry time",
                ttl.num_seconds()
            ))
        })?;

        let mut entries = self.write_entries()?;
        // stale keys that are never read again would otherwise stay forever
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            key.to_string(),
            CacheEntry {
                outcome: outcome.clone(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn invalidate(&mut self, key: &str) -> CalcResult<bool> {
        Ok(self.write_entries()?.remove(key).is_some())
    }

    async fn clear(&mut self) -> CalcResult<()> {
        self.write_entries()?.clear();
        Ok(())
    }
}
