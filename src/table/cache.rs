//! Memoized cohort loading.
//!
//! The recoded base table is computed once per source path and handed out
//! behind a read-only `Arc`. Invalidation is explicit: the cache has no way
//! to detect source-file changes, so the caller decides when a path must be
//! reloaded. Concurrent viewers share the same immutable table and can
//! never observe a partially built one.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::config::{AgeBinConfig, RecodeConfig};
use crate::error::Result;
use crate::table::{CohortTable, load_cohort};

/// Compute-once cache of analysis-ready tables keyed by source path
#[derive(Debug, Default)]
pub struct CohortCache {
    recode: RecodeConfig,
    bins: AgeBinConfig,
    tables: Mutex<HashMap<PathBuf, Arc<CohortTable>>>,
}

impl CohortCache {
    /// Create a cache using the given pipeline configuration
    #[must_use]
    pub fn new(recode: RecodeConfig, bins: AgeBinConfig) -> Self {
        Self {
            recode,
            bins,
            tables: Mutex::new(HashMap::new()),
        }
    }

    /// Get the cohort for a path, loading and memoizing it on first use
    ///
    /// # Errors
    /// Propagates the loading error kinds; a failed load is not cached, so a
    /// later call retries from scratch.
    pub fn get_or_load(&self, path: &Path) -> Result<Arc<CohortTable>> {
        if let Some(table) = self.tables.lock().unwrap().get(path) {
            return Ok(Arc::clone(table));
        }

        // Build outside the lock; loading is the expensive part and a
        // concurrent duplicate load is harmless (last insert wins).
        let table = Arc::new(load_cohort(path, &self.recode, &self.bins)?);
        self.tables
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), Arc::clone(&table));
        Ok(table)
    }

    /// Drop the memoized table for a path
    ///
    /// Returns whether a table was actually cached. Existing `Arc` handles
    /// stay valid; only the next `get_or_load` recomputes.
    pub fn invalidate(&self, path: &Path) -> bool {
        self.tables.lock().unwrap().remove(path).is_some()
    }
}
