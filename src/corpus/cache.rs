// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory cache of corpus file contents.
//!
//! Benchmarks run the builder over the same multi-megabyte files again and
//! again; re-reading them would swamp the measurement. The cache is an
//! ordinary value owned by whoever runs a suite: it fills on first use and is
//! cleared explicitly between suites, so separate runs never share state.

use anyhow::{Context, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// File contents keyed by path, shared read-only once loaded.
#[derive(Debug, Default)]
pub struct CorpusCache {
    entries: RwLock<HashMap<PathBuf, Arc<[u8]>>>,
}

impl CorpusCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached contents of `path`, reading the file on first use.
    pub fn get_or_load(&self, path: &Path) -> Result<Arc<[u8]>> {
        if let Some(bytes) = self.get(path) {
            return Ok(bytes);
        }

        // Read outside the lock; a racing loader of the same file just loses
        let bytes: Arc<[u8]> = load_file(path)?.into();
        let mut entries = self.entries.write();
        let entry = entries.entry(path.to_path_buf()).or_insert(bytes);
        Ok(Arc::clone(entry))
    }

    /// Cached contents of `path`, if already loaded.
    pub fn get(&self, path: &Path) -> Option<Arc<[u8]>> {
        self.entries.read().get(path).cloned()
    }

    /// Drop every cached file.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Total bytes held across all cached files.
    pub fn total_bytes(&self) -> usize {
        self.entries.read().values().map(|b| b.len()).sum()
    }
}

/// Read a whole corpus file.
pub fn load_file(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    debug!(path = %path.display(), bytes = bytes.len(), "loaded corpus file");
    Ok(bytes)
}
