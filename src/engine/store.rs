//! Configuration loading with modification-time keyed caching.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use tracing::{debug, error, warn};

use crate::config::{RULES_PATH, RuleConfig};
use crate::error::{HookError, Result};

/// One parsed configuration, valid while the file's mtime is unchanged.
struct CacheEntry {
    mtime: SystemTime,
    config: Arc<RuleConfig>,
}

/// Loads and memoizes the rule file. The cache entry is owned by this store
/// alone and replaced wholesale; it is never partially updated.
pub struct ConfigStore {
    path: PathBuf,
    cache: Option<CacheEntry>,
}

impl ConfigStore {
    #[must_use]
    pub fn new(project_root: &Path) -> Self {
        Self {
            path: project_root.join(RULES_PATH),
            cache: None,
        }
    }

    /// Path of the configuration file this store reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the rule configuration, reusing the cached parse while the
    /// file's modification time is unchanged.
    ///
    /// A missing file yields the default empty configuration with a warning;
    /// a malformed file yields the same default with an error. Neither case
    /// is cached, so fixing the file takes effect on the next call without
    /// an explicit [`invalidate`](Self::invalidate).
    pub fn load(&mut self) -> Arc<RuleConfig> {
        if !self.path.exists() {
            warn!(path = %self.path.display(), "skill rules not found, using empty config");
            return Arc::new(RuleConfig::default());
        }

        let mtime = std::fs::metadata(&self.path)
            .and_then(|meta| meta.modified())
            .ok();

        if let (Some(mtime), Some(entry)) = (mtime, self.cache.as_ref()) {
            if entry.mtime == mtime {
                debug!(path = %self.path.display(), "skill rules cache hit");
                return Arc::clone(&entry.config);
            }
        }

        let config = match self.read_and_parse() {
            Ok(config) => Arc::new(config),
            Err(err) => {
                error!(path = %self.path.display(), %err, "failed to load skill rules, using empty config");
                return Arc::new(RuleConfig::default());
            }
        };

        if let Some(mtime) = mtime {
            self.cache = Some(CacheEntry {
                mtime,
                config: Arc::clone(&config),
            });
        }

        config
    }

    /// Clear the cache entry; the next `load()` unconditionally re-reads.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    fn read_and_parse(&self) -> Result<RuleConfig> {
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|err| HookError::Config(format!("read {}: {err}", self.path.display())))?;
        let config = serde_json::from_str(&raw)
            .map_err(|err| HookError::Config(format!("parse {}: {err}", self.path.display())))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn store_with_rules(content: Option<&str>) -> (TempDir, ConfigStore) {
        let dir = TempDir::new().unwrap();
        if let Some(content) = content {
            let skills_dir = dir.path().join(".claude/skills");
            fs::create_dir_all(&skills_dir).unwrap();
            fs::write(skills_dir.join("skill-rules.json"), content).unwrap();
        }
        let store = ConfigStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn missing_file_yields_default() {
        let (_dir, mut store) = store_with_rules(None);
        let config = store.load();
        assert_eq!(config.version, "1.0");
        assert!(config.skills.is_empty());
    }

    #[test]
    fn malformed_file_yields_default() {
        let (_dir, mut store) = store_with_rules(Some("{ not json"));
        let config = store.load();
        assert!(config.skills.is_empty());
        // Not cached: a later load still re-reads the broken file.
        let again = store.load();
        assert!(again.skills.is_empty());
    }

    #[test]
    fn valid_file_parses() {
        let (_dir, mut store) = store_with_rules(Some(
            r#"{"version": "2.1", "skills": {"a": {"priority": "high"}}}"#,
        ));
        let config = store.load();
        assert_eq!(config.version, "2.1");
        assert!(config.skills.contains_key("a"));
    }

    #[test]
    fn unchanged_mtime_reuses_cached_parse() {
        let (_dir, mut store) = store_with_rules(Some(r#"{"version": "1.0", "skills": {}}"#));
        let first = store.load();
        let second = store.load();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn invalidate_forces_reparse() {
        let (_dir, mut store) = store_with_rules(Some(r#"{"version": "1.0", "skills": {}}"#));
        let first = store.load();
        store.invalidate();
        let second = store.load();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first.version, second.version);
    }
}
