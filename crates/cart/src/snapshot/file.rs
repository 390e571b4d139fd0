//! File-backed snapshot store.
//!
//! Stores one JSON document per key under a root directory:
//!
//! ```text
//! <root>/
//!     <sanitized-key>.json
//! ```
//!
//! Writes go through a sibling temp file followed by a rename, so a crash
//! mid-write never truncates the previous snapshot.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{SnapshotError, SnapshotStore};

/// Snapshot store persisting each key as a JSON document on disk.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    root: PathBuf,
}

impl FileSnapshotStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory does not need to exist yet; it is created lazily on the
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory of this store.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_key(key)))
    }
}

/// Map a namespaced key (e.g. `shopcart:cart`) to a safe file stem.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn get(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SnapshotError::Io(e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SnapshotError> {
        tokio::fs::create_dir_all(&self.root).await?;

        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, &path).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("shopcart:cart"), "shopcart_cart");
        assert_eq!(sanitize_key("plain-key_1"), "plain-key_1");
        assert_eq!(sanitize_key("a/b\\c"), "a_b_c");
    }

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileSnapshotStore::new(dir.path());

        let value = store.get("shopcart:cart").await.expect("get");
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_set_then_get_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileSnapshotStore::new(dir.path());

        store.set("shopcart:cart", "[{\"id\":1}]").await.expect("set");
        let value = store.get("shopcart:cart").await.expect("get");
        assert_eq!(value.as_deref(), Some("[{\"id\":1}]"));
    }

    #[tokio::test]
    async fn test_set_overwrites_previous_value() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileSnapshotStore::new(dir.path());

        store.set("shopcart:cart", "old").await.expect("set");
        store.set("shopcart:cart", "new").await.expect("set");

        let value = store.get("shopcart:cart").await.expect("get");
        assert_eq!(value.as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_creates_root_lazily() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("data").join("snapshots");
        let store = FileSnapshotStore::new(&nested);

        store.set("k", "v").await.expect("set");
        assert!(nested.exists());
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileSnapshotStore::new(dir.path());

        store.set("shopcart:cart", "value").await.expect("set");

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .expect("read_dir")
            .map(|e| e.expect("entry").file_name().into_string().expect("utf8"))
            .collect();
        assert_eq!(names, vec!["shopcart_cart.json".to_string()]);
    }
}
