//! Directory of JSON collection files

use crate::error::{Result, StoreError};
use fs2::FileExt;
use qbank_domain::{Collection, CollectionStore};
use serde_json::Value;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;
use walkdir::WalkDir;

const EXTENSION: &str = "json";
const LOCK_DIR: &str = ".locks";

/// Collections stored as `<root>/<name>.json`
///
/// # Examples
///
/// ```no_run
/// use qbank_domain::CollectionStore;
/// use qbank_store::JsonDirStore;
///
/// let store = JsonDirStore::new("questions");
/// for name in store.list_collections()? {
///     let collection = store.load_collection(&name)?;
///     println!("{}: {} questions", name, collection.len());
/// }
/// # Ok::<(), qbank_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    root: PathBuf,
    lock: bool,
}

impl JsonDirStore {
    /// Create a store rooted at `root`, with locking enabled
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            lock: true,
        }
    }

    /// Enable or disable advisory locking during updates
    pub fn with_locking(mut self, lock: bool) -> Self {
        self.lock = lock;
        self
    }

    /// Collection directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path of a collection
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, EXTENSION))
    }

    fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
        move |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Hold an exclusive lock on `<root>/.locks/<name>.lock`
    ///
    /// The lock is released when the returned file drops.
    fn acquire_lock(&self, name: &str) -> Result<File> {
        let lock_dir = self.root.join(LOCK_DIR);
        fs::create_dir_all(&lock_dir).map_err(Self::io_error(&lock_dir))?;

        let lock_path = lock_dir.join(format!("{}.lock", name));
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(Self::io_error(&lock_path))?;

        lock_file.lock_exclusive().map_err(|source| StoreError::Lock {
            name: name.to_string(),
            source,
        })?;
        Ok(lock_file)
    }

    /// Write `contents` next to `target`, then rename over it
    ///
    /// An existing target keeps its permissions.
    fn write_atomic(&self, target: &Path, contents: &str) -> Result<()> {
        let mut temp = NamedTempFile::new_in(&self.root).map_err(Self::io_error(&self.root))?;
        if let Ok(existing) = fs::metadata(target) {
            temp.as_file()
                .set_permissions(existing.permissions())
                .map_err(Self::io_error(target))?;
        }
        temp.write_all(contents.as_bytes())
            .map_err(Self::io_error(target))?;
        temp.as_file()
            .sync_all()
            .map_err(Self::io_error(target))?;
        temp.persist(target).map_err(|e| StoreError::Io {
            path: target.to_path_buf(),
            source: e.error,
        })?;
        Ok(())
    }
}

impl CollectionStore for JsonDirStore {
    type Error = StoreError;

    fn list_collections(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Err(StoreError::DirectoryNotFound(self.root.clone()));
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(EXTENSION)
            {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn load_collection(&self, name: &str) -> Result<Collection> {
        let path = self.path_of(name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(name.to_string()))
            }
            Err(e) => return Err(Self::io_error(&path)(e)),
        };

        let document: Value = serde_json::from_str(&content)
            .map_err(|source| StoreError::Json { path, source })?;
        Ok(Collection::from_document(name, document)?)
    }

    fn save_collection(&self, collection: &Collection) -> Result<()> {
        let path = self.path_of(collection.name());
        let json = serde_json::to_string_pretty(&collection.to_document()).map_err(|source| {
            StoreError::Json {
                path: path.clone(),
                source,
            }
        })?;
        self.write_atomic(&path, &json)?;
        debug!(collection = collection.name(), path = %path.display(), "Saved collection");
        Ok(())
    }

    fn update_collection<R, F>(&self, name: &str, apply: F) -> Result<R>
    where
        F: FnOnce(&mut Collection) -> R,
    {
        let _guard = if self.lock {
            Some(self.acquire_lock(name)?)
        } else {
            None
        };

        let mut collection = self.load_collection(name)?;
        let result = apply(&mut collection);
        self.save_collection(&collection)?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qbank_domain::{field, QuestionGroup, QuestionRecord};
    use tempfile::TempDir;

    #[test]
    fn test_path_of() {
        let store = JsonDirStore::new("/data/questions");
        assert_eq!(
            store.path_of("rust"),
            PathBuf::from("/data/questions/rust.json")
        );
    }

    #[test]
    fn test_lock_file_is_created() {
        let dir = TempDir::new().unwrap();
        let store = JsonDirStore::new(dir.path());
        let collection = Collection::new("go").with_group(
            QuestionGroup::OpenEnded,
            vec![QuestionRecord::new().with(field::ID, "g1")],
        );
        store.save_collection(&collection).unwrap();

        let count = store.update_collection("go", |c| c.len()).unwrap();
        assert_eq!(count, 1);
        assert!(dir.path().join(".locks").join("go.lock").exists());
    }

    #[test]
    fn test_unlocked_update_skips_lock_dir() {
        let dir = TempDir::new().unwrap();
        let store = JsonDirStore::new(dir.path()).with_locking(false);
        store.save_collection(&Collection::new("go")).unwrap();

        store.update_collection("go", |_| ()).unwrap();
        assert!(!dir.path().join(".locks").exists());
    }
}
