use super::DocumentStore;
use crate::error::{BurnError, Result};
use crate::id::DocId;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use uuid::Uuid;

/// File-backed store: one `doc-{id}.json` file per document.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the file backing `id`, whether or not it exists.
    pub fn doc_path(&self, id: &DocId) -> PathBuf {
        self.root.join(format!("doc-{}.json", id))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(BurnError::Io)?;
        }
        Ok(())
    }
}

impl DocumentStore for FileStore {
    fn get(&self, key: &DocId) -> Result<Option<Vec<u8>>> {
        match fs::read(self.doc_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BurnError::Io(e)),
        }
    }

    fn put(&self, key: &DocId, value: &[u8]) -> Result<()> {
        self.ensure_dir()?;

        // Write to a temp file then rename, so readers never see a partial record.
        let tmp_path = self.root.join(format!(".doc-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(BurnError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, self.doc_path(key)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(BurnError::Io(e));
        }

        Ok(())
    }

    fn delete(&self, key: &DocId) -> Result<()> {
        match fs::remove_file(self.doc_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(BurnError::Io(e)),
        }
    }

    fn contains(&self, key: &DocId) -> Result<bool> {
        Ok(self.doc_path(key).exists())
    }
}
