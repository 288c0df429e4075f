use crate::core::OutputContainer;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory output region. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryContainer {
    contents: Arc<Mutex<String>>,
}

impl MemoryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        match self.contents.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl OutputContainer for MemoryContainer {
    fn replace_contents(&self, html: &str) -> Result<()> {
        let mut guard = match self.contents.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = html.to_string();
        Ok(())
    }
}

/// Output region persisted as an HTML fragment file, overwritten on every render.
#[derive(Debug, Clone)]
pub struct FileContainer {
    path: PathBuf,
}

impl FileContainer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputContainer for FileContainer {
    fn replace_contents(&self, html: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, html)?;
        tracing::debug!("Wrote {} bytes to {}", html.len(), self.path.display());
        Ok(())
    }
}
