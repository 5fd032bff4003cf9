use crate::core::repository::{LoadReport, Repository};
use crate::domain::ports::BoatStore;
use crate::utils::error::Result;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Boats kept in a single flat file, one row per line.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BoatStore for FileStore {
    /// A file that cannot be opened or read from the start gives an empty
    /// marina, not an error.
    fn load(&self, capacity: usize) -> Result<(Repository, LoadReport)> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!(
                    "Failed to open '{}' for reading ({}); starting with an empty marina",
                    self.path.display(),
                    e
                );
                return Ok((Repository::new(capacity), LoadReport::default()));
            }
        };

        tracing::debug!("Loading boats from '{}'", self.path.display());
        Repository::load_all(file, capacity)
    }

    fn save(&self, repository: &Repository) -> Result<()> {
        // 整份內容先寫入緩衝區，避免寫出半行
        let mut buffer = Vec::new();
        repository.save_all(&mut buffer)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, buffer)?;
        tracing::info!(
            "Saved {} boats to '{}'",
            repository.len(),
            self.path.display()
        );
        Ok(())
    }
}
