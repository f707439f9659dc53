use crate::core::Storage;
use crate::utils::error::{ReportError, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads and writes the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn open_read(&self, path: &Path) -> Result<Box<dyn BufRead>> {
        let file = File::open(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => ReportError::InputNotFoundError {
                path: path.display().to_string(),
            },
            std::io::ErrorKind::PermissionDenied => ReportError::NotReadableError {
                path: path.display().to_string(),
            },
            _ => ReportError::ReadError {
                path: path.display().to_string(),
                source,
            },
        })?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let write_error = |source| ReportError::WriteError {
            path: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        fs::write(path, data).map_err(write_error)
    }
}
