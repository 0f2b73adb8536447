use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Local file system storage. Paths are resolved against `base_path`;
/// absolute paths are used as given.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn current_dir() -> Self {
        Self::new(".".to_string())
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        tracing::debug!("Reading {}", full_path.display());
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_string_lossy().into_owned());

        tokio_test::block_on(storage.write_file("nested/deeper/dishes.json", b"[]")).unwrap();
        let data = tokio_test::block_on(storage.read_file("nested/deeper/dishes.json")).unwrap();

        assert_eq!(data, b"[]");
    }

    #[test]
    fn test_absolute_paths_ignore_base() {
        let temp_dir = TempDir::new().unwrap();
        let absolute = temp_dir.path().join("dishes.csv");
        std::fs::write(&absolute, "id,name\n").unwrap();

        let storage = LocalStorage::new("/definitely/not/here".to_string());
        let data =
            tokio_test::block_on(storage.read_file(absolute.to_str().unwrap())).unwrap();

        assert_eq!(data, b"id,name\n");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_string_lossy().into_owned());

        let err = tokio_test::block_on(storage.read_file("nope.json")).unwrap_err();
        assert!(matches!(err, crate::utils::error::DishError::IoError(_)));
    }
}
