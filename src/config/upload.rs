use crate::errors::ServiceError;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

/// Stores uploaded product photos on disk under a configured directory.
/// Files are renamed to a UUID so client-supplied names never hit the
/// filesystem; only the extension is kept.
pub struct UploadStorage {
    dir: PathBuf,
}

impl UploadStorage {
    pub fn new(dir: &str) -> std::io::Result<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: PathBuf::from(dir),
        })
    }

    /// Writes the bytes and returns the public path (`/uploads/<name>`)
    /// to store on the product row.
    pub async fn save(&self, original_name: &str, data: &[u8]) -> Result<String, ServiceError> {
        let ext = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("bin");

        let file_name = format!("{}.{}", Uuid::new_v4(), ext);
        let dest = self.dir.join(&file_name);

        tokio::fs::write(&dest, data)
            .await
            .map_err(|err| ServiceError::Internal(format!("Failed to store upload: {err}")))?;

        info!("Stored upload {} ({} bytes)", dest.display(), data.len());
        Ok(format!("/uploads/{file_name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_keeps_extension_and_returns_public_path() {
        let tmp = std::env::temp_dir().join(format!("shop-api-test-{}", Uuid::new_v4()));
        let storage = UploadStorage::new(tmp.to_str().unwrap()).unwrap();

        let path = storage.save("camera.png", b"not-really-a-png").await.unwrap();
        assert!(path.starts_with("/uploads/"));
        assert!(path.ends_with(".png"));

        let stored = tmp.join(path.trim_start_matches("/uploads/"));
        assert_eq!(tokio::fs::read(stored).await.unwrap(), b"not-really-a-png");

        tokio::fs::remove_dir_all(tmp).await.unwrap();
    }
}
