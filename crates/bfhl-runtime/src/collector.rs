use bfhl_types::{CollectorError, EncodedFile};
use std::path::Path;
use tracing::debug;

/// Read a file and keep only its base64 text.
pub async fn read_encoded_file(path: &Path) -> Result<EncodedFile, CollectorError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| CollectorError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), bytes = bytes.len(), "encoded file for upload");
    Ok(EncodedFile::from_bytes(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn encodes_file_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.txt");
        std::fs::write(&path, b"hello").unwrap();

        let encoded = read_encoded_file(&path).await.unwrap();
        assert_eq!(encoded.as_str(), "aGVsbG8=");
        assert_eq!(encoded.decoded_len(), 5);
    }

    #[tokio::test]
    async fn missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.bin");

        let err = read_encoded_file(&path).await.unwrap_err();
        let CollectorError::FileRead { path: reported, .. } = &err;
        assert_eq!(reported, &path);
        assert_eq!(err.user_message(), "Could not read file.");
    }
}
