//! Banner image storage on the server filesystem.
//!
//! Uploaded bytes arrive through the `upload_banner_image` server function,
//! are validated here, and are written under the uploads directory with a
//! millisecond-timestamp prefix on a sanitized file name. The returned URL
//! path is what the web server's static file route exposes.

use serde::{Deserialize, Serialize};

/// Largest accepted banner image.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Strip a client-supplied file name down to `[A-Za-z0-9.]`, mapping every
/// other character to `_`. Never returns a name without a usable stem.
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' { c } else { '_' })
        .collect();

    if cleaned.chars().all(|c| c == '.' || c == '_') {
        "image".to_string()
    } else {
        cleaned
    }
}

/// Payload handed to the upload server function by the admin banner form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadPayload {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

#[cfg(feature = "server")]
pub use server::{store_banner_image, StorageError};

#[cfg(feature = "server")]
mod server {
    use std::path::PathBuf;

    use thiserror::Error;

    use super::{sanitize_file_name, MAX_IMAGE_BYTES};

    #[derive(Debug, Error)]
    pub enum StorageError {
        #[error("only image uploads are accepted (got {0})")]
        UnsupportedType(String),
        #[error("image exceeds the {MAX_IMAGE_BYTES} byte limit")]
        TooLarge,
        #[error("failed to store image: {0}")]
        Io(#[from] std::io::Error),
    }

    fn upload_dir() -> PathBuf {
        std::env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"))
    }

    fn public_base() -> String {
        std::env::var("PUBLIC_UPLOAD_BASE").unwrap_or_else(|_| "/uploads".to_string())
    }

    /// Persist an uploaded banner image and return its public URL path.
    /// Fails loudly when the uploads directory is not writable.
    pub async fn store_banner_image(
        file_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<String, StorageError> {
        if !content_type.starts_with("image/") {
            return Err(StorageError::UnsupportedType(content_type.to_string()));
        }
        if data.len() > MAX_IMAGE_BYTES {
            return Err(StorageError::TooLarge);
        }

        let stamped = format!(
            "{}_{}",
            chrono::Utc::now().timestamp_millis(),
            sanitize_file_name(file_name)
        );

        let dir = upload_dir();
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&stamped), data).await?;

        tracing::info!(file = %stamped, bytes = data.len(), "stored banner image");
        Ok(format!("{}/{}", public_base().trim_end_matches('/'), stamped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_alphanumerics_and_dots() {
        assert_eq!(sanitize_file_name("Summer 2026 (1).png"), "Summer_2026__1_.png");
        assert_eq!(sanitize_file_name("banner.jpg"), "banner.jpg");
    }

    #[test]
    fn sanitize_replaces_path_separators() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), ".._.._etc_passwd");
    }

    #[test]
    fn sanitize_never_yields_an_empty_stem() {
        assert_eq!(sanitize_file_name(""), "image");
        assert_eq!(sanitize_file_name("صورة"), "image");
        assert_eq!(sanitize_file_name("..."), "image");
    }
}

#[cfg(all(test, feature = "server"))]
mod server_tests {
    use super::server::*;

    #[tokio::test]
    async fn rejects_non_image_payloads() {
        let err = store_banner_image("notes.txt", "text/plain", b"hello")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::UnsupportedType(_)));
    }

    #[tokio::test]
    async fn rejects_oversized_payloads() {
        let data = vec![0u8; super::MAX_IMAGE_BYTES + 1];
        let err = store_banner_image("big.png", "image/png", &data)
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::TooLarge));
    }
}
