//! Resume upload acceptance.
//!
//! A file is judged only by what the client declares about it: its MIME type
//! and its size. The content is never inspected.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// What the screen remembers about an accepted file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub filename: String,
    pub content_type: String,
    pub size: u64,
}

/// How the file reached the screen. Both routes run the same check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UploadSource {
    Browse,
    Drop,
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub allowed_types: Vec<String>,
    pub max_bytes: u64,
}

impl UploadPolicy {
    pub fn new(max_bytes: u64) -> Self {
        Self {
            allowed_types: vec![PDF_MIME.to_string(), DOCX_MIME.to_string()],
            max_bytes,
        }
    }

    /// Type is checked before size, so an oversized text file reports the
    /// type problem first. Either way the file is rejected.
    pub fn check(&self, file: &FileRef) -> Result<(), AppError> {
        if !self.allowed_types.iter().any(|t| *t == file.content_type) {
            return Err(AppError::InvalidFileType(file.content_type.clone()));
        }
        if file.size > self.max_bytes {
            return Err(AppError::FileTooLarge {
                size: file.size,
                limit: self.max_bytes,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEN_MIB: u64 = 10 * 1024 * 1024;

    fn file(content_type: &str, size: u64) -> FileRef {
        FileRef {
            filename: "resume".into(),
            content_type: content_type.into(),
            size,
        }
    }

    #[test]
    fn test_accepts_pdf_and_docx() {
        let policy = UploadPolicy::new(TEN_MIB);
        assert!(policy.check(&file(PDF_MIME, 1024)).is_ok());
        assert!(policy.check(&file(DOCX_MIME, 1024)).is_ok());
    }

    #[test]
    fn test_accepts_exactly_at_ceiling() {
        let policy = UploadPolicy::new(TEN_MIB);
        assert!(policy.check(&file(PDF_MIME, TEN_MIB)).is_ok());
    }

    #[test]
    fn test_rejects_one_byte_over_ceiling() {
        let policy = UploadPolicy::new(TEN_MIB);
        let err = policy.check(&file(PDF_MIME, TEN_MIB + 1)).unwrap_err();
        assert!(matches!(err, AppError::FileTooLarge { size, .. } if size == TEN_MIB + 1));
    }

    #[test]
    fn test_rejects_disallowed_types() {
        let policy = UploadPolicy::new(TEN_MIB);
        for mime in ["text/plain", "image/png", "application/msword", ""] {
            assert!(matches!(
                policy.check(&file(mime, 10)),
                Err(AppError::InvalidFileType(_))
            ));
        }
    }

    #[test]
    fn test_oversized_rejected_regardless_of_type() {
        let policy = UploadPolicy::new(TEN_MIB);
        for mime in [PDF_MIME, DOCX_MIME, "text/plain"] {
            assert!(policy.check(&file(mime, TEN_MIB * 2)).is_err());
        }
    }

    #[test]
    fn test_mime_comparison_is_exact() {
        let policy = UploadPolicy::new(TEN_MIB);
        for declared in ["Application/PDF", " application/pdf", "application/pdf; charset=binary"] {
            assert!(matches!(
                policy.check(&file(declared, 1)),
                Err(AppError::InvalidFileType(_))
            ));
        }
    }
}
