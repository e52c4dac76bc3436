use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    PlainText,
    Pdf,
}

impl SourceFormat {
    /// Detects the format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => Ok(SourceFormat::PlainText),
            "pdf" => Ok(SourceFormat::Pdf),
            "" => Err(AppError::UnsupportedFormat(format!(
                "'{}' has no extension. Only .txt and .pdf are supported.",
                path.display()
            ))),
            other => Err(AppError::UnsupportedFormat(format!(
                ".{}. Only .txt and .pdf are supported.",
                other
            ))),
        }
    }
}

/// Reads source documents, resolving relative paths against a fixed base directory.
#[derive(Debug, Clone)]
pub struct SourceReader {
    base_dir: PathBuf,
}

impl SourceReader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn from_current_dir() -> AppResult<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    pub async fn read(&self, path: impl AsRef<Path>) -> AppResult<String> {
        let resolved = self.resolve(path);
        let format = SourceFormat::from_path(&resolved)?;
        log::debug!("Reading {:?} source from {}", format, resolved.display());

        match format {
            SourceFormat::PlainText => tokio::fs::read_to_string(&resolved)
                .await
                .map_err(|e| read_error(&resolved, e)),
            SourceFormat::Pdf => {
                let bytes = tokio::fs::read(&resolved)
                    .await
                    .map_err(|e| read_error(&resolved, e))?;
                let text = tokio::task::spawn_blocking(move || {
                    pdf_extract::extract_text_from_mem(&bytes)
                })
                .await
                .map_err(|e| AppError::SourceReadError(format!("PDF extraction task failed: {}", e)))?
                .map_err(|e| {
                    AppError::SourceReadError(format!(
                        "Failed to extract text from '{}': {:?}",
                        resolved.display(),
                        e
                    ))
                })?;
                Ok(text)
            }
        }
    }
}

fn read_error(path: &Path, err: std::io::Error) -> AppError {
    AppError::SourceReadError(format!("Failed to read '{}': {}", path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            SourceFormat::from_path(Path::new("notes.txt")).unwrap(),
            SourceFormat::PlainText
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("dir/Livro.PDF")).unwrap(),
            SourceFormat::Pdf
        );
    }

    #[test]
    fn test_unsupported_extension() {
        let err = SourceFormat::from_path(Path::new("report.docx")).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
        assert!(err.to_string().contains(".docx"));

        let err = SourceFormat::from_path(Path::new("README")).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let reader = SourceReader::new("/data/sources");

        assert_eq!(
            reader.resolve("aula.txt"),
            PathBuf::from("/data/sources/aula.txt")
        );
        assert_eq!(
            reader.resolve("/tmp/aula.txt"),
            PathBuf::from("/tmp/aula.txt")
        );
    }

    #[tokio::test]
    async fn test_reads_relative_text_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("aula.txt"), "Conteúdo da aula").unwrap();

        let reader = SourceReader::new(dir.path());
        let text = reader.read("aula.txt").await.unwrap();

        assert_eq!(text, "Conteúdo da aula");
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let reader = SourceReader::new(dir.path());

        let err = reader.read("nao_existe.txt").await.unwrap_err();
        assert!(matches!(err, AppError::SourceReadError(_)));
    }

    #[tokio::test]
    async fn test_unsupported_extension_does_not_touch_disk() {
        let reader = SourceReader::new("/definitely/not/here");
        let err = reader.read("slides.pptx").await.unwrap_err();

        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }

    #[tokio::test]
    async fn test_invalid_pdf_is_read_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("broken.pdf"), b"not really a pdf").unwrap();

        let reader = SourceReader::new(dir.path());
        let err = reader.read("broken.pdf").await.unwrap_err();

        assert!(matches!(err, AppError::SourceReadError(_)));
    }
}
