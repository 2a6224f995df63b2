//! File Document Store - 文件系统文本存储实现
//!
//! 实现 DocumentStorePort trait

use std::fs;
use std::path::Path;

use crate::application::ports::{DocumentError, DocumentStorePort, TextEncoding};

/// 文件系统文本存储
///
/// 读取时整文件解码，写入时整文件编码后一次写出，不创建目录
#[derive(Debug, Clone, Default)]
pub struct FileDocumentStore;

impl FileDocumentStore {
    pub fn new() -> Self {
        Self
    }
}

fn io_error(path: &Path, err: std::io::Error) -> DocumentError {
    DocumentError::IoError {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

impl DocumentStorePort for FileDocumentStore {
    fn read_text(&self, path: &Path, encoding: TextEncoding) -> Result<String, DocumentError> {
        let bytes = fs::read(path).map_err(|e| io_error(path, e))?;

        let text = encoding
            .decode(&bytes)
            .ok_or_else(|| DocumentError::DecodeError {
                path: path.display().to_string(),
                encoding: encoding.to_string(),
            })?
            .into_owned();

        tracing::debug!(
            path = %path.display(),
            encoding = %encoding,
            size = bytes.len(),
            "Read document"
        );

        Ok(text)
    }

    fn write_text(
        &self,
        path: &Path,
        content: &str,
        encoding: TextEncoding,
    ) -> Result<(), DocumentError> {
        let bytes = encoding
            .encode(content)
            .ok_or_else(|| DocumentError::UnencodableError {
                path: path.display().to_string(),
                encoding: encoding.to_string(),
            })?;

        fs::write(path, &bytes).map_err(|e| io_error(path, e))?;

        tracing::debug!(
            path = %path.display(),
            encoding = %encoding,
            size = bytes.len(),
            "Wrote document"
        );

        Ok(())
    }
}
