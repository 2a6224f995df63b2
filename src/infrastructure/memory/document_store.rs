//! In-Memory Document Store Implementation

use dashmap::DashMap;
use std::path::{Path, PathBuf};

use crate::application::ports::{DocumentError, DocumentStorePort, TextEncoding};

/// 内存文本存储
///
/// 按字节保存，读写时与文件存储一样做严格编解码；用于测试
pub struct InMemoryDocumentStore {
    documents: DashMap<PathBuf, Vec<u8>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    /// 以 UTF-8 存入文本
    pub fn insert(&self, path: impl Into<PathBuf>, text: &str) {
        self.insert_bytes(path, text.as_bytes().to_vec());
    }

    /// 按给定编码存入文本，存在无法编码的字符时不写入
    pub fn insert_encoded(
        &self,
        path: impl Into<PathBuf>,
        text: &str,
        encoding: TextEncoding,
    ) -> Result<(), DocumentError> {
        let path = path.into();
        let bytes = encoding
            .encode(text)
            .ok_or_else(|| DocumentError::UnencodableError {
                path: path.display().to_string(),
                encoding: encoding.to_string(),
            })?
            .into_owned();
        self.insert_bytes(path, bytes);
        Ok(())
    }

    pub fn insert_bytes(&self, path: impl Into<PathBuf>, bytes: Vec<u8>) {
        self.documents.insert(path.into(), bytes);
    }

    pub fn get_bytes(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.documents.get(path.as_ref()).map(|b| b.clone())
    }

    /// 按给定编码读取已存文本，不存在或无法解码时返回 None
    pub fn get_text(&self, path: impl AsRef<Path>, encoding: TextEncoding) -> Option<String> {
        let bytes = self.get_bytes(path)?;
        encoding.decode(&bytes).map(|text| text.into_owned())
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.documents.contains_key(path.as_ref())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStorePort for InMemoryDocumentStore {
    fn read_text(&self, path: &Path, encoding: TextEncoding) -> Result<String, DocumentError> {
        let bytes = self
            .documents
            .get(path)
            .ok_or_else(|| DocumentError::IoError {
                path: path.display().to_string(),
                message: "document not found".to_string(),
            })?;

        encoding
            .decode(bytes.value())
            .map(|text| text.into_owned())
            .ok_or_else(|| DocumentError::DecodeError {
                path: path.display().to_string(),
                encoding: encoding.to_string(),
            })
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
            })?
            .into_owned();

        self.documents.insert(path.to_path_buf(), bytes);
        tracing::debug!(path = %path.display(), "Document stored in memory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lifecycle() {
        let store = InMemoryDocumentStore::new();
        assert!(store.is_empty());

        store
            .write_text(Path::new("out/node.csv"), "韦伯 韦伯 1\r\n", TextEncoding::gbk())
            .unwrap();
        assert!(store.contains("out/node.csv"));

        // GBK 字节不是合法 UTF-8
        assert!(store.get_text("out/node.csv", TextEncoding::utf8()).is_none());
        assert_eq!(
            store.read_text(Path::new("out/node.csv"), TextEncoding::gbk()).unwrap(),
            "韦伯 韦伯 1\r\n"
        );
    }

    #[test]
    fn test_unencodable_write_rejected() {
        let store = InMemoryDocumentStore::new();
        let result = store.write_text(Path::new("edge.csv"), "🍺", TextEncoding::gbk());

        assert!(matches!(result, Err(DocumentError::UnencodableError { .. })));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_insert_encoded_is_strict() {
        let store = InMemoryDocumentStore::new();

        store
            .insert_encoded("novel.txt", "韦伯\n", TextEncoding::gbk())
            .unwrap();
        assert_eq!(
            store.get_text("novel.txt", TextEncoding::gbk()).as_deref(),
            Some("韦伯\n")
        );

        let result = store.insert_encoded("beer.txt", "🍺", TextEncoding::gbk());
        assert!(matches!(result, Err(DocumentError::UnencodableError { .. })));
        assert!(!store.contains("beer.txt"));
    }

    #[test]
    fn test_missing_document() {
        let store = InMemoryDocumentStore::new();
        let result = store.read_text(Path::new("novel.txt"), TextEncoding::gbk());
        assert!(matches!(result, Err(DocumentError::IoError { .. })));
    }
}
