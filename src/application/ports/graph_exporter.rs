//! Graph Exporter Port - 关系图导出抽象
//!
//! 导出器只读消费 `CharacterGraph`，失败后可对同一个图重试

use std::path::PathBuf;

use thiserror::Error;

use super::DocumentError;
use crate::domain::CharacterGraph;

/// 导出错误
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Export IO error: {0}")]
    IoError(String),

    #[error("Export encoding error: {0}")]
    EncodingError(String),

    #[error("Export serialization error: {0}")]
    SerializationError(String),
}

impl From<DocumentError> for ExportError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::UnencodableError { .. } | DocumentError::UnknownEncoding(_) => {
                Self::EncodingError(err.to_string())
            }
            DocumentError::IoError { .. } | DocumentError::DecodeError { .. } => {
                Self::IoError(err.to_string())
            }
        }
    }
}

/// Graph Exporter Port
pub trait GraphExporterPort: Send + Sync {
    /// 导出器名称（用于日志）
    fn name(&self) -> &'static str;

    /// 导出关系图，返回写出的文件
    fn export(&self, graph: &CharacterGraph) -> Result<Vec<PathBuf>, ExportError>;
}
