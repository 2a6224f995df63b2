//! 应用层错误定义
//!
//! 统一的命令错误类型，所有错误对本次运行都是致命的

use thiserror::Error;

use crate::application::ports::ExportError;
use crate::domain::DictionaryError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 词典缺失、不可读或格式错误，抽取开始前终止
    #[error("Dictionary load error: {0}")]
    DictionaryLoadError(#[from] DictionaryError),

    /// 小说原文不可读或无法按配置编码解码，不产生任何输出
    #[error("Text decode error: {0}")]
    TextDecodeError(String),

    /// 导出目标不可写，内存中的关系图仍可用于重试
    #[error("Export IO error: {0}")]
    ExportIoError(#[from] ExportError),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}
