//! Cast Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("词典文件读取失败 {file}: {message}")]
    Io { file: String, message: String },

    #[error("词典文件 {file} 无法按 {encoding} 解码")]
    Decode { file: String, encoding: String },

    #[error("别名词典 {file} 第 {line} 行格式错误（应为 `别名,人名`）: {content:?}")]
    MalformedAlias {
        file: String,
        line: usize,
        content: String,
    },

    #[error("别名词典 {file} 第 {line} 行: 别名 {alias} 已映射到 {existing}，不能再映射到 {conflicting}")]
    ConflictingAlias {
        file: String,
        line: usize,
        alias: String,
        existing: String,
        conflicting: String,
    },
}
