//! Document Store Port - 带编码的文本文件读写抽象
//!
//! 词典、小说原文和导出表格各自使用独立配置的字符编码

use std::borrow::Cow;
use std::path::Path;

use encoding_rs::Encoding;
use serde::Deserialize;
use thiserror::Error;

/// 文档读写错误
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("IO error on {path}: {message}")]
    IoError { path: String, message: String },

    #[error("{path} is not valid {encoding}")]
    DecodeError { path: String, encoding: String },

    #[error("{path}: text contains characters not representable in {encoding}")]
    UnencodableError { path: String, encoding: String },

    #[error("Unknown encoding label: {0}")]
    UnknownEncoding(String),
}

/// 文本编码（WHATWG 标签，如 `utf-8`、`gbk`）
#[derive(Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct TextEncoding(&'static Encoding);

impl TextEncoding {
    pub fn utf8() -> Self {
        Self(encoding_rs::UTF_8)
    }

    pub fn gbk() -> Self {
        Self(encoding_rs::GBK)
    }

    /// 按标签查找编码，大小写和首尾空白不敏感
    pub fn for_label(label: &str) -> Result<Self, DocumentError> {
        Encoding::for_label(label.trim().as_bytes())
            .map(Self)
            .ok_or_else(|| DocumentError::UnknownEncoding(label.to_string()))
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// 严格解码，遇到非法字节返回 None；与编码匹配的 BOM 会被去掉
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
        let (text, had_errors) = self.0.decode_with_bom_removal(bytes);
        (!had_errors).then_some(text)
    }

    /// 严格编码，存在无法表示的字符时返回 None
    pub fn encode<'a>(&self, text: &'a str) -> Option<Cow<'a, [u8]>> {
        let (bytes, _, had_errors) = self.0.encode(text);
        (!had_errors).then_some(bytes)
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self::utf8()
    }
}

impl TryFrom<String> for TextEncoding {
    type Error = DocumentError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Self::for_label(&label)
    }
}

impl std::str::FromStr for TextEncoding {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::for_label(s)
    }
}

impl std::fmt::Debug for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TextEncoding({})", self.name())
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Document Store Port
pub trait DocumentStorePort: Send + Sync {
    /// 读取整个文件并按给定编码解码
    fn read_text(&self, path: &Path, encoding: TextEncoding) -> Result<String, DocumentError>;

    /// 按给定编码写入文件（覆盖），不创建缺失的目录
    fn write_text(
        &self,
        path: &Path,
        content: &str,
        encoding: TextEncoding,
    ) -> Result<(), DocumentError>;
}
