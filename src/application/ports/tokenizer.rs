//! Tokenizer Port - 分词/词性标注抽象
//!
//! 定义分词器的抽象接口，具体实现在 infrastructure/adapters 层

use crate::domain::cast::VocabularyEntry;

/// 分词结果 (词, 词性)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub word: String,
    pub tag: String,
}

impl Token {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

/// Tokenizer Port
///
/// 词表注入必须在任何 `tokenize` 调用之前完成；注入完成后分词器只读共享。
pub trait TokenizerPort: Send + Sync {
    /// 注入附加词表（人名），使多字人名不被切开
    fn add_vocabulary(&mut self, entries: &[VocabularyEntry]);

    /// 对一行文本分词
    fn tokenize(&self, line: &str) -> Vec<Token>;
}
