//! Jieba Tokenizer - 结巴分词 + 词性标注
//!
//! 实现 TokenizerPort trait

use jieba_rs::Jieba;

use crate::application::ports::{Token, TokenizerPort};
use crate::domain::cast::VocabularyEntry;

/// 人名词条未指定词性时使用的默认词性
pub const DEFAULT_NAME_TAG: &str = "nr";

/// Jieba 分词器配置
#[derive(Debug, Clone)]
pub struct JiebaTokenizerConfig {
    /// 是否启用 HMM 识别未登录词
    pub hmm: bool,
}

impl Default for JiebaTokenizerConfig {
    fn default() -> Self {
        Self { hmm: true }
    }
}

/// Jieba 分词器
pub struct JiebaTokenizer {
    config: JiebaTokenizerConfig,
    jieba: Jieba,
}

impl JiebaTokenizer {
    /// 使用内置词典创建
    pub fn new(config: JiebaTokenizerConfig) -> Self {
        tracing::info!(hmm = config.hmm, "JiebaTokenizer initialized");
        Self {
            config,
            jieba: Jieba::new(),
        }
    }
}

impl Default for JiebaTokenizer {
    fn default() -> Self {
        Self::new(JiebaTokenizerConfig::default())
    }
}

impl TokenizerPort for JiebaTokenizer {
    fn add_vocabulary(&mut self, entries: &[VocabularyEntry]) {
        for entry in entries {
            // 未给出词频时由 jieba 推算一个足以保证整词切分的词频
            let tag = entry.tag.as_deref().unwrap_or(DEFAULT_NAME_TAG);
            self.jieba.add_word(&entry.word, entry.freq, Some(tag));
        }

        tracing::debug!(words = entries.len(), "Vocabulary added to jieba");
    }

    fn tokenize(&self, line: &str) -> Vec<Token> {
        self.jieba
            .tag(line, self.config.hmm)
            .into_iter()
            .map(|t| Token::new(t.word, t.tag))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.word.as_str()).collect()
    }

    #[test]
    fn test_added_name_kept_whole() {
        let mut tokenizer = JiebaTokenizer::default();
        tokenizer.add_vocabulary(&[VocabularyEntry::new("爱丽丝菲尔")]);

        let tokens = tokenizer.tokenize("爱丽丝菲尔站在城堡的窗前");
        assert!(words(&tokens).contains(&"爱丽丝菲尔"));

        let tag = tokens.iter().find(|t| t.word == "爱丽丝菲尔").map(|t| t.tag.as_str());
        assert_eq!(tag, Some(DEFAULT_NAME_TAG));
    }

    #[test]
    fn test_tokens_cover_line() {
        let tokenizer = JiebaTokenizer::default();
        let line = "我们中出了一个叛徒";
        let tokens = tokenizer.tokenize(line);

        assert_eq!(words(&tokens).concat(), line);
    }

    #[test]
    fn test_empty_line() {
        let tokenizer = JiebaTokenizer::default();
        assert!(tokenizer.tokenize("").is_empty());
    }
}
