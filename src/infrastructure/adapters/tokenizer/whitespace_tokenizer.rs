//! Whitespace Tokenizer - 按空白切分
//!
//! 用于已分词的语料和测试，所有词标记为 `x`

use std::collections::HashSet;

use crate::application::ports::{Token, TokenizerPort};
use crate::domain::cast::VocabularyEntry;

#[derive(Debug, Default)]
pub struct WhitespaceTokenizer {
    vocabulary: HashSet<String>,
}

impl WhitespaceTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已注入的词条数（空白切分不需要词表，仅做记录）
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}

impl TokenizerPort for WhitespaceTokenizer {
    fn add_vocabulary(&mut self, entries: &[VocabularyEntry]) {
        self.vocabulary
            .extend(entries.iter().map(|entry| entry.word.clone()));
    }

    fn tokenize(&self, line: &str) -> Vec<Token> {
        line.split_whitespace().map(|w| Token::new(w, "x")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_whitespace() {
        let tokens = WhitespaceTokenizer::new().tokenize(" A met\tX  today ");
        let words: Vec<_> = tokens.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["A", "met", "X", "today"]);
    }
}
