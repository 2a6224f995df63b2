//! Extract Command Handlers

use std::collections::HashSet;
use std::sync::Arc;

use crate::application::commands::ExtractRelations;
use crate::application::error::ApplicationError;
use crate::application::ports::{DocumentStorePort, TokenizerPort};
use crate::domain::{CharacterGraph, Dictionaries, ExtractionContext};

/// ExtractRelations Handler
///
/// 单次流式遍历原文：逐行分词、过滤、归一化，行即段落。
/// 每次 `handle` 都使用全新的 `ExtractionContext`，处理器本身无可变状态。
pub struct ExtractRelationsHandler {
    store: Arc<dyn DocumentStorePort>,
    tokenizer: Arc<dyn TokenizerPort>,
    dictionaries: Arc<Dictionaries>,
    /// 非空时只保留这些词性的词
    pos_filter: HashSet<String>,
}

impl ExtractRelationsHandler {
    pub fn new(
        store: Arc<dyn DocumentStorePort>,
        tokenizer: Arc<dyn TokenizerPort>,
        dictionaries: Arc<Dictionaries>,
    ) -> Self {
        Self {
            store,
            tokenizer,
            dictionaries,
            pos_filter: HashSet::new(),
        }
    }

    pub fn with_pos_filter<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pos_filter = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn handle(&self, command: ExtractRelations) -> Result<CharacterGraph, ApplicationError> {
        let text = self
            .store
            .read_text(&command.text_path, command.encoding)
            .map_err(|e| ApplicationError::TextDecodeError(e.to_string()))?;

        let graph = self.extract_text(&text);

        tracing::info!(
            path = %command.text_path.display(),
            paragraphs = graph.paragraph_count(),
            names = graph.name_count(),
            edges = graph.edge_count(),
            mentions = graph.total_frequency(),
            "Relations extracted"
        );

        Ok(graph)
    }

    /// 对已解码的全文做抽取
    pub fn extract_text(&self, text: &str) -> CharacterGraph {
        let mut context = ExtractionContext::new(&self.dictionaries);

        for (line_no, line) in split_paragraphs(text).into_iter().enumerate() {
            let tokens = self.tokenizer.tokenize(line);
            let words = tokens
                .iter()
                .filter(|token| self.pos_filter.is_empty() || self.pos_filter.contains(&token.tag))
                .map(|token| token.word.as_str());

            let mentions = context.observe_paragraph(words);
            if mentions > 0 {
                tracing::trace!(line = line_no + 1, mentions, "Paragraph scanned");
            }
        }

        context.finish()
    }
}

/// 段落分隔符，除 `\n`、`\r\n` 外还包括单独的 `\r`、分页符和 Unicode 行/段分隔符
fn is_paragraph_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// 按行切分段落，`\r\n` 视为一个分隔符；末尾的分隔符不产生额外的空段落
fn split_paragraphs(text: &str) -> Vec<&str> {
    let mut paragraphs = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if !is_paragraph_break(c) {
            continue;
        }
        paragraphs.push(&text[start..index]);

        let mut end = index + c.len_utf8();
        if c == '\r' {
            if let Some(&(_, '\n')) = chars.peek() {
                chars.next();
                end += 1;
            }
        }
        start = end;
    }

    if start < text.len() {
        paragraphs.push(&text[start..]);
    }

    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{TextEncoding, Token};
    use crate::domain::cast::{AliasMap, CanonicalNameSet, StopWordSet, VocabularyEntry};
    use crate::infrastructure::adapters::WhitespaceTokenizer;
    use crate::infrastructure::memory::InMemoryDocumentStore;

    fn dictionaries() -> Arc<Dictionaries> {
        Arc::new(Dictionaries::new(
            StopWordSet::default(),
            CanonicalNameSet::parse("A\nB\n").0,
            AliasMap::parse("X,A\n", "alias.txt").unwrap(),
        ))
    }

    fn handler(store: InMemoryDocumentStore) -> ExtractRelationsHandler {
        ExtractRelationsHandler::new(
            Arc::new(store),
            Arc::new(WhitespaceTokenizer::new()),
            dictionaries(),
        )
    }

    #[test]
    fn test_extract_from_gbk_document() {
        let store = InMemoryDocumentStore::new();
        store
            .insert_encoded("novel.txt", "A met X today\r\nB left\r\n", TextEncoding::gbk())
            .unwrap();

        let graph = handler(store)
            .handle(ExtractRelations {
                text_path: "novel.txt".into(),
                encoding: TextEncoding::gbk(),
            })
            .unwrap();

        assert_eq!(graph.frequency("A"), 2);
        assert_eq!(graph.frequency("B"), 1);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.paragraph_count(), 2);
    }

    #[test]
    fn test_undecodable_text_is_fatal() {
        let store = InMemoryDocumentStore::new();
        store.insert_bytes("novel.txt", vec![b'A', 0xff, 0xff, b'\n']);

        let result = handler(store).handle(ExtractRelations {
            text_path: "novel.txt".into(),
            encoding: TextEncoding::utf8(),
        });

        assert!(matches!(result, Err(ApplicationError::TextDecodeError(_))));
    }

    #[test]
    fn test_missing_text_is_fatal() {
        let result = handler(InMemoryDocumentStore::new()).handle(ExtractRelations {
            text_path: "missing.txt".into(),
            encoding: TextEncoding::gbk(),
        });

        assert!(matches!(result, Err(ApplicationError::TextDecodeError(_))));
    }

    #[test]
    fn test_deterministic_extraction() {
        let handler = handler(InMemoryDocumentStore::new());
        let text = "B A X\nA B\nX\n";
        assert_eq!(handler.extract_text(text), handler.extract_text(text));
    }

    #[test]
    fn test_split_paragraphs_separators() {
        assert_eq!(split_paragraphs("A\r\nB\n\nC"), vec!["A", "B", "", "C"]);
        assert_eq!(split_paragraphs("A\rB\r"), vec!["A", "B"]);
        assert_eq!(split_paragraphs("A\u{2028}B\u{2029}C\x0cD"), vec!["A", "B", "C", "D"]);
        assert_eq!(split_paragraphs("A\u{85}B\x0bC\x1eD"), vec!["A", "B", "C", "D"]);
        assert!(split_paragraphs("").is_empty());
    }

    #[test]
    fn test_lone_carriage_return_ends_paragraph() {
        let handler = handler(InMemoryDocumentStore::new());

        let graph = handler.extract_text("A\rB\r");
        assert_eq!(graph.paragraph_count(), 2);
        assert_eq!(graph.weight("A", "B"), 0);

        let graph = handler.extract_text("A\u{2028}B\n");
        assert_eq!(graph.paragraph_count(), 2);
        assert_eq!(graph.weight("A", "B"), 0);
        assert_eq!(graph.frequency("A"), 1);
    }

    /// 固定词性的分词器：全大写词标 nr，其余标 x
    struct TaggingTokenizer;

    impl TokenizerPort for TaggingTokenizer {
        fn add_vocabulary(&mut self, _entries: &[VocabularyEntry]) {}

        fn tokenize(&self, line: &str) -> Vec<Token> {
            line.split_whitespace()
                .map(|w| {
                    let tag = if w.chars().all(|c| c.is_ascii_uppercase()) { "nr" } else { "x" };
                    Token::new(w, tag)
                })
                .collect()
        }
    }

    #[test]
    fn test_pos_filter() {
        let dicts = Arc::new(Dictionaries::new(
            StopWordSet::default(),
            CanonicalNameSet::parse("A\nb\n").0,
            AliasMap::default(),
        ));
        let handler = ExtractRelationsHandler::new(
            Arc::new(InMemoryDocumentStore::new()),
            Arc::new(TaggingTokenizer),
            dicts,
        );

        let unfiltered = handler.extract_text("A b\n");
        assert_eq!(unfiltered.weight("A", "b"), 1);

        let filtered = handler.with_pos_filter(["nr"]).extract_text("A b\n");
        assert_eq!(filtered.frequency("b"), 0);
        assert_eq!(filtered.frequency("A"), 1);
    }
}
