//! Dictionary Command Handlers

use std::path::Path;
use std::sync::Arc;

use crate::application::commands::{DictionaryFile, LoadDictionaries};
use crate::application::error::ApplicationError;
use crate::application::ports::{DocumentError, DocumentStorePort, TokenizerPort};
use crate::domain::cast::{
    AliasMap, CanonicalNameSet, Dictionaries, DictionaryError, StopWordSet, VocabularyEntry,
};

/// LoadDictionaries Handler
///
/// 读取三类词表并把人名词表注入分词器。任一词表失败都会终止加载。
pub struct LoadDictionariesHandler {
    store: Arc<dyn DocumentStorePort>,
}

impl LoadDictionariesHandler {
    pub fn new(store: Arc<dyn DocumentStorePort>) -> Self {
        Self { store }
    }

    /// 加载全部词典，并在返回前完成分词器词表注入
    pub fn handle(
        &self,
        command: LoadDictionaries,
        tokenizer: &mut dyn TokenizerPort,
    ) -> Result<Dictionaries, ApplicationError> {
        let stop_words = self.load_stop_words(&command.stop_words)?;
        let (names, vocabulary) = self.load_canonical_names(&command.names)?;
        let aliases = self.load_alias_map(&command.aliases)?;

        tokenizer.add_vocabulary(&vocabulary);

        let dictionaries = Dictionaries::new(stop_words, names, aliases);

        for (alias, canonical) in dictionaries.dangling_aliases() {
            tracing::warn!(
                alias = %alias,
                canonical = %canonical,
                "Alias target is not a known character name, it will never match"
            );
        }

        tracing::info!(
            stop_words = dictionaries.stop_words().len(),
            names = dictionaries.names().len(),
            aliases = dictionaries.aliases().len(),
            "Dictionaries loaded"
        );

        Ok(dictionaries)
    }

    /// 停用词表，每行一个
    pub fn load_stop_words(&self, file: &DictionaryFile) -> Result<StopWordSet, ApplicationError> {
        let text = self.read(file)?;
        Ok(StopWordSet::parse(&text))
    }

    /// 人名词表，返回人名集合和待注入分词器的词条
    pub fn load_canonical_names(
        &self,
        file: &DictionaryFile,
    ) -> Result<(CanonicalNameSet, Vec<VocabularyEntry>), ApplicationError> {
        let text = self.read(file)?;
        Ok(CanonicalNameSet::parse(&text))
    }

    /// 别名词表，任何格式错误的行都会拒绝整个文件
    pub fn load_alias_map(&self, file: &DictionaryFile) -> Result<AliasMap, ApplicationError> {
        let text = self.read(file)?;
        let aliases = AliasMap::parse(&text, &display(&file.path))?;
        Ok(aliases)
    }

    fn read(&self, file: &DictionaryFile) -> Result<String, ApplicationError> {
        self.store
            .read_text(&file.path, file.encoding)
            .map_err(|err| dictionary_error(&file.path, err).into())
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

fn dictionary_error(path: &Path, err: DocumentError) -> DictionaryError {
    match err {
        DocumentError::DecodeError { encoding, .. } => DictionaryError::Decode {
            file: display(path),
            encoding,
        },
        other => DictionaryError::Io {
            file: display(path),
            message: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::TextEncoding;
    use crate::infrastructure::adapters::WhitespaceTokenizer;
    use crate::infrastructure::memory::InMemoryDocumentStore;

    fn command() -> LoadDictionaries {
        LoadDictionaries {
            stop_words: DictionaryFile::new("input/discarded.txt", TextEncoding::utf8()),
            names: DictionaryFile::new("input/character.txt", TextEncoding::utf8()),
            aliases: DictionaryFile::new("input/alias.txt", TextEncoding::utf8()),
        }
    }

    fn store(aliases: &str) -> Arc<InMemoryDocumentStore> {
        let store = InMemoryDocumentStore::new();
        store.insert("input/discarded.txt", "Lancer\n");
        store.insert("input/character.txt", "韦伯 5 nr\n伊斯坎达尔\nLancer\n");
        store.insert("input/alias.txt", aliases);
        Arc::new(store)
    }

    #[test]
    fn test_load_all_dictionaries() {
        let handler = LoadDictionariesHandler::new(store("征服王,伊斯坎达尔\n"));
        let mut tokenizer = WhitespaceTokenizer::new();

        let dicts = handler.handle(command(), &mut tokenizer).unwrap();

        assert_eq!(dicts.names().len(), 3);
        assert_eq!(dicts.resolve("征服王"), Some("伊斯坎达尔"));
        assert_eq!(dicts.resolve("Lancer"), None);
        assert_eq!(tokenizer.vocabulary_len(), 3);
    }

    #[test]
    fn test_malformed_alias_file_rejected() {
        let handler = LoadDictionariesHandler::new(store("征服王,伊斯坎达尔\n少年\n"));
        let mut tokenizer = WhitespaceTokenizer::new();

        let err = handler.handle(command(), &mut tokenizer).unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::DictionaryLoadError(DictionaryError::MalformedAlias { line: 2, .. })
        ));
        // 失败时分词器不会被注入
        assert_eq!(tokenizer.vocabulary_len(), 0);
    }

    #[test]
    fn test_missing_dictionary_file() {
        let handler = LoadDictionariesHandler::new(Arc::new(InMemoryDocumentStore::new()));
        let mut tokenizer = WhitespaceTokenizer::new();

        let err = handler.handle(command(), &mut tokenizer).unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::DictionaryLoadError(DictionaryError::Io { .. })
        ));
    }

    #[test]
    fn test_undecodable_dictionary_file() {
        let store = InMemoryDocumentStore::new();
        store.insert_bytes("input/discarded.txt", vec![0xc0, 0xff]);
        let handler = LoadDictionariesHandler::new(Arc::new(store));

        let file = DictionaryFile::new("input/discarded.txt", TextEncoding::utf8());
        let err = handler.load_stop_words(&file).unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::DictionaryLoadError(DictionaryError::Decode { .. })
        ));
    }
}
