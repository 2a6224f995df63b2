//! Relation Commands

use std::path::PathBuf;

use crate::application::ports::TextEncoding;

/// 一个词典文件（路径 + 编码）
#[derive(Debug, Clone)]
pub struct DictionaryFile {
    pub path: PathBuf,
    pub encoding: TextEncoding,
}

impl DictionaryFile {
    pub fn new(path: impl Into<PathBuf>, encoding: TextEncoding) -> Self {
        Self {
            path: path.into(),
            encoding,
        }
    }
}

/// 加载人物词典命令
#[derive(Debug, Clone)]
pub struct LoadDictionaries {
    pub stop_words: DictionaryFile,
    pub names: DictionaryFile,
    pub aliases: DictionaryFile,
}

/// 从小说原文抽取人物关系命令
#[derive(Debug, Clone)]
pub struct ExtractRelations {
    pub text_path: PathBuf,
    pub encoding: TextEncoding,
}
