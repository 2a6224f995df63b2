//! Cast Context - Value Objects
//!
//! 三类词表均为加载后不可变的值对象，解析函数只接收已解码的文本，
//! 文件读取与编码处理在 infrastructure 层完成。

use std::collections::{HashMap, HashSet};

use super::DictionaryError;

/// 停用词表
///
/// 命中的词在别名/人名解析之前即被丢弃
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet(HashSet<String>);

impl StopWordSet {
    /// 每行去除首尾空白后整体作为一个停用词，空行忽略
    pub fn parse(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for StopWordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// 分词器附加词条
///
/// 对应人名词典的一行 `人名 [词频] [词性]`，词频和词性只对分词器有意义
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub word: String,
    pub freq: Option<usize>,
    pub tag: Option<String>,
}

impl VocabularyEntry {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            freq: None,
            tag: None,
        }
    }
}

/// 规范人名集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalNameSet(HashSet<String>);

impl CanonicalNameSet {
    /// 解析人名词典
    ///
    /// 每行第一个空白分隔字段为人名；第二个字段若是非负整数则作为词频，
    /// 第三个字段作为词性。返回人名集合以及按文件顺序排列的分词器词条。
    pub fn parse(text: &str) -> (Self, Vec<VocabularyEntry>) {
        let mut names = HashSet::new();
        let mut vocabulary = Vec::new();

        for line in text.lines() {
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let freq = fields.next().and_then(|f| f.parse::<usize>().ok());
            let tag = fields.next().map(str::to_string);

            if names.insert(word.to_string()) {
                vocabulary.push(VocabularyEntry {
                    word: word.to_string(),
                    freq,
                    tag,
                });
            }
        }

        (Self(names), vocabulary)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for CanonicalNameSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// 别名 -> 规范人名
///
/// 不变量:
/// - 别名唯一
/// - 只做一次查找，不做链式解析
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap(HashMap<String, String>);

impl AliasMap {
    /// 解析别名词典，每个非空行为 `别名,人名`
    ///
    /// 任何一行字段数不为 2 或有一侧为空，整个文件被拒绝；
    /// 同一别名映射到不同人名同样拒绝。`file` 只用于错误信息。
    pub fn parse(text: &str, file: &str) -> Result<Self, DictionaryError> {
        let mut aliases: HashMap<String, String> = HashMap::new();

        for (index, raw) in text.lines().enumerate() {
            if raw.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
            let (alias, canonical) = match fields.as_slice() {
                [alias, canonical] if !alias.is_empty() && !canonical.is_empty() => {
                    (*alias, *canonical)
                }
                _ => {
                    return Err(DictionaryError::MalformedAlias {
                        file: file.to_string(),
                        line: index + 1,
                        content: raw.to_string(),
                    })
                }
            };

            match aliases.get(alias) {
                Some(existing) if existing != canonical => {
                    return Err(DictionaryError::ConflictingAlias {
                        file: file.to_string(),
                        line: index + 1,
                        alias: alias.to_string(),
                        existing: existing.clone(),
                        conflicting: canonical.to_string(),
                    });
                }
                Some(_) => {}
                None => {
                    aliases.insert(alias.to_string(), canonical.to_string());
                }
            }
        }

        Ok(Self(aliases))
    }

    /// 查找别名对应的规范人名
    pub fn canonical_of(&self, alias: &str) -> Option<&str> {
        self.0.get(alias).map(String::as_str)
    }

    /// 遍历 (别名, 人名)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(a, c)| (a.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for AliasMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
