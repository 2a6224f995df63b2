//! Relation Context - 抽取上下文
//!
//! 单次抽取过程中唯一的可变状态持有者。逐段落喂入分词结果，
//! 结束后通过 `finish` 转换为只读的 `CharacterGraph`。

use std::collections::BTreeMap;

use super::{CharacterGraph, Paragraph};
use crate::domain::cast::Dictionaries;

pub struct ExtractionContext<'d> {
    dictionaries: &'d Dictionaries,
    frequency: BTreeMap<String, u64>,
    relationships: BTreeMap<String, BTreeMap<String, u64>>,
    paragraphs: Vec<Paragraph>,
}

impl<'d> ExtractionContext<'d> {
    pub fn new(dictionaries: &'d Dictionaries) -> Self {
        Self {
            dictionaries,
            frequency: BTreeMap::new(),
            relationships: BTreeMap::new(),
            paragraphs: Vec::new(),
        }
    }

    /// 处理一个段落的分词结果，返回识别出的人物出现次数
    pub fn observe_paragraph<'w, I>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = &'w str>,
    {
        let dictionaries = self.dictionaries;
        let mut paragraph = Paragraph::new();

        for word in words {
            let Some(name) = dictionaries.resolve(word) else {
                continue;
            };

            paragraph.push(name);

            if !self.frequency.contains_key(name) {
                self.frequency.insert(name.to_string(), 0);
                self.relationships.insert(name.to_string(), BTreeMap::new());
            }
            if let Some(count) = self.frequency.get_mut(name) {
                *count += 1;
            }
        }

        let mentions = paragraph.len();
        self.paragraphs.push(paragraph);
        mentions
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// 按段落累加共现权重，生成只读结果
    pub fn finish(mut self) -> CharacterGraph {
        for paragraph in &self.paragraphs {
            for (name1, name2) in paragraph.ordered_pairs() {
                // name1 在首次出现时已建立邻接表
                if let Some(edges) = self.relationships.get_mut(name1) {
                    *edges.entry(name2.to_string()).or_insert(0) += 1;
                }
            }
        }

        CharacterGraph::new(self.frequency, self.relationships, self.paragraphs.len())
    }
}
