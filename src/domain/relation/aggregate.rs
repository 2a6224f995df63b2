//! Relation Context - Aggregate Root

use std::collections::BTreeMap;

use super::Edge;

/// 人物关系图聚合根（一次抽取的只读结果）
///
/// 不变量:
/// - frequency 中的每个人名在 relationships 中都有邻接表（可能为空）
/// - relationships[A] 不包含 A
/// - relationships[A][B] == relationships[B][A]
/// - 按人名字典序遍历，导出结果可逐字节复现
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterGraph {
    frequency: BTreeMap<String, u64>,
    relationships: BTreeMap<String, BTreeMap<String, u64>>,
    paragraph_count: usize,
}

impl CharacterGraph {
    pub(super) fn new(
        frequency: BTreeMap<String, u64>,
        relationships: BTreeMap<String, BTreeMap<String, u64>>,
        paragraph_count: usize,
    ) -> Self {
        Self {
            frequency,
            relationships,
            paragraph_count,
        }
    }

    /// 人名出现总次数，未出现为 0
    pub fn frequency(&self, name: &str) -> u64 {
        self.frequency.get(name).copied().unwrap_or(0)
    }

    /// 共现权重，无边为 0
    pub fn weight(&self, source: &str, target: &str) -> u64 {
        self.relationships
            .get(source)
            .and_then(|edges| edges.get(target))
            .copied()
            .unwrap_or(0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.frequency.contains_key(name)
    }

    /// 人名的邻接表
    pub fn neighbours(&self, name: &str) -> Option<&BTreeMap<String, u64>> {
        self.relationships.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.frequency.keys().map(String::as_str)
    }

    /// (人名, 频次)
    pub fn frequencies(&self) -> impl Iterator<Item = (&str, u64)> {
        self.frequency.iter().map(|(name, freq)| (name.as_str(), *freq))
    }

    /// 所有权重大于 0 的有向边
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        self.relationships.iter().flat_map(|(source, targets)| {
            targets
                .iter()
                .filter(|(_, weight)| **weight > 0)
                .map(move |(target, weight)| Edge {
                    source: source.as_str(),
                    target: target.as_str(),
                    weight: *weight,
                })
        })
    }

    /// 所有人物出现次数之和，用于归一化
    pub fn total_frequency(&self) -> u64 {
        self.frequency.values().sum()
    }

    pub fn name_count(&self) -> usize {
        self.frequency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraph_count
    }

    pub fn is_empty(&self) -> bool {
        self.frequency.is_empty()
    }
}
