//! Cast Context - Aggregate Root

use super::{AliasMap, CanonicalNameSet, StopWordSet};

/// 人物词典聚合根
///
/// 不变量:
/// - 加载完成后不可变，可在多个抽取任务间只读共享
/// - 解析顺序固定: 停用词 -> 别名 -> 人名
#[derive(Debug, Clone, Default)]
pub struct Dictionaries {
    stop_words: StopWordSet,
    names: CanonicalNameSet,
    aliases: AliasMap,
}

impl Dictionaries {
    pub fn new(stop_words: StopWordSet, names: CanonicalNameSet, aliases: AliasMap) -> Self {
        Self {
            stop_words,
            names,
            aliases,
        }
    }

    /// 将一个词解析为规范人名
    ///
    /// 停用词直接丢弃；命中别名则替换为对应人名；替换后不在人名集合中的
    /// 词不算人物出现。
    pub fn resolve<'a>(&'a self, word: &'a str) -> Option<&'a str> {
        if self.stop_words.contains(word) {
            return None;
        }

        let word = self.aliases.canonical_of(word).unwrap_or(word);

        self.names.contains(word).then_some(word)
    }

    /// 指向人名集合之外的别名（永远不会产生人物出现）
    pub fn dangling_aliases(&self) -> Vec<(&str, &str)> {
        let mut dangling: Vec<(&str, &str)> = self
            .aliases
            .iter()
            .filter(|(_, canonical)| !self.names.contains(canonical))
            .collect();
        dangling.sort_unstable();
        dangling
    }

    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    pub fn names(&self) -> &CanonicalNameSet {
        &self.names
    }

    pub fn aliases(&self) -> &AliasMap {
        &self.aliases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionaries() -> Dictionaries {
        Dictionaries::new(
            StopWordSet::parse("Lancer\n"),
            CanonicalNameSet::parse("卫宫切嗣\n迪卢木多\nLancer\n").0,
            AliasMap::parse("切嗣,卫宫切嗣\n枪兵,迪卢木多\n魔术师杀手,卫宫切嗣\n", "alias.txt").unwrap(),
        )
    }

    #[test]
    fn test_resolve_canonical_name() {
        let dicts = dictionaries();
        assert_eq!(dicts.resolve("卫宫切嗣"), Some("卫宫切嗣"));
    }

    #[test]
    fn test_resolve_alias() {
        let dicts = dictionaries();
        assert_eq!(dicts.resolve("切嗣"), Some("卫宫切嗣"));
        assert_eq!(dicts.resolve("魔术师杀手"), Some("卫宫切嗣"));
        assert_eq!(dicts.resolve("枪兵"), Some("迪卢木多"));
    }

    #[test]
    fn test_resolve_unknown_word() {
        let dicts = dictionaries();
        assert_eq!(dicts.resolve("圣杯"), None);
    }

    #[test]
    fn test_stop_word_precedes_name_lookup() {
        // Lancer 同时在人名词典和停用词表中，停用词优先
        let dicts = dictionaries();
        assert_eq!(dicts.resolve("Lancer"), None);
    }

    #[test]
    fn test_dangling_aliases() {
        let dicts = Dictionaries::new(
            StopWordSet::default(),
            CanonicalNameSet::parse("韦伯\n").0,
            AliasMap::parse("少年,韦伯\n征服王,伊斯坎达尔\n", "alias.txt").unwrap(),
        );
        assert_eq!(dicts.dangling_aliases(), vec![("征服王", "伊斯坎达尔")]);
    }
}
