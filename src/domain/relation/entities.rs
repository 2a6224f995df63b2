//! Relation Context - Entities

/// 段落 - 共现统计的最小范围（源文本中的一行）
///
/// 按出现顺序记录识别出的规范人名，保留重复
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    names: Vec<String>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// 段落内所有有序人名对 (name1, name2)，name1 != name2
    ///
    /// 同名不同位置也不会成对；A 出现 a 次、B 出现 b 次时 (A, B) 产生 a*b 次
    pub fn ordered_pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.names.iter().flat_map(move |name1| {
            self.names
                .iter()
                .filter(move |name2| *name2 != name1)
                .map(move |name2| (name1.as_str(), name2.as_str()))
        })
    }
}

/// 关系边 (source, target, weight)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub weight: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(names: &[&str]) -> Paragraph {
        let mut p = Paragraph::new();
        for name in names {
            p.push(*name);
        }
        p
    }

    #[test]
    fn test_ordered_pairs_skip_same_name() {
        let p = paragraph(&["A", "A"]);
        assert_eq!(p.ordered_pairs().count(), 0);
    }

    #[test]
    fn test_ordered_pairs_multiplicative() {
        let p = paragraph(&["A", "B", "A"]);
        let pairs: Vec<_> = p.ordered_pairs().collect();

        assert_eq!(pairs.iter().filter(|pair| **pair == ("A", "B")).count(), 2);
        assert_eq!(pairs.iter().filter(|pair| **pair == ("B", "A")).count(), 2);
        assert_eq!(pairs.len(), 4);
    }

    #[test]
    fn test_empty_paragraph() {
        let p = Paragraph::new();
        assert!(p.is_empty());
        assert_eq!(p.ordered_pairs().count(), 0);
    }
}
