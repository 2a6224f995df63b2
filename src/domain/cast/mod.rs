//! Cast Context - 人物词典限界上下文
//!
//! 职责:
//! - 停用词、人名、别名三类受控词表
//! - 词表文本解析
//! - 词 -> 规范人名 的解析规则

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::Dictionaries;
pub use errors::DictionaryError;
pub use value_objects::{AliasMap, CanonicalNameSet, StopWordSet, VocabularyEntry};
