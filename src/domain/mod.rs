//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Cast Context: 人物词典（停用词、人名、别名）
//! - Relation Context: 段落共现与人物关系图

pub mod cast;
pub mod relation;

pub use cast::{Dictionaries, DictionaryError};
pub use relation::{CharacterGraph, Edge, ExtractionContext, Paragraph};
