//! Relation Context - 人物关系限界上下文
//!
//! 职责:
//! - 段落内人名序列
//! - 单次抽取过程中的频次/共现累加
//! - 抽取结果（人物关系图）的只读模型

mod aggregate;
mod context;
mod entities;

pub use aggregate::CharacterGraph;
pub use context::ExtractionContext;
pub use entities::{Edge, Paragraph};
