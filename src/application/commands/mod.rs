//! 应用层 - 命令
//!
//! 词典加载 -> 关系抽取 -> 导出，每一步一个命令处理器

mod relation_commands;

pub mod handlers;

pub use relation_commands::*;
