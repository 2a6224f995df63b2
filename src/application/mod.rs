//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Tokenizer、DocumentStore、GraphExporter）
//! - commands: 词典加载、关系抽取、关系图导出命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    handlers::{ExportGraphHandler, ExtractRelationsHandler, LoadDictionariesHandler},
    DictionaryFile, ExtractRelations, LoadDictionaries,
};

pub use error::ApplicationError;

pub use ports::{
    // Document store
    DocumentError,
    DocumentStorePort,
    TextEncoding,
    // Graph exporter
    ExportError,
    GraphExporterPort,
    // Tokenizer
    Token,
    TokenizerPort,
};
