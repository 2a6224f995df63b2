//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod document_store;
mod graph_exporter;
mod tokenizer;

pub use document_store::{DocumentError, DocumentStorePort, TextEncoding};
pub use graph_exporter::{ExportError, GraphExporterPort};
pub use tokenizer::{Token, TokenizerPort};
