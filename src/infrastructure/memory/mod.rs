//! Memory Layer - In-Memory State Management
//!
//! 内存文本存储，供测试使用

mod document_store;

pub use document_store::InMemoryDocumentStore;
