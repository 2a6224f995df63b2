//! Storage Adapter - 文件系统实现

mod file_document_store;

pub use file_document_store::FileDocumentStore;
