//! Worker Layer - 多文档任务处理
//!
//! 实现 ExtractWorker，每个文档一次抽取 + 导出

mod extract_worker;

pub use extract_worker::{DocumentJob, ExtractWorker, ExtractWorkerConfig, JobOutcome};
