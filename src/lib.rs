//! Renwu - 小说人物关系抽取
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Cast Context: 停用词、人名、别名词典与名称归一化
//! - Relation Context: 段落共现统计与人物关系图
//!
//! 应用层 (application/):
//! - Ports: 端口定义（Tokenizer, DocumentStore, GraphExporter）
//! - Commands: 词典加载、关系抽取、导出命令处理器
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: Jieba 分词、文件读写、Gephi 表格、ECharts 关系图
//! - Memory: 内存文档存储
//! - Worker: ExtractWorker 多文档任务处理

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
