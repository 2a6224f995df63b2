//! Gephi Exporter - 节点表/边表导出
//!
//! 实现 GraphExporterPort trait。输出为空格分隔、CRLF 换行的文本表，
//! 编码与小说原文一致（默认 GBK），可直接导入 Gephi。

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{DocumentStorePort, ExportError, GraphExporterPort, TextEncoding};
use crate::domain::CharacterGraph;

const LINE_ENDING: &str = "\r\n";
const NODE_HEADER: &str = "Id Label Weight";
const EDGE_HEADER: &str = "Source Target Weight";

/// Gephi 导出配置
#[derive(Debug, Clone)]
pub struct GephiExporterConfig {
    pub node_path: PathBuf,
    pub edge_path: PathBuf,
    pub encoding: TextEncoding,
}

impl Default for GephiExporterConfig {
    fn default() -> Self {
        Self {
            node_path: PathBuf::from("output/node.csv"),
            edge_path: PathBuf::from("output/edge.csv"),
            encoding: TextEncoding::gbk(),
        }
    }
}

/// Gephi 表格导出器
pub struct GephiExporter {
    config: GephiExporterConfig,
    store: Arc<dyn DocumentStorePort>,
}

impl GephiExporter {
    pub fn new(config: GephiExporterConfig, store: Arc<dyn DocumentStorePort>) -> Self {
        Self { config, store }
    }
}

/// 节点表: `<name> <name> <frequency>`
pub fn render_node_table(graph: &CharacterGraph) -> String {
    let mut out = String::from(NODE_HEADER);
    out.push_str(LINE_ENDING);

    for (name, freq) in graph.frequencies() {
        out.push_str(&format!("{name} {name} {freq}{LINE_ENDING}"));
    }

    out
}

/// 边表: `<source> <target> <weight>`，只输出权重大于 0 的边
pub fn render_edge_table(graph: &CharacterGraph) -> String {
    let mut out = String::from(EDGE_HEADER);
    out.push_str(LINE_ENDING);

    for edge in graph.edges() {
        out.push_str(&format!(
            "{} {} {}{LINE_ENDING}",
            edge.source, edge.target, edge.weight
        ));
    }

    out
}

impl GraphExporterPort for GephiExporter {
    fn name(&self) -> &'static str {
        "gephi"
    }

    fn export(&self, graph: &CharacterGraph) -> Result<Vec<PathBuf>, ExportError> {
        let tables = [
            (&self.config.node_path, render_node_table(graph)),
            (&self.config.edge_path, render_edge_table(graph)),
        ];

        // 两张表都能编码后才开始写，避免留下不配套的一半
        for (path, table) in &tables {
            if self.config.encoding.encode(table).is_none() {
                return Err(ExportError::EncodingError(format!(
                    "{}: text contains characters not representable in {}",
                    path.display(),
                    self.config.encoding
                )));
            }
        }

        for (path, table) in &tables {
            self.store.write_text(path, table, self.config.encoding)?;
        }

        tracing::debug!(
            nodes = graph.name_count(),
            edges = graph.edge_count(),
            encoding = %self.config.encoding,
            "Gephi tables written"
        );

        Ok(vec![self.config.node_path.clone(), self.config.edge_path.clone()])
    }
}
