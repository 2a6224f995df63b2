//! Export Command Handlers

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::GraphExporterPort;
use crate::domain::CharacterGraph;

/// ExportGraph Handler
///
/// 只借用关系图，导出失败后调用方仍持有完整结果，修正目标后可直接重试
pub struct ExportGraphHandler {
    exporters: Vec<Arc<dyn GraphExporterPort>>,
}

impl ExportGraphHandler {
    pub fn new(exporters: Vec<Arc<dyn GraphExporterPort>>) -> Self {
        Self { exporters }
    }

    pub fn handle(&self, graph: &CharacterGraph) -> Result<Vec<PathBuf>, ApplicationError> {
        let mut written = Vec::new();

        for exporter in &self.exporters {
            let paths = exporter.export(graph).map_err(|e| {
                tracing::error!(exporter = exporter.name(), error = %e, "Export failed");
                e
            })?;

            for path in &paths {
                tracing::info!(exporter = exporter.name(), path = %path.display(), "Exported");
            }
            written.extend(paths);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::application::ports::ExportError;

    /// 前 `failures` 次调用失败的导出器
    struct FlakyExporter {
        failures: usize,
        calls: AtomicUsize,
    }

    impl GraphExporterPort for FlakyExporter {
        fn name(&self) -> &'static str {
            "flaky"
        }

        fn export(&self, graph: &CharacterGraph) -> Result<Vec<PathBuf>, ExportError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                return Err(ExportError::IoError("output directory missing".to_string()));
            }
            Ok(vec![PathBuf::from(format!("out/{}.txt", graph.name_count()))])
        }
    }

    #[test]
    fn test_export_retry_reuses_graph() {
        let exporter = Arc::new(FlakyExporter {
            failures: 1,
            calls: AtomicUsize::new(0),
        });
        let handler = ExportGraphHandler::new(vec![exporter.clone() as Arc<dyn GraphExporterPort>]);
        let graph = CharacterGraph::default();

        let first = handler.handle(&graph);
        assert!(matches!(first, Err(ApplicationError::ExportIoError(_))));

        let second = handler.handle(&graph).unwrap();
        assert_eq!(second, vec![PathBuf::from("out/0.txt")]);
        assert_eq!(exporter.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_no_exporters() {
        let handler = ExportGraphHandler::new(Vec::new());
        assert!(handler.handle(&CharacterGraph::default()).unwrap().is_empty());
    }
}
