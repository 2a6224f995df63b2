//! Extract Worker - 多文档关系抽取任务处理

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::application::commands::handlers::{ExportGraphHandler, ExtractRelationsHandler};
use crate::application::commands::ExtractRelations;
use crate::application::error::ApplicationError;
use crate::application::ports::{DocumentStorePort, GraphExporterPort, TextEncoding, TokenizerPort};
use crate::domain::{CharacterGraph, Dictionaries};
use crate::infrastructure::adapters::{
    EChartsConfig, EChartsRenderer, GephiExporter, GephiExporterConfig,
};

/// Worker 配置
#[derive(Debug, Clone)]
pub struct ExtractWorkerConfig {
    /// 最大并发文档数
    pub max_concurrent: usize,
    /// 词性过滤，空表示不过滤
    pub pos_filter: Vec<String>,
}

impl Default for ExtractWorkerConfig {
    fn default() -> Self {
        Self {
            max_concurrent: 2,
            pos_filter: Vec::new(),
        }
    }
}

/// 单个文档的抽取 + 导出任务
#[derive(Debug, Clone)]
pub struct DocumentJob {
    pub name: String,
    pub text_path: PathBuf,
    pub encoding: TextEncoding,
    pub gephi: GephiExporterConfig,
    pub chart: EChartsConfig,
}

/// 任务结果
///
/// 导出失败时仍携带完整的关系图，可用 `ExtractWorker::retry_export` 重试
#[derive(Debug)]
pub enum JobOutcome {
    Completed {
        name: String,
        graph: CharacterGraph,
        written: Vec<PathBuf>,
    },
    ExtractFailed {
        name: String,
        error: ApplicationError,
    },
    ExportFailed {
        name: String,
        graph: CharacterGraph,
        error: ApplicationError,
    },
}

impl JobOutcome {
    pub fn name(&self) -> &str {
        match self {
            Self::Completed { name, .. }
            | Self::ExtractFailed { name, .. }
            | Self::ExportFailed { name, .. } => name,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// 抽取成功时的关系图
    pub fn graph(&self) -> Option<&CharacterGraph> {
        match self {
            Self::Completed { graph, .. } | Self::ExportFailed { graph, .. } => Some(graph),
            Self::ExtractFailed { .. } => None,
        }
    }
}

/// 抽取 Worker
///
/// 每个文档是独立的工作单元，拥有自己的抽取上下文；词典和分词器只读共享。
/// 抽取是 CPU 密集的同步过程，在 blocking 线程池上执行，并发由 semaphore 限制。
pub struct ExtractWorker {
    config: ExtractWorkerConfig,
    store: Arc<dyn DocumentStorePort>,
    tokenizer: Arc<dyn TokenizerPort>,
    dictionaries: Arc<Dictionaries>,
}

impl ExtractWorker {
    pub fn new(
        config: ExtractWorkerConfig,
        store: Arc<dyn DocumentStorePort>,
        tokenizer: Arc<dyn TokenizerPort>,
        dictionaries: Arc<Dictionaries>,
    ) -> Self {
        Self {
            config,
            store,
            tokenizer,
            dictionaries,
        }
    }

    /// 执行全部任务，结果顺序与输入一致
    pub async fn run(&self, jobs: Vec<DocumentJob>) -> Vec<JobOutcome> {
        tracing::info!(
            jobs = jobs.len(),
            max_concurrent = self.config.max_concurrent,
            "ExtractWorker started"
        );

        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent.max(1)));
        let mut handles = Vec::with_capacity(jobs.len());

        for job in jobs {
            let name = job.name.clone();
            let permit = match semaphore.clone().acquire_owned().await {
                Ok(permit) => permit,
                Err(e) => {
                    tracing::error!(job = %name, error = %e, "Failed to acquire semaphore permit");
                    handles.push((name, None));
                    continue;
                }
            };

            let extractor = self.extract_handler();
            let store = self.store.clone();

            let handle = tokio::task::spawn_blocking(move || {
                let _permit = permit; // 持有 permit 直到任务完成
                Self::process_job(job, &extractor, store)
            });
            handles.push((name, Some(handle)));
        }

        let mut outcomes = Vec::with_capacity(handles.len());
        for (name, handle) in handles {
            let outcome = match handle {
                Some(handle) => match handle.await {
                    Ok(outcome) => outcome,
                    Err(e) => JobOutcome::ExtractFailed {
                        name,
                        error: ApplicationError::internal(format!("job panicked: {}", e)),
                    },
                },
                None => JobOutcome::ExtractFailed {
                    name,
                    error: ApplicationError::internal("worker semaphore closed"),
                },
            };
            outcomes.push(outcome);
        }

        tracing::info!(
            succeeded = outcomes.iter().filter(|o| o.is_success()).count(),
            failed = outcomes.iter().filter(|o| !o.is_success()).count(),
            "ExtractWorker finished"
        );

        outcomes
    }

    /// 对已抽取的关系图重新导出，不重复抽取
    pub fn retry_export(
        &self,
        job: &DocumentJob,
        graph: &CharacterGraph,
    ) -> Result<Vec<PathBuf>, ApplicationError> {
        Self::export_handler(job, self.store.clone()).handle(graph)
    }

    fn extract_handler(&self) -> ExtractRelationsHandler {
        ExtractRelationsHandler::new(
            self.store.clone(),
            self.tokenizer.clone(),
            self.dictionaries.clone(),
        )
        .with_pos_filter(self.config.pos_filter.iter().cloned())
    }

    fn export_handler(job: &DocumentJob, store: Arc<dyn DocumentStorePort>) -> ExportGraphHandler {
        let exporters: Vec<Arc<dyn GraphExporterPort>> = vec![
            Arc::new(GephiExporter::new(job.gephi.clone(), store.clone())),
            Arc::new(EChartsRenderer::new(job.chart.clone(), store)),
        ];
        ExportGraphHandler::new(exporters)
    }

    /// 处理单个文档
    fn process_job(
        job: DocumentJob,
        extractor: &ExtractRelationsHandler,
        store: Arc<dyn DocumentStorePort>,
    ) -> JobOutcome {
        tracing::info!(job = %job.name, path = %job.text_path.display(), "Job started");

        let command = ExtractRelations {
            text_path: job.text_path.clone(),
            encoding: job.encoding,
        };

        let graph = match extractor.handle(command) {
            Ok(graph) => graph,
            Err(e) => {
                tracing::error!(job = %job.name, error = %e, "Extraction failed");
                return JobOutcome::ExtractFailed {
                    name: job.name,
                    error: e,
                };
            }
        };

        match Self::export_handler(&job, store).handle(&graph) {
            Ok(written) => {
                tracing::info!(
                    job = %job.name,
                    names = graph.name_count(),
                    edges = graph.edge_count(),
                    files = written.len(),
                    "Job completed"
                );
                JobOutcome::Completed {
                    name: job.name,
                    graph,
                    written,
                }
            }
            Err(e) => {
                tracing::error!(job = %job.name, error = %e, "Export failed, graph kept in memory");
                JobOutcome::ExportFailed {
                    name: job.name,
                    graph,
                    error: e,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cast::{AliasMap, CanonicalNameSet, StopWordSet};
    use crate::infrastructure::adapters::WhitespaceTokenizer;
    use crate::infrastructure::memory::InMemoryDocumentStore;

    fn job(name: &str) -> DocumentJob {
        DocumentJob {
            name: name.to_string(),
            text_path: PathBuf::from(format!("input/{name}.txt")),
            encoding: TextEncoding::gbk(),
            gephi: GephiExporterConfig {
                node_path: PathBuf::from(format!("output/{name}/node.csv")),
                edge_path: PathBuf::from(format!("output/{name}/edge.csv")),
                encoding: TextEncoding::gbk(),
            },
            chart: EChartsConfig {
                output_path: PathBuf::from(format!("result/{name}.html")),
                ..EChartsConfig::default()
            },
        }
    }

    fn worker(store: Arc<InMemoryDocumentStore>, max_concurrent: usize) -> ExtractWorker {
        let dictionaries = Dictionaries::new(
            StopWordSet::default(),
            CanonicalNameSet::parse("韦伯\n伊斯坎达尔\n").0,
            AliasMap::parse("征服王,伊斯坎达尔\n", "alias.txt").unwrap(),
        );
        ExtractWorker::new(
            ExtractWorkerConfig {
                max_concurrent,
                pos_filter: Vec::new(),
            },
            store,
            Arc::new(WhitespaceTokenizer::new()),
            Arc::new(dictionaries),
        )
    }

    #[tokio::test]
    async fn test_independent_documents() {
        let store = Arc::new(InMemoryDocumentStore::new());
        store.insert_encoded("input/a.txt", "韦伯 征服王\n", TextEncoding::gbk()).unwrap();
        store.insert_encoded("input/b.txt", "韦伯\n韦伯\n", TextEncoding::gbk()).unwrap();

        let outcomes = worker(store.clone(), 2).run(vec![job("a"), job("b")]).await;

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].name(), "a");
        assert!(outcomes.iter().all(JobOutcome::is_success));

        // 文档之间没有共享状态
        let a = outcomes[0].graph().unwrap();
        let b = outcomes[1].graph().unwrap();
        assert_eq!(a.weight("韦伯", "伊斯坎达尔"), 1);
        assert_eq!(b.frequency("韦伯"), 2);
        assert!(!b.contains("伊斯坎达尔"));

        let edges = store
            .get_text("output/a/edge.csv", TextEncoding::gbk())
            .unwrap();
        assert_eq!(
            edges,
            "Source Target Weight\r\n伊斯坎达尔 韦伯 1\r\n韦伯 伊斯坎达尔 1\r\n"
        );
        assert!(store.contains("result/b.html"));
    }

    #[tokio::test]
    async fn test_failed_document_does_not_affect_others() {
        let store = Arc::new(InMemoryDocumentStore::new());
        store.insert_encoded("input/ok.txt", "韦伯\n", TextEncoding::gbk()).unwrap();

        let outcomes = worker(store.clone(), 1)
            .run(vec![job("missing"), job("ok")])
            .await;

        assert!(matches!(
            outcomes[0],
            JobOutcome::ExtractFailed {
                error: ApplicationError::TextDecodeError(_),
                ..
            }
        ));
        assert!(outcomes[1].is_success());
        assert!(!store.contains("output/missing/node.csv"));
    }

    #[tokio::test]
    async fn test_retry_export_without_reextracting() {
        let store = Arc::new(InMemoryDocumentStore::new());
        store.insert_encoded("input/a.txt", "韦伯 征服王\n", TextEncoding::gbk()).unwrap();
        let worker = worker(store.clone(), 1);

        // 表格编码无法表示人名时导出失败，关系图保留
        let mut bad = job("a");
        bad.gephi.encoding = TextEncoding::for_label("iso-8859-2").unwrap();

        let outcome = worker.run(vec![bad]).await.remove(0);
        let graph = match outcome {
            JobOutcome::ExportFailed { graph, error, .. } => {
                assert!(matches!(error, ApplicationError::ExportIoError(_)));
                graph
            }
            other => panic!("unexpected outcome: {other:?}"),
        };

        let written = worker.retry_export(&job("a"), &graph).unwrap();
        assert_eq!(written.len(), 3);
        assert!(store.contains("output/a/node.csv"));
    }
}
