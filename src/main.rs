//! Renwu - 小说人物关系抽取
//!
//! 加载词典 -> 逐段分词统计共现 -> 导出 Gephi 表格与 ECharts 关系图

use std::sync::Arc;

use renwu::application::{DictionaryFile, LoadDictionaries, LoadDictionariesHandler};
use renwu::config::{load_config, print_config, AppConfig, DocumentConfig};
use renwu::infrastructure::adapters::{
    EChartsConfig, FileDocumentStore, GephiExporterConfig, JiebaTokenizer, JiebaTokenizerConfig,
};
use renwu::infrastructure::worker::{DocumentJob, ExtractWorker, ExtractWorkerConfig, JobOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!("{},renwu={}", config.log.level, config.log.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Renwu - 小说人物关系抽取");
    print_config(&config);

    let store = Arc::new(FileDocumentStore::new());

    // 词典加载完成后分词器只读共享
    let mut tokenizer = JiebaTokenizer::new(JiebaTokenizerConfig {
        hmm: config.extraction.hmm,
    });
    let encoding = config.dictionary.encoding;
    let dictionaries = LoadDictionariesHandler::new(store.clone()).handle(
        LoadDictionaries {
            stop_words: DictionaryFile::new(&config.dictionary.stop_words, encoding),
            names: DictionaryFile::new(&config.dictionary.names, encoding),
            aliases: DictionaryFile::new(&config.dictionary.aliases, encoding),
        },
        &mut tokenizer,
    )?;

    let worker = ExtractWorker::new(
        ExtractWorkerConfig {
            max_concurrent: config.worker.max_concurrent,
            pos_filter: config.extraction.pos_filter.clone(),
        },
        store,
        Arc::new(tokenizer),
        Arc::new(dictionaries),
    );

    let jobs = config
        .documents
        .iter()
        .map(|doc| document_job(&config, doc))
        .collect();
    let outcomes = worker.run(jobs).await;

    let mut failed = 0;
    for outcome in &outcomes {
        match outcome {
            JobOutcome::Completed {
                name,
                graph,
                written,
            } => {
                tracing::info!(
                    job = %name,
                    paragraphs = graph.paragraph_count(),
                    names = graph.name_count(),
                    edges = graph.edge_count(),
                    "Written: {:?}",
                    written
                );
            }
            JobOutcome::ExtractFailed { name, error } | JobOutcome::ExportFailed { name, error, .. } => {
                failed += 1;
                tracing::error!(job = %name, error = %error, "Job failed");
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} documents failed", failed, outcomes.len());
    }

    Ok(())
}

fn document_job(config: &AppConfig, doc: &DocumentConfig) -> DocumentJob {
    let chart = &config.chart;
    DocumentJob {
        name: doc.name.clone(),
        text_path: doc.text.clone(),
        encoding: doc.encoding,
        gephi: GephiExporterConfig {
            node_path: doc.node_path(),
            edge_path: doc.edge_path(),
            encoding: doc.table_encoding,
        },
        chart: EChartsConfig {
            output_path: doc.chart_path.clone(),
            title: doc.title.clone().unwrap_or_else(|| chart.title.clone()),
            gravity: chart.gravity,
            repulsion: chart.repulsion,
            draggable: chart.draggable,
            symbol: chart.symbol.clone(),
            curveness: chart.curveness,
            line_width: chart.line_width,
            line_opacity: chart.line_opacity,
            show_edge_label: chart.show_edge_label,
            edge_label_position: chart.edge_label_position.clone(),
            edge_label_formatter: chart.edge_label_formatter.clone(),
            width: chart.width.clone(),
            height: chart.height.clone(),
            script_url: chart.script_url.clone(),
        },
    }
}
