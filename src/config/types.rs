//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::application::ports::TextEncoding;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 词典配置
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// 抽取配置
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// 待处理文档，每个文档独立抽取和导出
    #[serde(default = "default_documents")]
    pub documents: Vec<DocumentConfig>,

    /// 关系图渲染配置
    #[serde(default)]
    pub chart: ChartConfig,

    /// Worker 配置
    #[serde(default)]
    pub worker: WorkerConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            extraction: ExtractionConfig::default(),
            documents: default_documents(),
            chart: ChartConfig::default(),
            worker: WorkerConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// 词典配置
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryConfig {
    /// 停用词表
    #[serde(default = "default_stop_words")]
    pub stop_words: PathBuf,

    /// 人名词典（每行 `人名 [词频] [词性]`，同时作为分词器附加词典）
    #[serde(default = "default_names")]
    pub names: PathBuf,

    /// 别名词典（每行 `别名,人名`）
    #[serde(default = "default_aliases")]
    pub aliases: PathBuf,

    /// 三个词典文件的编码
    #[serde(default = "TextEncoding::utf8")]
    pub encoding: TextEncoding,
}

fn default_stop_words() -> PathBuf {
    PathBuf::from("input/discarded.txt")
}

fn default_names() -> PathBuf {
    PathBuf::from("input/character.txt")
}

fn default_aliases() -> PathBuf {
    PathBuf::from("input/alias.txt")
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            stop_words: default_stop_words(),
            names: default_names(),
            aliases: default_aliases(),
            encoding: TextEncoding::utf8(),
        }
    }
}

/// 抽取配置
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    /// 只统计这些词性的词，空表示不过滤
    #[serde(default)]
    pub pos_filter: Vec<String>,

    /// 分词时是否启用 HMM 新词发现
    #[serde(default = "default_hmm")]
    pub hmm: bool,
}

fn default_hmm() -> bool {
    true
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            pos_filter: Vec::new(),
            hmm: default_hmm(),
        }
    }
}

/// 单个文档配置
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    /// 文档名（用于日志，需唯一）
    pub name: String,

    /// 小说原文路径
    pub text: PathBuf,

    /// 原文编码
    #[serde(default = "TextEncoding::gbk")]
    pub encoding: TextEncoding,

    /// node.csv / edge.csv 输出目录（需已存在）
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// 表格编码
    #[serde(default = "TextEncoding::gbk")]
    pub table_encoding: TextEncoding,

    /// 关系图 HTML 路径（所在目录需已存在）
    #[serde(default = "default_chart_path")]
    pub chart_path: PathBuf,

    /// 关系图标题，未设置时使用 chart.title
    #[serde(default)]
    pub title: Option<String>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_chart_path() -> PathBuf {
    PathBuf::from("result/relationship.html")
}

fn default_documents() -> Vec<DocumentConfig> {
    vec![DocumentConfig {
        name: "fate_zero".to_string(),
        text: PathBuf::from("input/Fate_Zero.txt"),
        encoding: TextEncoding::gbk(),
        output_dir: default_output_dir(),
        table_encoding: TextEncoding::gbk(),
        chart_path: default_chart_path(),
        title: None,
    }]
}

impl DocumentConfig {
    pub fn node_path(&self) -> PathBuf {
        self.output_dir.join("node.csv")
    }

    pub fn edge_path(&self) -> PathBuf {
        self.output_dir.join("edge.csv")
    }
}

/// 关系图渲染配置
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_chart_title")]
    pub title: String,

    /// 力导向布局引力
    #[serde(default = "default_gravity")]
    pub gravity: f64,

    /// 力导向布局斥力
    #[serde(default = "default_repulsion")]
    pub repulsion: f64,

    #[serde(default = "default_true")]
    pub draggable: bool,

    #[serde(default = "default_symbol")]
    pub symbol: String,

    #[serde(default = "default_curveness")]
    pub curveness: f64,

    #[serde(default = "default_line_width")]
    pub line_width: f64,

    #[serde(default = "default_line_opacity")]
    pub line_opacity: f64,

    #[serde(default)]
    pub show_edge_label: bool,

    #[serde(default = "default_edge_label_position")]
    pub edge_label_position: String,

    #[serde(default = "default_edge_label_formatter")]
    pub edge_label_formatter: String,

    #[serde(default = "default_width")]
    pub width: String,

    #[serde(default = "default_height")]
    pub height: String,

    /// ECharts 脚本地址
    #[serde(default = "default_script_url")]
    pub script_url: String,
}

fn default_chart_title() -> String {
    "Fate Zero Character Relationship".to_string()
}

fn default_gravity() -> f64 {
    0.2
}

fn default_repulsion() -> f64 {
    8000.0
}

fn default_true() -> bool {
    true
}

fn default_symbol() -> String {
    "circle".to_string()
}

fn default_curveness() -> f64 {
    0.3
}

fn default_line_width() -> f64 {
    0.5
}

fn default_line_opacity() -> f64 {
    0.7
}

fn default_edge_label_position() -> String {
    "middle".to_string()
}

fn default_edge_label_formatter() -> String {
    "{b}->{c}".to_string()
}

fn default_width() -> String {
    "900px".to_string()
}

fn default_height() -> String {
    "500px".to_string()
}

fn default_script_url() -> String {
    "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js".to_string()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: default_chart_title(),
            gravity: default_gravity(),
            repulsion: default_repulsion(),
            draggable: default_true(),
            symbol: default_symbol(),
            curveness: default_curveness(),
            line_width: default_line_width(),
            line_opacity: default_line_opacity(),
            show_edge_label: false,
            edge_label_position: default_edge_label_position(),
            edge_label_formatter: default_edge_label_formatter(),
            width: default_width(),
            height: default_height(),
            script_url: default_script_url(),
        }
    }
}

/// Worker 配置
#[derive(Debug, Clone, Deserialize)]
pub struct WorkerConfig {
    /// 最大并发文档数
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

fn default_max_concurrent() -> usize {
    2
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            max_concurrent: default_max_concurrent(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
