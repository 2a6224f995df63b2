//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（renwu.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["renwu", "renwu.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `RENWU_`，层级分隔符 `__`）
/// 2. 配置文件（renwu.toml 或 renwu.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `RENWU_DICTIONARY__NAMES=input/character.txt`
/// - `RENWU_DICTIONARY__ENCODING=gbk`
/// - `RENWU_WORKER__MAX_CONCURRENT=4`
/// - `RENWU_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）；documents 列表由 serde 默认值补齐
    builder = builder
        .set_default("dictionary.stop_words", "input/discarded.txt")?
        .set_default("dictionary.names", "input/character.txt")?
        .set_default("dictionary.aliases", "input/alias.txt")?
        .set_default("dictionary.encoding", "utf-8")?
        .set_default("extraction.hmm", true)?
        .set_default("worker.max_concurrent", 2)?
        .set_default("log.level", "info")?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级），例如 RENWU_WORKER__MAX_CONCURRENT=4
    builder = builder.add_source(
        Environment::with_prefix("RENWU")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let dictionary = &config.dictionary;
    for (key, path) in [
        ("dictionary.stop_words", &dictionary.stop_words),
        ("dictionary.names", &dictionary.names),
        ("dictionary.aliases", &dictionary.aliases),
    ] {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                key
            )));
        }
    }

    if config.worker.max_concurrent == 0 {
        return Err(ConfigError::ValidationError(
            "worker.max_concurrent cannot be 0".to_string(),
        ));
    }

    if config.documents.is_empty() {
        return Err(ConfigError::ValidationError(
            "At least one document is required".to_string(),
        ));
    }

    let mut names = HashSet::new();
    for doc in &config.documents {
        if doc.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Document name cannot be empty".to_string(),
            ));
        }
        if !names.insert(doc.name.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Duplicate document name: {}",
                doc.name
            )));
        }
        if doc.text.as_os_str().is_empty() || doc.chart_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "Document {} has an empty path",
                doc.name
            )));
        }
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Stop Words: {:?}", config.dictionary.stop_words);
    tracing::info!("Names: {:?}", config.dictionary.names);
    tracing::info!("Aliases: {:?}", config.dictionary.aliases);
    tracing::info!("Dictionary Encoding: {}", config.dictionary.encoding);
    if !config.extraction.pos_filter.is_empty() {
        tracing::info!("POS Filter: {:?}", config.extraction.pos_filter);
    }
    for doc in &config.documents {
        tracing::info!(
            "Document {}: {:?} ({}) -> {:?}, {:?}",
            doc.name,
            doc.text,
            doc.encoding,
            doc.output_dir,
            doc.chart_path
        );
    }
    tracing::info!("Max Concurrent: {}", config.worker.max_concurrent);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
