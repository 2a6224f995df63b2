//! ECharts Renderer - 交互式关系图
//!
//! 实现 GraphExporterPort trait，生成一个独立的 HTML 页面，
//! 使用力导向布局展示人物关系。

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value};

use crate::application::ports::{DocumentStorePort, ExportError, GraphExporterPort, TextEncoding};
use crate::domain::CharacterGraph;

/// ECharts 渲染配置
#[derive(Debug, Clone)]
pub struct EChartsConfig {
    /// 输出 HTML 路径
    pub output_path: PathBuf,
    /// 图标题
    pub title: String,
    /// 力导向布局: 向中心的引力
    pub gravity: f64,
    /// 力导向布局: 节点间斥力
    pub repulsion: f64,
    pub draggable: bool,
    /// 节点形状
    pub symbol: String,
    /// 边的弯曲度
    pub curveness: f64,
    pub line_width: f64,
    pub line_opacity: f64,
    /// 是否常显边标签（悬停时总是显示）
    pub show_edge_label: bool,
    pub edge_label_position: String,
    /// 边标签格式，`{b}` 为边名称，`{c}` 为权重
    pub edge_label_formatter: String,
    pub width: String,
    pub height: String,
    /// ECharts 脚本地址
    pub script_url: String,
}

impl Default for EChartsConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("result/relationship.html"),
            title: "Fate Zero Character Relationship".to_string(),
            gravity: 0.2,
            repulsion: 8000.0,
            draggable: true,
            symbol: "circle".to_string(),
            curveness: 0.3,
            line_width: 0.5,
            line_opacity: 0.7,
            show_edge_label: false,
            edge_label_position: "middle".to_string(),
            edge_label_formatter: "{b}->{c}".to_string(),
            width: "900px".to_string(),
            height: "500px".to_string(),
            script_url: "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js".to_string(),
        }
    }
}

/// 图节点
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartNode<'a> {
    pub name: &'a str,
    #[serde(rename = "symbolSize")]
    pub symbol_size: f64,
    pub value: u64,
}

/// 图连线 (source, target, weight)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartLink<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub value: u64,
}

/// 节点大小: 频次占总频次的百分比，保留两位小数
///
/// 按浮点数的精确值舍入，恰好居中时取偶数（3.125 -> 3.12）
pub fn symbol_size(freq: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = freq as f64 / total as f64 * 100.0;
    format!("{:.2}", percent).parse().unwrap_or(percent)
}

pub fn chart_nodes(graph: &CharacterGraph) -> Vec<ChartNode<'_>> {
    let total = graph.total_frequency();
    graph
        .frequencies()
        .map(|(name, freq)| ChartNode {
            name,
            symbol_size: symbol_size(freq, total),
            value: freq,
        })
        .collect()
}

pub fn chart_links(graph: &CharacterGraph) -> Vec<ChartLink<'_>> {
    graph
        .edges()
        .map(|edge| ChartLink {
            source: edge.source,
            target: edge.target,
            value: edge.weight,
        })
        .collect()
}

/// ECharts 渲染器
pub struct EChartsRenderer {
    config: EChartsConfig,
    store: Arc<dyn DocumentStorePort>,
}

impl EChartsRenderer {
    pub fn new(config: EChartsConfig, store: Arc<dyn DocumentStorePort>) -> Self {
        Self { config, store }
    }

    /// 生成 ECharts option
    pub fn chart_option(&self, graph: &CharacterGraph) -> Value {
        let c = &self.config;
        json!({
            "title": { "text": c.title },
            "tooltip": {},
            "series": [{
                "type": "graph",
                "layout": "force",
                "symbol": c.symbol,
                "draggable": c.draggable,
                "roam": true,
                "force": {
                    "gravity": c.gravity,
                    "repulsion": c.repulsion,
                },
                "label": { "show": true, "position": "right" },
                "lineStyle": {
                    "curveness": c.curveness,
                    "width": c.line_width,
                    "opacity": c.line_opacity,
                },
                "edgeLabel": {
                    "show": c.show_edge_label,
                    "position": c.edge_label_position,
                    "formatter": c.edge_label_formatter,
                },
                "emphasis": {
                    "edgeLabel": { "show": true, "formatter": c.edge_label_formatter },
                },
                "data": chart_nodes(graph),
                "links": chart_links(graph),
            }],
        })
    }

    /// 渲染完整 HTML 页面
    pub fn render_html(&self, graph: &CharacterGraph) -> Result<String, ExportError> {
        let option = serde_json::to_string(&self.chart_option(graph))
            .map_err(|e| ExportError::SerializationError(e.to_string()))?;
        // 防止人名中的 `</` 提前结束 script 标签
        let option = option.replace("</", "<\\/");

        let c = &self.config;
        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <script type="text/javascript" src="{script_url}"></script>
</head>
<body>
    <div id="relationship" style="width:{width}; height:{height};"></div>
    <script>
        var chart = echarts.init(document.getElementById('relationship'), 'white', {{renderer: 'canvas'}});
        var option = {option};
        chart.setOption(option);
    </script>
</body>
</html>
"#,
            title = escape_html(&c.title),
            script_url = escape_html(&c.script_url),
            width = escape_html(&c.width),
            height = escape_html(&c.height),
            option = option,
        ))
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl GraphExporterPort for EChartsRenderer {
    fn name(&self) -> &'static str {
        "echarts"
    }

    fn export(&self, graph: &CharacterGraph) -> Result<Vec<PathBuf>, ExportError> {
        let html = self.render_html(graph)?;
        self.store
            .write_text(&self.config.output_path, &html, TextEncoding::utf8())?;

        Ok(vec![self.config.output_path.clone()])
    }
}
