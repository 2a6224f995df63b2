//! Export Adapter - 关系图导出实现

mod echarts_renderer;
mod gephi_exporter;

pub use echarts_renderer::{
    chart_links, chart_nodes, symbol_size, ChartLink, ChartNode, EChartsConfig, EChartsRenderer,
};
pub use gephi_exporter::{render_edge_table, render_node_table, GephiExporter, GephiExporterConfig};
