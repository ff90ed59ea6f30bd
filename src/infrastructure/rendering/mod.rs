pub mod plotly_chart;
pub mod relayout;

pub use plotly_chart::PlotlyChart;
pub use relayout::parse_relayout;
