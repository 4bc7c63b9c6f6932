use serde::{Deserialize, Serialize};

/// Stylesheet embedded in every results page.
///
/// Loaded once as a static resource; nothing appends to it at runtime.
pub static STYLESHEET: &str = r#"
body {
    font-family: "Segoe UI", Arial, sans-serif;
    background: #0b1020;
    color: #e6f1ff;
    margin: 0;
    padding: 24px;
}
.result-card {
    margin: 20px 0;
    padding: 20px;
    background: rgba(255, 255, 255, 0.06);
    border: 1px solid rgba(0, 255, 255, 0.2);
    border-radius: 14px;
}
.result-card--anomaly {
    border: 2px solid #ff4444;
    box-shadow: 0 0 20px #ff4444;
}
.risk-bar {
    width: 100%;
    height: 24px;
    background: rgba(255, 255, 255, 0.1);
    border-radius: 12px;
    overflow: hidden;
}
.risk-fill {
    height: 100%;
    color: #000;
    font-weight: bold;
    text-align: center;
    line-height: 24px;
}
.analysis-section, .anomaly-section, .recommendation-section {
    margin: 15px 0;
    padding: 15px;
    background: rgba(255, 255, 255, 0.05);
    border-radius: 10px;
}
.anomaly-section { border-left: 4px solid #ff4444; }
.analysis-section ul, .anomaly-section ul, .recommendation-section ul {
    padding-left: 20px;
}
.analysis-section li, .anomaly-section li, .recommendation-section li {
    margin: 8px 0;
}
.charts-container {
    display: flex;
    gap: 20px;
    margin: 20px 0;
    border-top: 1px solid #0ff;
    padding-top: 15px;
}
.chart-empty {
    width: 200px;
    height: 150px;
    border: 1px dashed rgba(255, 255, 255, 0.2);
}
.download-btn {
    display: inline-block;
    padding: 8px 16px;
    background: #0ff;
    color: #000;
    border-radius: 8px;
    text-decoration: none;
}
#previewImages img {
    max-width: 160px;
    max-height: 160px;
    margin: 6px;
    border-radius: 8px;
    border: 1px solid #0ff;
}
"#;

/// Colors and geometry for the per-card charts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartStyles {
    /// Surface width in pixels.
    pub width: f64,

    /// Surface height in pixels.
    pub height: f64,

    /// Fill and stroke of the tumor size bar.
    pub bar_fill: String,
    pub bar_stroke: String,

    /// Fill and stroke of the growth rate point and its area.
    pub line_fill: String,
    pub line_stroke: String,

    /// Axis and tick label color.
    pub axis: String,

    pub stroke_width: f64,
}

impl Default for ChartStyles {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 150.0,
            bar_fill: "rgba(0, 255, 255, 0.6)".to_string(),
            bar_stroke: "#0ff".to_string(),
            line_fill: "rgba(255, 100, 100, 0.3)".to_string(),
            line_stroke: "rgba(255, 0, 0, 0.8)".to_string(),
            axis: "#8899aa".to_string(),
            stroke_width: 2.0,
        }
    }
}
