//! medifusion-export
//!
//! Turns analysis results into report cards, charts, downloadable JSON
//! reports, and image previews, and writes them into a results area.

pub mod area;
pub mod chart;
pub mod error;
pub mod presenter;
pub mod preview;
pub mod render;
pub mod report;
pub mod styles;
