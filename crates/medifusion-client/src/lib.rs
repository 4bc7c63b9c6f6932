//! medifusion-client
//!
//! Submits patient files to the analysis service and routes the answer
//! into the results area.

pub mod client;
pub mod error;
pub mod form;
pub mod orchestrate;
