//! medifusion-core
//!
//! Pure domain types for the MediFusion upload client: the multipart
//! upload payload, the analysis service's response contract, the exported
//! report shape, and the normalized per-patient view model.
//! No network or filesystem dependency.

pub mod error;
pub mod models;
pub mod report_names;
