//! Cascading lookup tables for the scope/category dropdowns.
//!
//! These feed Scenario fields only; the flow graph builder never consults
//! them. When no external table is loaded, fixed built-in tables apply.

pub mod category;
mod defaults;
pub mod geography;

pub use category::{CatRow, CatTable};
pub use geography::{GeoRow, GeoTable};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing column: {0}")]
    MissingColumn(String),
}
