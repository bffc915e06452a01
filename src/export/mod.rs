//! Export collaborators: blueprint JSON, CSV sheets, raw graph text.
//!
//! Export failures are local and non-fatal: a failing CSV sheet must never
//! prevent JSON export or diagram rendering, so each artifact has its own
//! entry point and error.

pub mod blueprint;
pub mod sheets;

pub use blueprint::{Blueprint, BLUEPRINT_VERSION, blueprint_json, make_blueprint};
pub use sheets::{
    channels_csv, logic_matrix_csv, suppliers_csv, summary_csv, write_channels,
    write_logic_matrix, write_suppliers, write_summary,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv produced non-utf8 output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
