//! Blueprint JSON: the Scenario plus generation metadata.
//!
//! Top-level keys: `scope`, `category`, `supplier_pool`, `buying_channels`,
//! `stream2`, `metadata`. Re-parsing a blueprint reproduces every Scenario
//! field (the derived `category.full_path` and the metadata are ignored on
//! input).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scenario::Scenario;

use super::ExportError;

pub const BLUEPRINT_VERSION: &str = "2.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub created_at: DateTime<Utc>,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    #[serde(flatten)]
    pub scenario: Scenario,
    pub metadata: Metadata,
}

/// Stamp a Scenario with generation metadata.
pub fn make_blueprint(scenario: &Scenario) -> Blueprint {
    Blueprint {
        scenario: scenario.clone(),
        metadata: Metadata {
            created_at: Utc::now(),
            version: BLUEPRINT_VERSION.to_string(),
        },
    }
}

/// Pretty-printed blueprint JSON for a Scenario.
pub fn blueprint_json(scenario: &Scenario) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&make_blueprint(scenario))?)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
