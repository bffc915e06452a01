//! Geography lookup: Region → Cluster → End Market → company codes.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;

use super::{LookupError, defaults};

/// One row of a geography table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeoRow {
    pub region: String,
    pub cluster: String,
    pub end_market: String,
    pub company_code: String,
}

impl GeoRow {
    pub fn new(
        region: impl Into<String>,
        cluster: impl Into<String>,
        end_market: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            cluster: cluster.into(),
            end_market: end_market.into(),
            company_code: String::new(),
        }
    }
}

/// Tree-shaped geography lookup. Option lists come out sorted and deduped.
#[derive(Debug, Clone, Default)]
pub struct GeoTable {
    tree: BTreeMap<String, BTreeMap<String, BTreeMap<String, Vec<String>>>>,
}

impl GeoTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed built-in table used when no external table is loaded.
    pub fn builtin() -> Self {
        defaults::default_geo()
    }

    pub fn from_rows<I: IntoIterator<Item = GeoRow>>(rows: I) -> Self {
        let mut table = Self::new();
        for row in rows {
            table.insert(row);
        }
        table
    }

    /// Insert a row. Partially blank fields substitute "Unknown"; a fully
    /// blank row is skipped.
    pub fn insert(&mut self, row: GeoRow) {
        let region = row.region.trim();
        let cluster = row.cluster.trim();
        let market = row.end_market.trim();
        if region.is_empty() && cluster.is_empty() && market.is_empty() {
            return;
        }
        let or_unknown = |s: &str| {
            if s.is_empty() {
                "Unknown".to_string()
            } else {
                s.to_string()
            }
        };
        let codes = self
            .tree
            .entry(or_unknown(region))
            .or_default()
            .entry(or_unknown(cluster))
            .or_default()
            .entry(or_unknown(market))
            .or_default();
        let code = row.company_code.trim();
        if !code.is_empty() && !codes.iter().any(|c| c == code) {
            codes.push(code.to_string());
        }
    }

    /// Load from CSV with headers `Region`, `DRBU` (or `Cluster`),
    /// `End Market`, optional `Company Code`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, LookupError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers = rdr.headers()?.clone();
        let col = |name: &str| headers.iter().position(|h| h.trim() == name);
        let region_col = col("Region").ok_or_else(|| LookupError::MissingColumn("Region".into()))?;
        let cluster_col = col("DRBU")
            .or_else(|| col("Cluster"))
            .or_else(|| {
                headers.iter().position(|h| {
                    let l = h.to_lowercase();
                    l.contains("drbu") || l.contains("cluster")
                })
            })
            .ok_or_else(|| LookupError::MissingColumn("DRBU or Cluster".into()))?;
        let market_col =
            col("End Market").ok_or_else(|| LookupError::MissingColumn("End Market".into()))?;
        let code_col = col("Company Code");

        let mut table = Self::new();
        for record in rdr.records() {
            let record = record?;
            let field = |i: usize| record.get(i).unwrap_or("").to_string();
            table.insert(GeoRow {
                region: field(region_col),
                cluster: field(cluster_col),
                end_market: field(market_col),
                company_code: code_col.map(field).unwrap_or_default(),
            });
        }
        Ok(table)
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn regions(&self) -> Vec<&str> {
        self.tree.keys().map(String::as_str).collect()
    }

    pub fn clusters(&self, region: &str) -> Vec<&str> {
        self.tree
            .get(region)
            .map(|c| c.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn markets(&self, region: &str, cluster: &str) -> Vec<&str> {
        self.tree
            .get(region)
            .and_then(|c| c.get(cluster))
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Company codes across the selected markets of a cluster, sorted and
    /// deduped.
    pub fn company_codes(&self, region: &str, cluster: &str, markets: &[&str]) -> Vec<String> {
        let Some(cluster_map) = self.tree.get(region).and_then(|c| c.get(cluster)) else {
            return Vec::new();
        };
        let mut out = BTreeSet::new();
        for market in markets {
            if let Some(codes) = cluster_map.get(*market) {
                out.extend(codes.iter().cloned());
            }
        }
        out.into_iter().collect()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
