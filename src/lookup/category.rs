//! Category lookup: L1 → L2 → L3 → L4, each level filtered by the
//! selections at the previous level.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;

use super::{LookupError, defaults};

/// One row of a category table. Rows are only usable when all four levels
/// are non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatRow {
    pub l1: String,
    pub l2: String,
    pub l3: String,
    pub l4: String,
}

impl CatRow {
    pub fn new(
        l1: impl Into<String>,
        l2: impl Into<String>,
        l3: impl Into<String>,
        l4: impl Into<String>,
    ) -> Self {
        Self {
            l1: l1.into(),
            l2: l2.into(),
            l3: l3.into(),
            l4: l4.into(),
        }
    }
}

/// Tree-shaped category lookup. Option lists come out sorted and deduped.
#[derive(Debug, Clone, Default)]
pub struct CatTable {
    tree: BTreeMap<String, BTreeMap<String, BTreeMap<String, Vec<String>>>>,
}

impl CatTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed built-in table used when no external table is loaded.
    pub fn builtin() -> Self {
        defaults::default_cat()
    }

    pub fn from_rows<I: IntoIterator<Item = CatRow>>(rows: I) -> Self {
        let mut table = Self::new();
        for row in rows {
            table.insert(row);
        }
        table
    }

    /// Insert a row; rows with any blank level are skipped.
    pub fn insert(&mut self, row: CatRow) {
        let (l1, l2, l3, l4) = (
            row.l1.trim(),
            row.l2.trim(),
            row.l3.trim(),
            row.l4.trim(),
        );
        if l1.is_empty() || l2.is_empty() || l3.is_empty() || l4.is_empty() {
            return;
        }
        let leaves = self
            .tree
            .entry(l1.to_string())
            .or_default()
            .entry(l2.to_string())
            .or_default()
            .entry(l3.to_string())
            .or_default();
        if !leaves.iter().any(|l| l == l4) {
            leaves.push(l4.to_string());
        }
    }

    /// Load from CSV with headers `L1`, `L2`, `L3`, `L4`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, LookupError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers = rdr.headers()?.clone();
        let col = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| LookupError::MissingColumn(name.to_string()))
        };
        let cols = [col("L1")?, col("L2")?, col("L3")?, col("L4")?];
        let mut table = Self::new();
        for record in rdr.records() {
            let record = record?;
            let field = |i: usize| record.get(i).unwrap_or("").to_string();
            table.insert(CatRow {
                l1: field(cols[0]),
                l2: field(cols[1]),
                l3: field(cols[2]),
                l4: field(cols[3]),
            });
        }
        Ok(table)
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn l1_options(&self) -> Vec<&str> {
        self.tree.keys().map(String::as_str).collect()
    }

    /// L2 options under the selected L1s (sorted union).
    pub fn l2_options(&self, l1_sel: &[&str]) -> Vec<&str> {
        let mut out = BTreeSet::new();
        for l1 in l1_sel {
            if let Some(l2_map) = self.tree.get(*l1) {
                out.extend(l2_map.keys().map(String::as_str));
            }
        }
        out.into_iter().collect()
    }

    /// L3 options under the selected L1/L2 pairs (sorted union).
    pub fn l3_options(&self, l1_sel: &[&str], l2_sel: &[&str]) -> Vec<&str> {
        let mut out = BTreeSet::new();
        for l1 in l1_sel {
            let Some(l2_map) = self.tree.get(*l1) else { continue };
            for l2 in l2_sel {
                if let Some(l3_map) = l2_map.get(*l2) {
                    out.extend(l3_map.keys().map(String::as_str));
                }
            }
        }
        out.into_iter().collect()
    }

    /// L4 options under the selected L1/L2/L3 triples (sorted union).
    pub fn l4_options(&self, l1_sel: &[&str], l2_sel: &[&str], l3_sel: &[&str]) -> Vec<&str> {
        let mut out = BTreeSet::new();
        for l1 in l1_sel {
            let Some(l2_map) = self.tree.get(*l1) else { continue };
            for l2 in l2_sel {
                let Some(l3_map) = l2_map.get(*l2) else { continue };
                for l3 in l3_sel {
                    if let Some(leaves) = l3_map.get(*l3) {
                        out.extend(leaves.iter().map(String::as_str));
                    }
                }
            }
        }
        out.into_iter().collect()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
