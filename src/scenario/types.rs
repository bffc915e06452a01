//! Data structures for a procurement logic Scenario.
//!
//! A Scenario is the immutable input of the flow graph builder: five
//! sections (scope, category, supplier pool, buying channels, stream 2)
//! that also mirror the top-level keys of the blueprint JSON. Blank row
//! fields resolve to defaults at the type boundary, so downstream code
//! never sees an unclassified supplier.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

// ─── SupplierType ────────────────────────────────────────────────────────────

/// Local vs Global supplier. Blank input resolves to Local.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SupplierType {
    #[default]
    Local,
    Global,
}

impl From<String> for SupplierType {
    fn from(s: String) -> Self {
        match s.trim() {
            "Global" => SupplierType::Global,
            _ => SupplierType::Local,
        }
    }
}

impl From<SupplierType> for String {
    fn from(t: SupplierType) -> Self {
        t.to_string()
    }
}

impl fmt::Display for SupplierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupplierType::Local => write!(f, "Local"),
            SupplierType::Global => write!(f, "Global"),
        }
    }
}

// ─── LogicType ───────────────────────────────────────────────────────────────

/// Which procurement route a supplier row takes. Blank input resolves to
/// BuyingChannel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogicType {
    #[default]
    BuyingChannel,
    Sourcing,
}

impl From<String> for LogicType {
    fn from(s: String) -> Self {
        match s.trim() {
            "Sourcing" => LogicType::Sourcing,
            _ => LogicType::BuyingChannel,
        }
    }
}

impl From<LogicType> for String {
    fn from(t: LogicType) -> Self {
        t.to_string()
    }
}

impl fmt::Display for LogicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicType::BuyingChannel => write!(f, "Buying Channel"),
            LogicType::Sourcing => write!(f, "Sourcing"),
        }
    }
}

// ─── TenderRequired ──────────────────────────────────────────────────────────

/// Tender requirement for a supplier row. Blank input resolves to No.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TenderRequired {
    #[default]
    No,
    EveryTime,
    AboveThreshold,
}

impl From<String> for TenderRequired {
    fn from(s: String) -> Self {
        match s.trim() {
            "Yes - Every Time" => TenderRequired::EveryTime,
            "Yes - Above Threshold" => TenderRequired::AboveThreshold,
            _ => TenderRequired::No,
        }
    }
}

impl From<TenderRequired> for String {
    fn from(t: TenderRequired) -> Self {
        t.to_string()
    }
}

impl fmt::Display for TenderRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TenderRequired::No => write!(f, "No"),
            TenderRequired::EveryTime => write!(f, "Yes - Every Time"),
            TenderRequired::AboveThreshold => write!(f, "Yes - Above Threshold"),
        }
    }
}

// ─── SupplierTypeFilter ──────────────────────────────────────────────────────

/// Which suppliers participate in graph construction and in the exported
/// supplier list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SupplierTypeFilter {
    #[default]
    All,
    Local,
    Global,
}

impl SupplierTypeFilter {
    /// Does a supplier of the given type pass this filter?
    pub fn matches(self, supplier_type: SupplierType) -> bool {
        match self {
            SupplierTypeFilter::All => true,
            SupplierTypeFilter::Local => supplier_type == SupplierType::Local,
            SupplierTypeFilter::Global => supplier_type == SupplierType::Global,
        }
    }
}

impl From<String> for SupplierTypeFilter {
    fn from(s: String) -> Self {
        match s.trim() {
            "Local" => SupplierTypeFilter::Local,
            "Global" => SupplierTypeFilter::Global,
            _ => SupplierTypeFilter::All,
        }
    }
}

impl From<SupplierTypeFilter> for String {
    fn from(t: SupplierTypeFilter) -> Self {
        t.to_string()
    }
}

impl fmt::Display for SupplierTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupplierTypeFilter::All => write!(f, "All"),
            SupplierTypeFilter::Local => write!(f, "Local"),
            SupplierTypeFilter::Global => write!(f, "Global"),
        }
    }
}

// ─── TacticalAction ──────────────────────────────────────────────────────────

/// Owner of below-threshold sourcing requests. Unknown strings are kept
/// verbatim so blueprint JSON round-trips without loss.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TacticalAction {
    Fairmarkit,
    ThreeBids,
    SpotBuyDesk,
    NoTouchPo,
    #[default]
    NotApplicable,
    Other(String),
}

impl From<String> for TacticalAction {
    fn from(s: String) -> Self {
        match s.trim() {
            "Fairmarkit (Autonomous)" => TacticalAction::Fairmarkit,
            "3-Bids (Local Buyer)" => TacticalAction::ThreeBids,
            "Spot Buy Desk" => TacticalAction::SpotBuyDesk,
            "No-Touch PO" => TacticalAction::NoTouchPo,
            "N/A" | "" => TacticalAction::NotApplicable,
            other => TacticalAction::Other(other.to_string()),
        }
    }
}

impl From<TacticalAction> for String {
    fn from(t: TacticalAction) -> Self {
        t.to_string()
    }
}

impl fmt::Display for TacticalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TacticalAction::Fairmarkit => write!(f, "Fairmarkit (Autonomous)"),
            TacticalAction::ThreeBids => write!(f, "3-Bids (Local Buyer)"),
            TacticalAction::SpotBuyDesk => write!(f, "Spot Buy Desk"),
            TacticalAction::NoTouchPo => write!(f, "No-Touch PO"),
            TacticalAction::NotApplicable => write!(f, "N/A"),
            TacticalAction::Other(s) => write!(f, "{s}"),
        }
    }
}

// ─── StrategicOwner ──────────────────────────────────────────────────────────

/// Owner of above-threshold sourcing requests. Unknown strings are kept
/// verbatim so blueprint JSON round-trips without loss.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StrategicOwner {
    GlobalCategoryLead,
    SourcingManager,
    RegionalHub,
    RfpTeam,
    #[default]
    NotApplicable,
    Other(String),
}

impl From<String> for StrategicOwner {
    fn from(s: String) -> Self {
        match s.trim() {
            "Global Category Lead" => StrategicOwner::GlobalCategoryLead,
            "Sourcing Manager" => StrategicOwner::SourcingManager,
            "Regional Hub" => StrategicOwner::RegionalHub,
            "RFP Team" => StrategicOwner::RfpTeam,
            "N/A" | "" => StrategicOwner::NotApplicable,
            other => StrategicOwner::Other(other.to_string()),
        }
    }
}

impl From<StrategicOwner> for String {
    fn from(t: StrategicOwner) -> Self {
        t.to_string()
    }
}

impl fmt::Display for StrategicOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategicOwner::GlobalCategoryLead => write!(f, "Global Category Lead"),
            StrategicOwner::SourcingManager => write!(f, "Sourcing Manager"),
            StrategicOwner::RegionalHub => write!(f, "Regional Hub"),
            StrategicOwner::RfpTeam => write!(f, "RFP Team"),
            StrategicOwner::NotApplicable => write!(f, "N/A"),
            StrategicOwner::Other(s) => write!(f, "{s}"),
        }
    }
}

// ─── Scope ───────────────────────────────────────────────────────────────────

/// Geography scope: where the captured logic applies.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scope {
    pub region: Option<String>,
    pub cluster: Option<String>,
    pub end_markets: Vec<String>,
    pub business_user_markets: Vec<String>,
    pub company_code: Option<String>,
}

// ─── Category ────────────────────────────────────────────────────────────────

/// Four-level category selection (each level filtered by the previous).
///
/// `full_path` in the blueprint JSON is derived, never stored; it is
/// recomputed on every serialization and ignored on input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Category {
    pub l1: Vec<String>,
    pub l2: Vec<String>,
    pub l3: Vec<String>,
    pub l4: Vec<String>,
}

impl Category {
    /// True when no selection was made at any level.
    pub fn is_empty(&self) -> bool {
        self.l1.is_empty() && self.l2.is_empty() && self.l3.is_empty() && self.l4.is_empty()
    }

    /// Joined path string: levels joined with " > ", multi-selections within
    /// a level joined with ", ", empty levels rendered as N/A.
    pub fn full_path(&self) -> String {
        let level = |sel: &[String]| -> String {
            if sel.is_empty() {
                "N/A".to_string()
            } else {
                sel.join(", ")
            }
        };
        format!(
            "{} > {} > {} > {}",
            level(&self.l1),
            level(&self.l2),
            level(&self.l3),
            level(&self.l4)
        )
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Category", 5)?;
        s.serialize_field("full_path", &self.full_path())?;
        s.serialize_field("l1", &self.l1)?;
        s.serialize_field("l2", &self.l2)?;
        s.serialize_field("l3", &self.l3)?;
        s.serialize_field("l4", &self.l4)?;
        s.end()
    }
}

// ─── Supplier pool ───────────────────────────────────────────────────────────

/// One row of the supplier pool table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplierRow {
    pub name: String,
    pub vendor_code: String,
    pub supplier_type: SupplierType,
    pub logic_type: LogicType,
    pub buying_channel: String,
    pub tender_required: TenderRequired,
    pub comments: String,
}

impl SupplierRow {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Rows with a blank name never contribute a node.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplierPool {
    pub enabled: bool,
    pub suppliers: Vec<SupplierRow>,
    pub supplier_type_filter: SupplierTypeFilter,
}

impl Default for SupplierPool {
    fn default() -> Self {
        Self {
            enabled: true,
            suppliers: Vec::new(),
            supplier_type_filter: SupplierTypeFilter::All,
        }
    }
}

impl SupplierPool {
    /// Rows passing the supplier-type filter, keeping their original index.
    pub fn filtered(&self) -> impl Iterator<Item = (usize, &SupplierRow)> {
        self.suppliers
            .iter()
            .enumerate()
            .filter(|(_, row)| self.supplier_type_filter.matches(row.supplier_type))
    }
}

// ─── Buying channels ─────────────────────────────────────────────────────────

/// One row of the buying channels table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelRow {
    pub channel_type: String,
    pub supplier: String,
    pub vendor_code: String,
    pub link: String,
    pub comments: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuyingChannels {
    pub enabled: bool,
    pub channels: Vec<ChannelRow>,
    pub allow_marketplace: bool,
    /// Auto-approve limit in £; meaningful only when `enabled` and
    /// `allow_marketplace` are both set.
    pub marketplace_limit: u32,
}

impl Default for BuyingChannels {
    fn default() -> Self {
        Self {
            enabled: true,
            channels: Vec::new(),
            allow_marketplace: false,
            marketplace_limit: 0,
        }
    }
}

// ─── Stream 2 (sourcing logic) ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stream2 {
    pub enabled: bool,
    /// Tactical vs strategic split point in £.
    pub tactical_threshold: u32,
    pub tactical_action: TacticalAction,
    pub strategic_owner: StrategicOwner,
    pub instructions: String,
}

impl Default for Stream2 {
    fn default() -> Self {
        Self {
            enabled: true,
            tactical_threshold: 10_000,
            tactical_action: TacticalAction::default(),
            strategic_owner: StrategicOwner::default(),
            instructions: String::new(),
        }
    }
}

// ─── Scenario (top level) ────────────────────────────────────────────────────

/// The full set of user-entered choices. Rebuilt from scratch on every
/// edit; the builder never mutates it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub scope: Scope,
    pub category: Category,
    pub supplier_pool: SupplierPool,
    pub buying_channels: BuyingChannels,
    pub stream2: Stream2,
}

impl Scenario {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when none of the three feature toggles is on — the "nothing to
    /// render" condition.
    pub fn nothing_enabled(&self) -> bool {
        !self.supplier_pool.enabled && !self.buying_channels.enabled && !self.stream2.enabled
    }

    /// Parse a Scenario from JSON. Accepts both a bare scenario object and
    /// a full blueprint (the `metadata` key is ignored).
    pub fn from_json(src: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(src)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplier_type_blank_defaults_local() {
        assert_eq!(SupplierType::from(String::new()), SupplierType::Local);
        assert_eq!(SupplierType::from("  ".to_string()), SupplierType::Local);
        assert_eq!(SupplierType::from("Global".to_string()), SupplierType::Global);
        assert_eq!(SupplierType::from("weird".to_string()), SupplierType::Local);
    }

    #[test]
    fn test_logic_type_blank_defaults_buying_channel() {
        assert_eq!(LogicType::from(String::new()), LogicType::BuyingChannel);
        assert_eq!(LogicType::from("Sourcing".to_string()), LogicType::Sourcing);
    }

    #[test]
    fn test_tender_required_mapping() {
        assert_eq!(TenderRequired::from(String::new()), TenderRequired::No);
        assert_eq!(
            TenderRequired::from("Yes - Every Time".to_string()),
            TenderRequired::EveryTime
        );
        assert_eq!(
            TenderRequired::from("Yes - Above Threshold".to_string()),
            TenderRequired::AboveThreshold
        );
        assert_eq!(TenderRequired::EveryTime.to_string(), "Yes - Every Time");
    }

    #[test]
    fn test_filter_matches() {
        assert!(SupplierTypeFilter::All.matches(SupplierType::Local));
        assert!(SupplierTypeFilter::All.matches(SupplierType::Global));
        assert!(SupplierTypeFilter::Local.matches(SupplierType::Local));
        assert!(!SupplierTypeFilter::Local.matches(SupplierType::Global));
        assert!(!SupplierTypeFilter::Global.matches(SupplierType::Local));
    }

    #[test]
    fn test_tactical_action_keeps_unknown_strings() {
        let a = TacticalAction::from("Reverse Auction".to_string());
        assert_eq!(a, TacticalAction::Other("Reverse Auction".to_string()));
        assert_eq!(a.to_string(), "Reverse Auction");
    }

    #[test]
    fn test_category_full_path() {
        let cat = Category {
            l1: vec!["A".into(), "B".into()],
            l2: vec!["C".into()],
            l3: vec![],
            l4: vec![],
        };
        assert_eq!(cat.full_path(), "A, B > C > N/A > N/A");
    }

    #[test]
    fn test_category_empty_path() {
        let cat = Category::default();
        assert!(cat.is_empty());
        assert_eq!(cat.full_path(), "N/A > N/A > N/A > N/A");
    }

    #[test]
    fn test_scenario_defaults() {
        let s = Scenario::new();
        assert!(s.supplier_pool.enabled);
        assert!(s.buying_channels.enabled);
        assert!(s.stream2.enabled);
        assert_eq!(s.stream2.tactical_threshold, 10_000);
        assert!(!s.nothing_enabled());
    }

    #[test]
    fn test_nothing_enabled() {
        let mut s = Scenario::new();
        s.supplier_pool.enabled = false;
        s.buying_channels.enabled = false;
        s.stream2.enabled = false;
        assert!(s.nothing_enabled());
    }

    #[test]
    fn test_filtered_keeps_original_indices() {
        let mut s = Scenario::new();
        s.supplier_pool.suppliers = vec![
            SupplierRow {
                supplier_type: SupplierType::Global,
                ..SupplierRow::named("G1")
            },
            SupplierRow::named("L1"),
            SupplierRow {
                supplier_type: SupplierType::Global,
                ..SupplierRow::named("G2")
            },
        ];
        s.supplier_pool.supplier_type_filter = SupplierTypeFilter::Global;
        let idx: Vec<usize> = s.supplier_pool.filtered().map(|(i, _)| i).collect();
        assert_eq!(idx, vec![0, 2]);
    }

    #[test]
    fn test_scenario_json_accepts_blank_row_fields() {
        let src = r#"{
            "supplier_pool": {
                "enabled": true,
                "suppliers": [
                    {"name": "Acme", "supplier_type": "", "logic_type": "", "tender_required": ""}
                ],
                "supplier_type_filter": "All"
            }
        }"#;
        let s = Scenario::from_json(src).unwrap();
        let row = &s.supplier_pool.suppliers[0];
        assert_eq!(row.supplier_type, SupplierType::Local);
        assert_eq!(row.logic_type, LogicType::BuyingChannel);
        assert_eq!(row.tender_required, TenderRequired::No);
    }
}
