//! Flow Graph Builder — the one nontrivial transformation in the crate.
//!
//! Maps a validated Scenario to a GraphDescription. Pure and total: invalid
//! or empty input degrades to placeholder nodes ("N/A", "No Defined
//! Suppliers") instead of failing. The only reportable condition is
//! "nothing enabled", which callers must surface as a warning rather than
//! drawing an empty diagram.

use tracing::debug;

use crate::scenario::{LogicType, Scenario, SupplierType, SupplierTypeFilter};

use super::{GraphDescription, NodeShape};

// ─── BuildOutcome ────────────────────────────────────────────────────────────

/// Result of a build. Never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// A renderable decision graph.
    Diagram(GraphDescription),
    /// No feature toggle is on. Carries only the universal Start /
    /// CheckTaxonomy pair; callers must warn instead of rendering.
    NothingEnabled(GraphDescription),
}

impl BuildOutcome {
    /// The graph to draw, if any.
    pub fn diagram(&self) -> Option<&GraphDescription> {
        match self {
            BuildOutcome::Diagram(g) => Some(g),
            BuildOutcome::NothingEnabled(_) => None,
        }
    }

    /// The underlying description regardless of outcome.
    pub fn description(&self) -> &GraphDescription {
        match self {
            BuildOutcome::Diagram(g) | BuildOutcome::NothingEnabled(g) => g,
        }
    }
}

// ─── Label sanitization ──────────────────────────────────────────────────────

/// Replace diagram-unsafe characters with safe equivalents: `:` → `-`,
/// `"` → `'`, `<`/`>` → HTML entities (so category paths still render with
/// their separators).
pub fn sanitize_label(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            ':' => out.push('-'),
            '"' => out.push('\''),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

// ─── Builder ─────────────────────────────────────────────────────────────────

/// A supplier row that survived filtering, with its synthesized node id.
struct SuppNode {
    id: String,
    supplier_type: SupplierType,
    logic_type: LogicType,
}

struct Builder<'a> {
    s: &'a Scenario,
    g: GraphDescription,
    supp: Vec<SuppNode>,
}

/// Build the decision graph for a Scenario.
pub fn build_graph(scenario: &Scenario) -> BuildOutcome {
    Builder::new(scenario).build()
}

impl<'a> Builder<'a> {
    fn new(s: &'a Scenario) -> Self {
        Self {
            s,
            g: GraphDescription::new(),
            supp: Vec::new(),
        }
    }

    fn build(mut self) -> BuildOutcome {
        // Universal spine: always present, even when nothing is enabled.
        self.g.add_node("Start", "User Request", NodeShape::Stadium);
        self.g
            .add_node("CheckTaxonomy", "Taxonomy Match?", NodeShape::Diamond);
        self.g.add_edge("Start", "CheckTaxonomy");

        if self.s.nothing_enabled() {
            debug!("nothing enabled, skipping graph body");
            return BuildOutcome::NothingEnabled(self.g);
        }

        let cat_label = if self.s.category.is_empty() {
            "N/A".to_string()
        } else {
            sanitize_label(&self.s.category.full_path())
        };
        self.g
            .add_node("CheckTaxonomyYes", cat_label, NodeShape::Rectangle);
        self.g
            .add_labeled_edge("CheckTaxonomy", "CheckTaxonomyYes", "Yes");
        self.g.add_node("Reject", "Reject Request", NodeShape::Rectangle);
        self.g.add_labeled_edge("CheckTaxonomy", "Reject", "No");

        self.supplier_nodes();
        if self.s.supplier_pool.enabled {
            if self.supp.is_empty() {
                self.empty_pool_routing();
            } else {
                self.pool_routing();
                self.logic_routing();
            }
        } else {
            self.no_pool_routing();
        }

        if self.s.stream2.enabled {
            self.sourcing_box();
        }
        self.styles();

        debug!(
            nodes = self.g.nodes.len(),
            edges = self.g.edges.len(),
            suppliers = self.supp.len(),
            "built flow graph"
        );
        BuildOutcome::Diagram(self.g)
    }

    /// One node per supplier row that has a name and passes the type
    /// filter. Ids derive from the row's position in the input sequence.
    fn supplier_nodes(&mut self) {
        if !self.s.supplier_pool.enabled {
            return;
        }
        for (idx, row) in self.s.supplier_pool.filtered() {
            if !row.has_name() {
                continue;
            }
            let id = format!("Supp{idx}");
            let label = format!(
                "{} {}\n{}\n{}\nTender {}",
                row.supplier_type,
                sanitize_label(row.name.trim()),
                sanitize_label(&row.buying_channel),
                row.logic_type,
                row.tender_required,
            );
            self.g.add_node(&id, label, NodeShape::Rectangle);
            self.supp.push(SuppNode {
                id,
                supplier_type: row.supplier_type,
                logic_type: row.logic_type,
            });
        }
    }

    fn local_ids(&self) -> Vec<String> {
        self.supp
            .iter()
            .filter(|n| n.supplier_type == SupplierType::Local)
            .map(|n| n.id.clone())
            .collect()
    }

    fn global_ids(&self) -> Vec<String> {
        self.supp
            .iter()
            .filter(|n| n.supplier_type == SupplierType::Global)
            .map(|n| n.id.clone())
            .collect()
    }

    /// Pool hub chained through its suppliers in input order (a linear
    /// walk, not a star).
    fn chain(&mut self, hub: &str, ids: &[String]) {
        let mut prev = hub.to_string();
        for id in ids {
            self.g.add_edge(prev.clone(), id.clone());
            prev = id.clone();
        }
    }

    /// Pool enabled with at least one surviving supplier node.
    fn pool_routing(&mut self) {
        match self.s.supplier_pool.supplier_type_filter {
            SupplierTypeFilter::Local => {
                self.g.add_node("LocalPool", "Local Pool", NodeShape::Circle);
                self.g.add_edge("CheckTaxonomyYes", "LocalPool");
                let locals = self.local_ids();
                self.chain("LocalPool", &locals);
            }
            SupplierTypeFilter::Global => {
                self.g
                    .add_node("GlobalPool", "Global Pool", NodeShape::Circle);
                self.g.add_edge("CheckTaxonomyYes", "GlobalPool");
                let globals = self.global_ids();
                self.chain("GlobalPool", &globals);
            }
            SupplierTypeFilter::All => {
                self.g.add_node(
                    "CheckSuppType",
                    "Local or Global Supplier?",
                    NodeShape::Diamond,
                );
                self.g.add_edge("CheckTaxonomyYes", "CheckSuppType");
                let locals = self.local_ids();
                if !locals.is_empty() {
                    self.g.add_node("LocalPool", "Local Pool", NodeShape::Circle);
                    self.g
                        .add_labeled_edge("CheckSuppType", "LocalPool", "Local");
                    self.chain("LocalPool", &locals);
                }
                let globals = self.global_ids();
                if !globals.is_empty() {
                    self.g
                        .add_node("GlobalPool", "Global Pool", NodeShape::Circle);
                    self.g
                        .add_labeled_edge("CheckSuppType", "GlobalPool", "Global");
                    self.chain("GlobalPool", &globals);
                }
            }
        }
    }

    /// Route each surviving supplier node by its logic type.
    fn logic_routing(&mut self) {
        let bc_enabled = self.s.buying_channels.enabled;
        let buying: Vec<String> = self
            .supp
            .iter()
            .filter(|n| n.logic_type == LogicType::BuyingChannel)
            .map(|n| n.id.clone())
            .collect();
        let sourcing: Vec<String> = self
            .supp
            .iter()
            .filter(|n| n.logic_type == LogicType::Sourcing)
            .map(|n| n.id.clone())
            .collect();

        if bc_enabled && !buying.is_empty() {
            self.g
                .add_node("BuyChannel", "Use Buying Channel", NodeShape::Rectangle);
            for id in &buying {
                self.g.add_edge(id.clone(), "BuyChannel");
            }
        } else if !buying.is_empty() {
            // Buying channels disabled: those suppliers fall through.
            for id in buying.clone() {
                let target = self.sourcing_or_reject();
                self.g.add_edge(id, target);
            }
        }

        for id in sourcing {
            let target = self.sourcing_or_reject();
            self.g.add_edge(id, target);
        }

        if bc_enabled && !buying.is_empty() && self.s.stream2.enabled {
            self.g.add_dashed_edge("BuyChannel", "Sourcing", "Failover");
        }
    }

    /// Pool enabled but the filtered set is empty: emit the placeholder and
    /// hand off to the no-supplier fallback chain.
    fn empty_pool_routing(&mut self) {
        match self.s.supplier_pool.supplier_type_filter {
            SupplierTypeFilter::Local => {
                self.g.add_node("LocalPool", "Local Pool", NodeShape::Circle);
                self.g.add_edge("CheckTaxonomyYes", "LocalPool");
                self.g
                    .add_node("NoLocalSupp", "No Local Suppliers", NodeShape::Rectangle);
                self.g.add_edge("LocalPool", "NoLocalSupp");
                self.fallback_chain("CheckTaxonomyYes", None);
            }
            SupplierTypeFilter::Global => {
                self.g
                    .add_node("GlobalPool", "Global Pool", NodeShape::Circle);
                self.g.add_edge("CheckTaxonomyYes", "GlobalPool");
                self.g
                    .add_node("NoGlobalSupp", "No Global Suppliers", NodeShape::Rectangle);
                self.g.add_edge("GlobalPool", "NoGlobalSupp");
                self.fallback_chain("CheckTaxonomyYes", None);
            }
            SupplierTypeFilter::All => {
                self.g.add_node(
                    "CheckSuppType",
                    "Local or Global Supplier?",
                    NodeShape::Diamond,
                );
                self.g.add_edge("CheckTaxonomyYes", "CheckSuppType");
                self.g
                    .add_node("NoSupp", "No Defined Suppliers", NodeShape::Rectangle);
                self.g.add_labeled_edge("CheckSuppType", "NoSupp", "Any");
                self.fallback_chain("CheckSuppType", Some("Any"));
            }
        }
    }

    /// Pool disabled: skip straight to the next enabled logic.
    fn no_pool_routing(&mut self) {
        self.g
            .add_node("CheckNextLogic", "Next Logic?", NodeShape::Diamond);
        self.g.add_edge("CheckTaxonomyYes", "CheckNextLogic");
        if self.s.buying_channels.enabled {
            self.g
                .add_node("BuyChannel", "Use Buying Channel", NodeShape::Rectangle);
            self.g
                .add_labeled_edge("CheckNextLogic", "BuyChannel", "Buying Channels");
            self.fallback_chain("CheckNextLogic", Some("No Suppliers"));
        } else if self.s.stream2.enabled {
            self.g
                .add_labeled_edge("CheckNextLogic", "Sourcing", "Sourcing");
        } else {
            self.g
                .add_node("RejectAll", "Reject - All Logic Disabled", NodeShape::Rectangle);
            self.g.add_edge("CheckNextLogic", "RejectAll");
        }
    }

    /// The marketplace / no-supplier fallback: CheckSupp and, when allowed,
    /// the capped marketplace sub-chain.
    fn fallback_chain(&mut self, feed_from: &str, feed_label: Option<&str>) {
        self.g.add_node("CheckSupp", "Suppliers?", NodeShape::Diamond);
        match feed_label {
            Some(label) => self.g.add_labeled_edge(feed_from, "CheckSupp", label),
            None => self.g.add_edge(feed_from, "CheckSupp"),
        }

        let bc = &self.s.buying_channels;
        if bc.enabled && bc.allow_marketplace {
            self.g
                .add_node("CheckMKP", "Marketplace?", NodeShape::Diamond);
            self.g.add_labeled_edge("CheckSupp", "CheckMKP", "No");
            self.g.add_node(
                "MKPLimit",
                format!("&lt; £{}?", bc.marketplace_limit),
                NodeShape::Diamond,
            );
            self.g.add_labeled_edge("CheckMKP", "MKPLimit", "Yes");
            self.g
                .add_node("GoMKP", "Buy on Marketplace", NodeShape::Rectangle);
            self.g.add_labeled_edge("MKPLimit", "GoMKP", "Yes");
            let target = self.sourcing_or_reject();
            self.g.add_labeled_edge("MKPLimit", target.clone(), "No");
            self.g.add_labeled_edge("CheckMKP", target, "No");
        } else if bc.enabled {
            let target = self.sourcing_or_reject();
            self.g.add_labeled_edge("CheckSupp", target, "No");
        } else if self.s.stream2.enabled {
            self.g.add_labeled_edge("CheckSupp", "Sourcing", "No");
        } else {
            self.g
                .add_node("RejectAll", "Reject - All Logic Disabled", NodeShape::Rectangle);
            self.g.add_labeled_edge("CheckSupp", "RejectAll", "No");
        }
    }

    /// Edge target for "hand over to sourcing": the Sourcing entry when
    /// stream 2 is enabled, otherwise a terminal reject node.
    fn sourcing_or_reject(&mut self) -> String {
        if self.s.stream2.enabled {
            "Sourcing".to_string()
        } else {
            self.g.add_node(
                "RejectSourcing",
                "Reject - Sourcing Disabled",
                NodeShape::Rectangle,
            )
        }
    }

    /// The grouped SourcingBox subgraph with the tactical/strategic split.
    fn sourcing_box(&mut self) {
        let s2 = &self.s.stream2;
        self.g.add_node("Sourcing", "Start Sourcing", NodeShape::Rounded);
        self.g.add_node(
            "CheckThresh",
            format!("&gt; £{}?", s2.tactical_threshold),
            NodeShape::Diamond,
        );
        self.g.add_node(
            "Tactical",
            format!("Tactical - {}", sanitize_label(&s2.tactical_action.to_string())),
            NodeShape::Rectangle,
        );
        self.g.add_node(
            "Strategic",
            format!("Strategic - {}", sanitize_label(&s2.strategic_owner.to_string())),
            NodeShape::Rectangle,
        );
        self.g.add_edge("Sourcing", "CheckThresh");
        self.g.add_labeled_edge("CheckThresh", "Tactical", "No");
        self.g.add_labeled_edge("CheckThresh", "Strategic", "Yes");
        self.g.add_subgraph(
            "SourcingBox",
            "Sourcing Logic",
            vec![
                "Sourcing".to_string(),
                "CheckThresh".to_string(),
                "Tactical".to_string(),
                "Strategic".to_string(),
            ],
        );
    }

    /// Style classes, assigned only to ids actually present.
    fn styles(&mut self) {
        self.g
            .define_class("green", "fill:#dcfce7,stroke:#16a34a,stroke-width:2px");
        self.g
            .define_class("red", "fill:#fee2e2,stroke:#ef4444,stroke-width:2px");
        self.g
            .define_class("blue", "fill:#dbeafe,stroke:#3b82f6,stroke-width:2px");
        self.g
            .define_class("yellow", "fill:#fef3c7,stroke:#f59e0b,stroke-width:2px");

        let mut green: Vec<String> = self.supp.iter().map(|n| n.id.clone()).collect();
        if self.g.has_node("GoMKP") {
            green.push("GoMKP".to_string());
        }
        self.g.assign_class("green", green);

        let mut red = Vec::new();
        for id in ["Tactical", "Strategic", "Reject", "RejectSourcing", "RejectAll"] {
            if self.g.has_node(id) {
                red.push(id.to_string());
            }
        }
        self.g.assign_class("red", red);

        let mut blue = vec!["CheckTaxonomy".to_string()];
        if self.g.has_node("CheckSuppType") {
            blue.push("CheckSuppType".to_string());
        }
        self.g.assign_class("blue", blue);
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::SupplierRow;

    #[test]
    fn test_sanitize_label() {
        assert_eq!(sanitize_label("a:b"), "a-b");
        assert_eq!(sanitize_label("say \"hi\""), "say 'hi'");
        assert_eq!(sanitize_label("a<b>c"), "a&lt;b&gt;c");
        assert_eq!(sanitize_label("plain"), "plain");
    }

    #[test]
    fn test_universal_spine_always_present() {
        let s = Scenario::new();
        let out = build_graph(&s);
        let g = out.description();
        assert!(g.has_node("Start"));
        assert!(g.has_node("CheckTaxonomy"));
        assert!(g.has_edge("Start", "CheckTaxonomy"));
    }

    #[test]
    fn test_category_node_na_when_empty() {
        let s = Scenario::new();
        let out = build_graph(&s);
        let g = out.description();
        assert_eq!(g.node("CheckTaxonomyYes").unwrap().label, "N/A");
    }

    #[test]
    fn test_supplier_label_format() {
        let mut s = Scenario::new();
        let mut row = SupplierRow::named("Acme");
        row.buying_channel = "Punch-out".to_string();
        s.supplier_pool.suppliers = vec![row];
        let out = build_graph(&s);
        let g = out.description();
        assert_eq!(
            g.node("Supp0").unwrap().label,
            "Local Acme\nPunch-out\nBuying Channel\nTender No"
        );
    }

    #[test]
    fn test_placeholder_when_pool_enabled_but_empty() {
        let mut s = Scenario::new();
        s.supplier_pool.suppliers = vec![SupplierRow::named("   ")];
        let out = build_graph(&s);
        let g = out.description();
        assert!(g.has_node("NoSupp"));
        assert!(!g.has_node("Supp0"));
    }

    #[test]
    fn test_pool_disabled_routes_to_next_logic() {
        let mut s = Scenario::new();
        s.supplier_pool.enabled = false;
        s.buying_channels.enabled = false;
        let out = build_graph(&s);
        let g = out.description();
        assert!(g.has_edge("CheckTaxonomyYes", "CheckNextLogic"));
        assert!(g.has_edge("CheckNextLogic", "Sourcing"));
        assert!(!g.has_node("BuyChannel"));
    }
}
