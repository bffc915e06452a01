//! Tabular export: the four CSV sheets of the original workbook
//! (Logic Matrix, Suppliers, Buying Channels, Summary).

use std::io::Write;

use crate::scenario::Scenario;

use super::ExportError;

fn join_or_na(values: &[String]) -> String {
    if values.is_empty() {
        "N/A".to_string()
    } else {
        values.join(", ")
    }
}

fn opt_or_na(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "N/A".to_string())
}

/// Field/Value sheet covering the whole Scenario.
pub fn write_logic_matrix<W: Write>(scenario: &Scenario, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    let rows: Vec<(&str, String)> = vec![
        ("Region", opt_or_na(&scenario.scope.region)),
        ("Cluster/DRBU", opt_or_na(&scenario.scope.cluster)),
        ("End Markets", join_or_na(&scenario.scope.end_markets)),
        (
            "Business User Markets",
            join_or_na(&scenario.scope.business_user_markets),
        ),
        ("Company Code", opt_or_na(&scenario.scope.company_code)),
        ("Category L1", join_or_na(&scenario.category.l1)),
        ("Category L2", join_or_na(&scenario.category.l2)),
        ("Category L3", join_or_na(&scenario.category.l3)),
        ("Category L4", join_or_na(&scenario.category.l4)),
        ("Category Full Path", scenario.category.full_path()),
        (
            "Supplier Pool Enabled",
            scenario.supplier_pool.enabled.to_string(),
        ),
        (
            "Supplier Type Filter",
            scenario.supplier_pool.supplier_type_filter.to_string(),
        ),
        (
            "Buying Channels Enabled",
            scenario.buying_channels.enabled.to_string(),
        ),
        (
            "Allow Marketplace",
            scenario.buying_channels.allow_marketplace.to_string(),
        ),
        (
            "Marketplace Limit",
            scenario.buying_channels.marketplace_limit.to_string(),
        ),
        ("Stream 2 Enabled", scenario.stream2.enabled.to_string()),
        (
            "Tactical Threshold",
            scenario.stream2.tactical_threshold.to_string(),
        ),
        (
            "Tactical Action",
            scenario.stream2.tactical_action.to_string(),
        ),
        (
            "Strategic Owner",
            scenario.stream2.strategic_owner.to_string(),
        ),
    ];
    wtr.write_record(["Field", "Value"])?;
    for (field, value) in rows {
        wtr.write_record([field, value.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Supplier sheet, post-filter per the scenario's supplier type filter.
pub fn write_suppliers<W: Write>(scenario: &Scenario, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        "Supplier Name",
        "Vendor Code",
        "Supplier Type",
        "Logic Type",
        "Buying Channel",
        "Tender Required",
        "Comments",
    ])?;
    for (_, row) in scenario.supplier_pool.filtered() {
        wtr.write_record([
            row.name.clone(),
            row.vendor_code.clone(),
            row.supplier_type.to_string(),
            row.logic_type.to_string(),
            row.buying_channel.clone(),
            row.tender_required.to_string(),
            row.comments.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Buying channels sheet.
pub fn write_channels<W: Write>(scenario: &Scenario, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Channel Type", "Supplier", "Vendor Code", "Link", "Comments"])?;
    for row in &scenario.buying_channels.channels {
        wtr.write_record([
            row.channel_type.as_str(),
            row.supplier.as_str(),
            row.vendor_code.as_str(),
            row.link.as_str(),
            row.comments.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Item/Count overview sheet.
pub fn write_summary<W: Write>(scenario: &Scenario, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Item", "Count"])?;
    let rows = [
        ("End Markets", scenario.scope.end_markets.len()),
        (
            "Business User Markets",
            scenario.scope.business_user_markets.len(),
        ),
        ("Suppliers", scenario.supplier_pool.filtered().count()),
        ("Buying Channels", scenario.buying_channels.channels.len()),
    ];
    for (item, count) in rows {
        wtr.write_record([item.to_string(), count.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

fn to_string(write: impl FnOnce(&mut Vec<u8>) -> Result<(), ExportError>) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write(&mut buf)?;
    Ok(String::from_utf8(buf)?)
}

pub fn logic_matrix_csv(scenario: &Scenario) -> Result<String, ExportError> {
    to_string(|buf| write_logic_matrix(scenario, buf))
}

pub fn suppliers_csv(scenario: &Scenario) -> Result<String, ExportError> {
    to_string(|buf| write_suppliers(scenario, buf))
}

pub fn channels_csv(scenario: &Scenario) -> Result<String, ExportError> {
    to_string(|buf| write_channels(scenario, buf))
}

pub fn summary_csv(scenario: &Scenario) -> Result<String, ExportError> {
    to_string(|buf| write_summary(scenario, buf))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
