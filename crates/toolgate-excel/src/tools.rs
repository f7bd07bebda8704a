//! Tool handlers over the sample workbooks.
//!
//! Each handler takes the JSON-RPC `arguments` object and returns either a
//! JSON result or an error string that the dispatcher reports in-band.

use crate::data;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use toolgate_server::ToolResult;

pub fn list_workbooks(_args: Value) -> ToolResult {
    let workbooks: Vec<Value> = data::WORKBOOKS
        .iter()
        .map(|name| {
            let rows = data::rows(name).unwrap_or_default();
            json!({
                "name": name,
                "rows": rows.len(),
                "columns": data::headers(name),
            })
        })
        .collect();

    Ok(json!({ "workbooks": workbooks }))
}

pub fn get_workbook_summary(args: Value) -> ToolResult {
    let workbook = required_str(&args, "workbook")?;
    let rows = data::rows(workbook).ok_or_else(|| format!("Unknown workbook: {}", workbook))?;

    Ok(json!({
        "workbook": workbook,
        "columns": data::headers(workbook),
        "row_count": rows.len(),
        "sample": rows.first(),
    }))
}

pub fn analyze_sales_by_region(_args: Value) -> ToolResult {
    sales_totals("Region", |r| r.region)
}

pub fn analyze_sales_by_product(_args: Value) -> ToolResult {
    sales_totals("Product", |r| r.product)
}

// BTreeMap keeps the grouping output deterministically ordered.
fn sales_totals(key: &str, group: impl Fn(&data::SalesRecord) -> &'static str) -> ToolResult {
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    let mut grand_total: u64 = 0;

    for record in &data::SALES_REPORT {
        *totals.entry(group(record)).or_insert(0) += record.total_sales;
        grand_total += record.total_sales;
    }

    Ok(json!({
        "grouped_by": key,
        "totals": totals,
        "total_sales": grand_total,
        "row_count": data::SALES_REPORT.len(),
    }))
}

pub fn get_top_customers(args: Value) -> ToolResult {
    let limit = limit_arg(&args, 5);

    let mut customers: Vec<&data::CustomerRecord> = data::CUSTOMER_MASTER.iter().collect();
    customers.sort_by(|a, b| b.lifetime_value.cmp(&a.lifetime_value));

    let top: Vec<Value> = customers
        .into_iter()
        .take(limit)
        .map(|c| {
            json!({
                "CustomerName": c.customer_name,
                "Industry": c.industry,
                "ActiveContracts": c.active_contracts,
                "LifetimeValue": c.lifetime_value,
            })
        })
        .collect();

    Ok(json!({ "customers": top }))
}

pub fn get_top_performers(args: Value) -> ToolResult {
    let limit = limit_arg(&args, 5);

    let mut performers: Vec<&data::PerformerRecord> = data::TEAM_PERFORMANCE.iter().collect();
    performers.sort_by(|a, b| b.total_revenue.cmp(&a.total_revenue));

    let top: Vec<Value> = performers
        .into_iter()
        .take(limit)
        .map(|p| {
            json!({
                "Name": p.name,
                "Region": p.region,
                "DealsWon": p.deals_won,
                "TotalRevenue": p.total_revenue,
                "QuotaAttainment": p.quota_attainment,
            })
        })
        .collect();

    Ok(json!({ "performers": top }))
}

pub fn get_inventory_alerts(_args: Value) -> ToolResult {
    let alerts: Vec<Value> = data::INVENTORY_REPORT
        .iter()
        .filter(|r| r.quantity_on_hand <= r.reorder_level)
        .map(|r| {
            let severity = if (r.quantity_on_hand as f64) < r.reorder_level as f64 * 0.5 {
                "CRITICAL"
            } else {
                "LOW"
            };
            json!({
                "SKU": r.sku,
                "ProductName": r.product_name,
                "Category": r.category,
                "QuantityOnHand": r.quantity_on_hand,
                "ReorderLevel": r.reorder_level,
                "severity": severity,
            })
        })
        .collect();

    Ok(json!({
        "count": alerts.len(),
        "alerts": alerts,
    }))
}

pub fn analyze_azure_costs(_args: Value) -> ToolResult {
    let mut by_service: BTreeMap<&str, f64> = BTreeMap::new();
    let mut total: f64 = 0.0;

    for record in &data::AZURE_COSTS {
        *by_service.entry(record.service).or_insert(0.0) += record.monthly_cost;
        total += record.monthly_cost;
    }

    let top_service = by_service
        .iter()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(service, cost)| json!({"service": service, "monthly_cost": cost}));

    Ok(json!({
        "by_service": by_service,
        "total_monthly_cost": total,
        "top_service": top_service,
    }))
}

pub fn query_data(args: Value) -> ToolResult {
    let workbook = required_str(&args, "workbook")?;
    let column = required_str(&args, "column")?;
    let needle = args
        .get("value")
        .cloned()
        .ok_or("missing 'value' argument")?;

    let headers = data::headers(workbook).ok_or_else(|| format!("Unknown workbook: {}", workbook))?;
    if !headers.contains(&column) {
        return Err(format!("Unknown column '{}' in workbook '{}'", column, workbook));
    }

    let rows = data::rows(workbook).ok_or_else(|| format!("Unknown workbook: {}", workbook))?;
    let matches: Vec<Value> = rows
        .into_iter()
        .filter(|row| row.get(column).is_some_and(|cell| value_matches(cell, &needle)))
        .collect();

    Ok(json!({
        "workbook": workbook,
        "column": column,
        "value": needle,
        "count": matches.len(),
        "matches": matches,
    }))
}

/// Strings match case-insensitively, numbers numerically, everything else
/// by exact equality.
fn value_matches(cell: &Value, needle: &Value) -> bool {
    match (cell, needle) {
        (Value::String(a), Value::String(b)) => a.eq_ignore_ascii_case(b),
        (Value::Number(_), Value::Number(_)) => cell.as_f64() == needle.as_f64(),
        _ => cell == needle,
    }
}

fn required_str<'a>(args: &'a Value, key: &str) -> Result<&'a str, String> {
    args.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| format!("missing '{}' argument", key))
}

fn limit_arg(args: &Value, default: usize) -> usize {
    args.get("limit")
        .and_then(Value::as_u64)
        .map(|n| n as usize)
        .unwrap_or(default)
}
