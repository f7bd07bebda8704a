//! In-memory sample "workbooks".
//!
//! Immutable module-level literals; every tool is a pure computation over
//! these rows, so repeated calls always produce identical output.

use serde_json::{json, Value};

pub struct SalesRecord {
    pub region: &'static str,
    pub product: &'static str,
    pub units_sold: u32,
    pub total_sales: u64,
}

pub const SALES_REPORT: [SalesRecord; 12] = [
    SalesRecord { region: "North America", product: "Gateway License", units_sold: 840, total_sales: 420_000 },
    SalesRecord { region: "North America", product: "Support Plan", units_sold: 500, total_sales: 150_000 },
    SalesRecord { region: "North America", product: "Training Credits", units_sold: 260, total_sales: 65_000 },
    SalesRecord { region: "Europe", product: "Gateway License", units_sold: 620, total_sales: 310_000 },
    SalesRecord { region: "Europe", product: "Support Plan", units_sold: 400, total_sales: 120_000 },
    SalesRecord { region: "Europe", product: "Training Credits", units_sold: 192, total_sales: 48_000 },
    SalesRecord { region: "Asia Pacific", product: "Gateway License", units_sold: 550, total_sales: 275_000 },
    SalesRecord { region: "Asia Pacific", product: "Support Plan", units_sold: 327, total_sales: 98_000 },
    SalesRecord { region: "Asia Pacific", product: "Training Credits", units_sold: 144, total_sales: 36_000 },
    SalesRecord { region: "Latin America", product: "Gateway License", units_sold: 280, total_sales: 140_000 },
    SalesRecord { region: "Latin America", product: "Support Plan", units_sold: 180, total_sales: 54_000 },
    SalesRecord { region: "Latin America", product: "Training Credits", units_sold: 88, total_sales: 22_000 },
];

pub struct CustomerRecord {
    pub customer_name: &'static str,
    pub industry: &'static str,
    pub active_contracts: u32,
    pub lifetime_value: u64,
}

pub const CUSTOMER_MASTER: [CustomerRecord; 9] = [
    CustomerRecord { customer_name: "Contoso Ltd", industry: "Manufacturing", active_contracts: 6, lifetime_value: 1_180_000 },
    CustomerRecord { customer_name: "Wide World Importers", industry: "Logistics", active_contracts: 9, lifetime_value: 1_875_000 },
    CustomerRecord { customer_name: "Fabrikam Inc", industry: "Retail", active_contracts: 7, lifetime_value: 1_420_000 },
    CustomerRecord { customer_name: "Northwind Traders", industry: "Food & Beverage", active_contracts: 4, lifetime_value: 975_000 },
    CustomerRecord { customer_name: "Tailspin Toys", industry: "Consumer Goods", active_contracts: 8, lifetime_value: 1_640_000 },
    CustomerRecord { customer_name: "Adventure Works", industry: "Sporting Goods", active_contracts: 5, lifetime_value: 860_000 },
    CustomerRecord { customer_name: "Woodgrove Bank", industry: "Financial Services", active_contracts: 3, lifetime_value: 745_000 },
    CustomerRecord { customer_name: "Litware Inc", industry: "Software", active_contracts: 2, lifetime_value: 520_000 },
    CustomerRecord { customer_name: "Fourth Coffee", industry: "Hospitality", active_contracts: 1, lifetime_value: 310_000 },
];

pub struct InventoryRecord {
    pub sku: &'static str,
    pub product_name: &'static str,
    pub category: &'static str,
    pub quantity_on_hand: u32,
    pub reorder_level: u32,
    pub unit_price: f64,
}

pub const INVENTORY_REPORT: [InventoryRecord; 8] = [
    InventoryRecord { sku: "SKU-001", product_name: "USB-C Dock", category: "Accessories", quantity_on_hand: 140, reorder_level: 40, unit_price: 89.99 },
    InventoryRecord { sku: "SKU-002", product_name: "Wireless Keyboard", category: "Accessories", quantity_on_hand: 8, reorder_level: 20, unit_price: 49.50 },
    InventoryRecord { sku: "SKU-003", product_name: "27in Monitor", category: "Displays", quantity_on_hand: 55, reorder_level: 25, unit_price: 249.00 },
    InventoryRecord { sku: "SKU-004", product_name: "Rack Server R540", category: "Hardware", quantity_on_hand: 12, reorder_level: 15, unit_price: 3299.00 },
    InventoryRecord { sku: "SKU-005", product_name: "Edge Gateway Node", category: "Hardware", quantity_on_hand: 25, reorder_level: 25, unit_price: 1150.00 },
    InventoryRecord { sku: "SKU-006", product_name: "HDMI Cable 2m", category: "Accessories", quantity_on_hand: 320, reorder_level: 100, unit_price: 9.99 },
    InventoryRecord { sku: "SKU-007", product_name: "GPU Accelerator Card", category: "Hardware", quantity_on_hand: 3, reorder_level: 10, unit_price: 5499.00 },
    InventoryRecord { sku: "SKU-008", product_name: "Laser Printer", category: "Peripherals", quantity_on_hand: 18, reorder_level: 12, unit_price: 389.00 },
];

pub struct PerformerRecord {
    pub name: &'static str,
    pub region: &'static str,
    pub deals_won: u32,
    pub total_revenue: u64,
    pub quota_attainment: f64,
}

pub const TEAM_PERFORMANCE: [PerformerRecord; 6] = [
    PerformerRecord { name: "Avery Chen", region: "North America", deals_won: 34, total_revenue: 910_000, quota_attainment: 1.12 },
    PerformerRecord { name: "Priya Nair", region: "Asia Pacific", deals_won: 29, total_revenue: 845_000, quota_attainment: 1.05 },
    PerformerRecord { name: "Jonas Weber", region: "Europe", deals_won: 26, total_revenue: 790_000, quota_attainment: 0.98 },
    PerformerRecord { name: "Sofia Duarte", region: "Latin America", deals_won: 22, total_revenue: 615_000, quota_attainment: 0.91 },
    PerformerRecord { name: "Marcus Hill", region: "North America", deals_won: 19, total_revenue: 540_000, quota_attainment: 0.84 },
    PerformerRecord { name: "Elif Demir", region: "Europe", deals_won: 15, total_revenue: 430_000, quota_attainment: 0.73 },
];

pub struct AzureCostRecord {
    pub service: &'static str,
    pub resource_group: &'static str,
    pub monthly_cost: f64,
}

pub const AZURE_COSTS: [AzureCostRecord; 8] = [
    AzureCostRecord { service: "Azure OpenAI", resource_group: "rg-ai-lab", monthly_cost: 4250.40 },
    AzureCostRecord { service: "Azure OpenAI", resource_group: "rg-ai-prod", monthly_cost: 6120.00 },
    AzureCostRecord { service: "API Management", resource_group: "rg-gateway", monthly_cost: 2890.25 },
    AzureCostRecord { service: "API Management", resource_group: "rg-gateway-dev", monthly_cost: 710.50 },
    AzureCostRecord { service: "App Service", resource_group: "rg-web", monthly_cost: 540.75 },
    AzureCostRecord { service: "Storage", resource_group: "rg-data", monthly_cost: 320.10 },
    AzureCostRecord { service: "Container Apps", resource_group: "rg-mcp", monthly_cost: 460.00 },
    AzureCostRecord { service: "Log Analytics", resource_group: "rg-ops", monthly_cost: 280.35 },
];

/// Workbook names in listing order.
pub const WORKBOOKS: [&str; 5] = [
    "sales_report",
    "customer_master",
    "inventory_report",
    "team_performance",
    "azure_costs",
];

/// Column headers of a workbook.
pub fn headers(workbook: &str) -> Option<&'static [&'static str]> {
    match workbook {
        "sales_report" => Some(&["Region", "Product", "UnitsSold", "TotalSales"]),
        "customer_master" => Some(&["CustomerName", "Industry", "ActiveContracts", "LifetimeValue"]),
        "inventory_report" => Some(&["SKU", "ProductName", "Category", "QuantityOnHand", "ReorderLevel", "UnitPrice"]),
        "team_performance" => Some(&["Name", "Region", "DealsWon", "TotalRevenue", "QuotaAttainment"]),
        "azure_costs" => Some(&["Service", "ResourceGroup", "MonthlyCost"]),
        _ => None,
    }
}

/// Rows of a workbook as JSON objects keyed by header name.
pub fn rows(workbook: &str) -> Option<Vec<Value>> {
    match workbook {
        "sales_report" => Some(
            SALES_REPORT
                .iter()
                .map(|r| {
                    json!({
                        "Region": r.region,
                        "Product": r.product,
                        "UnitsSold": r.units_sold,
                        "TotalSales": r.total_sales,
                    })
                })
                .collect(),
        ),
        "customer_master" => Some(
            CUSTOMER_MASTER
                .iter()
                .map(|r| {
                    json!({
                        "CustomerName": r.customer_name,
                        "Industry": r.industry,
                        "ActiveContracts": r.active_contracts,
                        "LifetimeValue": r.lifetime_value,
                    })
                })
                .collect(),
        ),
        "inventory_report" => Some(
            INVENTORY_REPORT
                .iter()
                .map(|r| {
                    json!({
                        "SKU": r.sku,
                        "ProductName": r.product_name,
                        "Category": r.category,
                        "QuantityOnHand": r.quantity_on_hand,
                        "ReorderLevel": r.reorder_level,
                        "UnitPrice": r.unit_price,
                    })
                })
                .collect(),
        ),
        "team_performance" => Some(
            TEAM_PERFORMANCE
                .iter()
                .map(|r| {
                    json!({
                        "Name": r.name,
                        "Region": r.region,
                        "DealsWon": r.deals_won,
                        "TotalRevenue": r.total_revenue,
                        "QuotaAttainment": r.quota_attainment,
                    })
                })
                .collect(),
        ),
        "azure_costs" => Some(
            AZURE_COSTS
                .iter()
                .map(|r| {
                    json!({
                        "Service": r.service,
                        "ResourceGroup": r.resource_group,
                        "MonthlyCost": r.monthly_cost,
                    })
                })
                .collect(),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_workbook_has_headers_and_rows() {
        for workbook in WORKBOOKS {
            let headers = headers(workbook).unwrap();
            let rows = rows(workbook).unwrap();
            assert!(!rows.is_empty());

            for row in &rows {
                let obj = row.as_object().unwrap();
                assert_eq!(obj.len(), headers.len(), "workbook {workbook}");
                for header in headers {
                    assert!(obj.contains_key(*header), "workbook {workbook} missing {header}");
                }
            }
        }
    }

    #[test]
    fn sales_report_has_twelve_rows() {
        assert_eq!(SALES_REPORT.len(), 12);
    }

    #[test]
    fn customer_master_has_nine_rows() {
        assert_eq!(CUSTOMER_MASTER.len(), 9);
    }

    #[test]
    fn hardware_category_is_exactly_three_skus() {
        let hardware: Vec<&str> = INVENTORY_REPORT
            .iter()
            .filter(|r| r.category == "Hardware")
            .map(|r| r.sku)
            .collect();
        assert_eq!(hardware, vec!["SKU-004", "SKU-005", "SKU-007"]);
    }
}
