use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use toolgate_excel::{data, tools};
use toolgate_server::Config;
use tower::ServiceExt;

#[test]
fn region_totals_sum_to_the_total_sales_column() {
    let result = tools::analyze_sales_by_region(json!({})).unwrap();

    let column_sum: u64 = data::SALES_REPORT.iter().map(|r| r.total_sales).sum();
    let grouped_sum: u64 = result["totals"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();

    assert_eq!(result["row_count"], 12);
    assert_eq!(grouped_sum, column_sum);
    assert_eq!(result["total_sales"].as_u64().unwrap(), column_sum);
}

#[test]
fn product_totals_sum_to_the_total_sales_column() {
    let result = tools::analyze_sales_by_product(json!({})).unwrap();

    let column_sum: u64 = data::SALES_REPORT.iter().map(|r| r.total_sales).sum();
    let grouped_sum: u64 = result["totals"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();

    assert_eq!(grouped_sum, column_sum);
}

#[test]
fn sales_analysis_is_idempotent() {
    let first = tools::analyze_sales_by_region(json!({})).unwrap();
    let second = tools::analyze_sales_by_region(json!({})).unwrap();
    assert_eq!(first, second);
}

#[test]
fn inventory_alerts_flag_exactly_at_or_below_reorder_level() {
    let result = tools::get_inventory_alerts(json!({})).unwrap();
    let alerts = result["alerts"].as_array().unwrap();

    let flagged: Vec<(&str, &str)> = alerts
        .iter()
        .map(|a| (a["SKU"].as_str().unwrap(), a["severity"].as_str().unwrap()))
        .collect();

    // SKU-002: 8 <= 20 and 8 < 10   -> CRITICAL
    // SKU-004: 12 <= 15, 12 >= 7.5  -> LOW
    // SKU-005: 25 == 25, 25 >= 12.5 -> LOW (boundary: equal counts as an alert)
    // SKU-007: 3 <= 10 and 3 < 5    -> CRITICAL
    assert_eq!(
        flagged,
        vec![
            ("SKU-002", "CRITICAL"),
            ("SKU-004", "LOW"),
            ("SKU-005", "LOW"),
            ("SKU-007", "CRITICAL"),
        ]
    );
    assert_eq!(result["count"], 4);
}

#[test]
fn query_data_matches_hardware_case_insensitively() {
    let result = tools::query_data(json!({
        "workbook": "inventory_report",
        "column": "Category",
        "value": "hardware",
    }))
    .unwrap();

    let skus: Vec<&str> = result["matches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["SKU"].as_str().unwrap())
        .collect();

    assert_eq!(skus, vec!["SKU-004", "SKU-005", "SKU-007"]);
    assert_eq!(result["count"], 3);
}

#[test]
fn query_data_matches_numbers_numerically() {
    let result = tools::query_data(json!({
        "workbook": "inventory_report",
        "column": "QuantityOnHand",
        "value": 25,
    }))
    .unwrap();

    assert_eq!(result["count"], 1);
    assert_eq!(result["matches"][0]["SKU"], "SKU-005");
}

#[test]
fn query_data_rejects_unknown_workbook_and_column() {
    let err = tools::query_data(json!({
        "workbook": "payroll",
        "column": "Category",
        "value": "Hardware",
    }))
    .unwrap_err();
    assert_eq!(err, "Unknown workbook: payroll");

    let err = tools::query_data(json!({
        "workbook": "inventory_report",
        "column": "Owner",
        "value": "Hardware",
    }))
    .unwrap_err();
    assert_eq!(err, "Unknown column 'Owner' in workbook 'inventory_report'");
}

#[test]
fn top_customers_are_ranked_by_lifetime_value_descending() {
    let result = tools::get_top_customers(json!({"limit": 3})).unwrap();
    let names: Vec<&str> = result["customers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["CustomerName"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["Wide World Importers", "Tailspin Toys", "Fabrikam Inc"]);
}

#[test]
fn top_customers_limit_edges() {
    let zero = tools::get_top_customers(json!({"limit": 0})).unwrap();
    assert!(zero["customers"].as_array().unwrap().is_empty());

    let all = tools::get_top_customers(json!({"limit": 100})).unwrap();
    assert_eq!(all["customers"].as_array().unwrap().len(), 9);

    let default = tools::get_top_customers(json!({})).unwrap();
    assert_eq!(default["customers"].as_array().unwrap().len(), 5);
}

#[test]
fn top_performers_lead_with_highest_revenue() {
    let result = tools::get_top_performers(json!({"limit": 2})).unwrap();
    let performers = result["performers"].as_array().unwrap();

    assert_eq!(performers[0]["Name"], "Avery Chen");
    assert_eq!(performers[1]["Name"], "Priya Nair");
}

#[test]
fn azure_costs_total_matches_per_service_totals() {
    let result = tools::analyze_azure_costs(json!({})).unwrap();

    let by_service = result["by_service"].as_object().unwrap();
    let grouped_sum: f64 = by_service.values().map(|v| v.as_f64().unwrap()).sum();
    let total = result["total_monthly_cost"].as_f64().unwrap();

    assert!((grouped_sum - total).abs() < 1e-6);
    assert_eq!(result["top_service"]["service"], "Azure OpenAI");
}

#[test]
fn workbook_summary_reports_shape() {
    let result = tools::get_workbook_summary(json!({"workbook": "sales_report"})).unwrap();

    assert_eq!(result["row_count"], 12);
    assert_eq!(result["sample"]["Region"], "North America");

    let err = tools::get_workbook_summary(json!({})).unwrap_err();
    assert_eq!(err, "missing 'workbook' argument");
}

#[tokio::test]
async fn tools_call_round_trips_under_excel_mount() {
    let app = toolgate_excel::app(&Config::default());

    let body = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools/call",
        "params": {
            "name": "query_data",
            "arguments": {
                "workbook": "inventory_report",
                "column": "Category",
                "value": "Hardware",
            },
        },
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/excel/mcp/")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let rpc: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(rpc["result"]["isError"], false);
    let text = rpc["result"]["content"][0]["text"].as_str().unwrap();
    let payload: Value = serde_json::from_str(text).unwrap();
    assert_eq!(payload["count"], 3);
}

#[tokio::test]
async fn tools_list_advertises_all_nine_tools() {
    let app = toolgate_excel::app(&Config::default());

    let body = json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"});
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/excel/mcp")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let rpc: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(rpc["result"]["tools"].as_array().unwrap().len(), 9);
}
