use anyhow::Result;
use toolgate_client::McpClient;

/// Example: call the excel analytics server over HTTP
///
/// 1. Start the server:
///    ```bash
///    cargo run -p toolgate-excel
///    ```
///
/// 2. Run this client:
///    ```bash
///    cargo run -p toolgate-client --example call_excel
///    ```
#[tokio::main]
async fn main() -> Result<()> {
    let client = McpClient::new("excel", "http://localhost:8000/excel")?;

    let info = client.initialize().await?;
    println!("Connected to {}\n", info["name"]);

    println!("Available tools:");
    let tools = client.list_tools().await?;
    for tool in &tools {
        println!("  - {} - {}", tool.name, tool.description.as_deref().unwrap_or(""));
    }

    println!("\nTop customers:");
    let text = client
        .call_tool_text("get_top_customers", serde_json::json!({"limit": 3}))
        .await?;
    println!("{}", text);

    Ok(())
}
