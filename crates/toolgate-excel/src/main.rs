use toolgate_server::{telemetry, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    telemetry::init(&config.logging);

    tracing::info!("Starting excel-mcp server");

    let app = toolgate_excel::app(&config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("MCP endpoint: http://{}/excel/mcp/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
