use anyhow::Context;
use toolgate_server::{telemetry, Config};
use toolgate_weather::owm::OwmClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    telemetry::init(&config.logging);

    tracing::info!("Starting weather-mcp server");

    // Secret comes from ENV only, never from TOML.
    let api_key = std::env::var("OWM_API_KEY")
        .context("OWM_API_KEY environment variable is required")?;
    let owm = OwmClient::new(api_key)?;

    let app = toolgate_weather::app(&config, owm);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("JSON-RPC endpoint: http://{}/messages", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
