use assistant_console::adapters::backend_client::HttpBackendClient;
use assistant_console::adapters::health_handler::HealthHandler;
use assistant_console::cli::Cli;
use assistant_console::config::Settings;
use assistant_console::domain::AssistantBackend;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration (CLI > env > file > defaults)
    let settings = Settings::new_with_cli(&cli)?;

    let client = HttpBackendClient::new(&settings.backend)?;
    info!(
        "Forwarding /api to {} (timeout {}s)",
        client.base_url(),
        settings.backend.timeout_seconds
    );
    let backend: Arc<dyn AssistantBackend> = Arc::new(client);

    let health_handler = Arc::new(HealthHandler::new(backend.clone()));
    let app = assistant_console::create_app(backend, health_handler);

    let listener = tokio::net::TcpListener::bind(settings.bind_addr()).await?;
    info!(
        "Starting Assistant Console on {} ({})",
        settings.listen_addr(),
        listener.local_addr()?
    );
    axum::serve(listener, app).await?;

    Ok(())
}
