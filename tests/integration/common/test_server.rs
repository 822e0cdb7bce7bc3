use assistant_console::adapters::backend_client::HttpBackendClient;
use assistant_console::adapters::health_handler::HealthHandler;
use assistant_console::config::BackendSettings;
use assistant_console::domain::AssistantBackend;
use std::net::SocketAddr;
use std::sync::Arc;

pub struct TestServer {
    pub addr: SocketAddr,
    pub base_url: String,
}

impl TestServer {
    /// Start the console forwarding to `backend_url`
    pub async fn new(backend_url: &str) -> Self {
        Self::with_timeout(backend_url, 5).await
    }

    pub async fn with_timeout(backend_url: &str, timeout_seconds: u64) -> Self {
        let client = HttpBackendClient::new(&BackendSettings {
            base_url: backend_url.to_string(),
            timeout_seconds,
        })
        .unwrap();
        let backend: Arc<dyn AssistantBackend> = Arc::new(client);
        let health_handler = Arc::new(HealthHandler::new(backend.clone()));

        let app = assistant_console::create_app(backend, health_handler);

        // Start server on random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestServer { addr, base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
