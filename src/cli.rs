use clap::Parser;
use std::path::PathBuf;

/// Assistant Console - web console for managing virtual assistants
#[derive(Parser, Debug, Clone)]
#[command(name = "assistant-console", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "ASSISTANT_CONSOLE_CONFIG", default_value = "assistant-console.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "ASSISTANT_CONSOLE_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "ASSISTANT_CONSOLE_PORT")]
    pub port: Option<u16>,

    /// Base URL of the assistant backend (e.g., "http://localhost:8000")
    #[arg(long, env = "ASSISTANT_CONSOLE_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Timeout in seconds for each backend request
    #[arg(long, env = "ASSISTANT_CONSOLE_BACKEND_TIMEOUT")]
    pub backend_timeout: Option<u64>,
}

/// Serializes tests that read or write `ASSISTANT_CONSOLE_*` variables
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
