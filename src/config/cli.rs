use crate::config::toml_config::AppConfig;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "house-price-web")]
#[command(about = "Serve the house price prediction form and result pages")]
pub struct ServerArgs {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "house-price.toml")]
    pub config: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Override server.port from config
    #[arg(long)]
    pub port: Option<u16>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl ServerArgs {
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(port) = self.port {
            config.server.port = port;
            tracing::info!("🔧 Port overridden to: {}", port);
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "predict-once")]
#[command(about = "Run a single house price prediction without the web server")]
pub struct PredictArgs {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "house-price.toml")]
    pub config: String,

    /// Living area in square feet
    #[arg(long)]
    pub area: f64,

    #[arg(long)]
    pub bedrooms: u32,

    /// House age in years
    #[arg(long)]
    pub age: u32,

    /// Write the comparison chart to this PNG file
    #[arg(long)]
    pub chart_out: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
