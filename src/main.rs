use anyhow::Result;
use brokerage_dashboard_tui::{app::App, config::Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;

    let mut app = App::new(config);
    app.run().await
}
