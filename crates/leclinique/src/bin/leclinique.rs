//! leclinique binary entry point

use tracing_subscriber::EnvFilter;

fn init_logging(config: &leclinique::ClinicConfig) {
    if !config.enable_logging {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = leclinique::ClinicConfig::from_env();
    init_logging(&config);

    println!("LeTriage - Symptom Triage Service");
    println!("Configuration:");
    println!("  Host: {}", config.host);
    println!("  Port: {}", config.port);
    println!("  Log level: {}", config.log_level);

    println!();
    println!("Training models...");
    let server = leclinique::ClinicServer::new(config)?;

    println!("Server starting on: {}", server.server_url());
    println!("Press Ctrl+C to stop");

    server.start().await?;

    Ok(())
}
