use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use ten40_advice::{AdviceConfig, HttpAdviceClient};
use ten40_core::{AdviceProvider, TaxYearConfig};
use ten40_web::run_server;
use ten40_web::state::AppState;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Federal income tax calculator web service.
#[derive(Parser, Debug)]
#[command(name = "ten40-web")]
#[command(version, about, long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    port: u16,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = TaxYearConfig::year_2025();

    let advice: Option<Arc<dyn AdviceProvider>> = match AdviceConfig::from_env() {
        Some(advice_config) => match HttpAdviceClient::new(advice_config) {
            Ok(client) => {
                info!("advice service client initialized");
                Some(Arc::new(client))
            }
            Err(fault) => {
                warn!(%fault, "advice client failed to initialize, continuing without it");
                None
            }
        },
        None => {
            info!("advice service not configured, using local analysis only");
            None
        }
    };

    info!(
        host = %args.host,
        port = args.port,
        tax_year = config.tax_year,
        "starting tax calculator server"
    );
    run_server(AppState::new(config, advice), &args.host, args.port)
        .await
        .with_context(|| format!("server failed on {}:{}", args.host, args.port))
}
