use clap::Parser;
use log::info;
use pharmanet_core::application::{SignerPool, TransactionOrchestrator};
use pharmanet_core::infrastructure::config::GatewayConfig;
use pharmanet_core::infrastructure::logging::init_logger;
use pharmanet_core::infrastructure::rpc::JsonRpcLedgerClient;
use pharmanet_core::GatewayError;
use pharmanet_service::api::router::run_gateway_server;
use pharmanet_service::api::{GatewayState, RateLimiter};
use pharmanet_service::service::metrics::Metrics;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "pharmanet-gateway")]
#[command(about = "PharmaNet supply-chain ledger gateway", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "pharmanet.toml")]
    config: PathBuf,

    /// Override listen address
    #[arg(short, long)]
    listen: Option<String>,

    /// Override ledger endpoint URL
    #[arg(long)]
    ledger_url: Option<String>,

    /// Log filter expression (e.g. "info", "pharmanet_core=debug")
    #[arg(long)]
    log_filters: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("pharmanet-gateway failed: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), GatewayError> {
    let mut config = GatewayConfig::load(&cli.config)?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(url) = cli.ledger_url {
        config.ledger.endpoint_url = url;
    }
    if let Some(filters) = cli.log_filters {
        config.log_filters = filters;
    }
    config.validate()?;

    init_logger(config.log_dir.as_deref(), &config.log_filters);
    info!("starting pharmanet gateway listen={} signers={}", config.listen_addr, config.signers.accounts.len());

    let ledger = Arc::new(JsonRpcLedgerClient::new(&config.ledger)?);
    let signers = Arc::new(SignerPool::from_config(&config.signers)?);
    let orchestrator = Arc::new(TransactionOrchestrator::new(ledger, signers, &config.ledger));
    let metrics = Arc::new(Metrics::new()?);

    let state = Arc::new(GatewayState {
        orchestrator,
        metrics,
        rate_limiter: Arc::new(RateLimiter::new()),
        rate_limit_rps: config.rate_limit.rps,
        rate_limit_burst: config.rate_limit.burst,
    });

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .map_err(|err| GatewayError::Config(format!("invalid listen_addr {}: {}", config.listen_addr, err)))?;
    run_gateway_server(addr, state).await
}
