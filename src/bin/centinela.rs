use centinela::{
    api::{ApiConfig, ApiState, spawn_api_server},
    collector::MetricCollector,
    config::Config,
    inference::InferenceClient,
    metrics::CheckMetrics,
};
use clap::Parser;
use tracing::{debug, trace, warn};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Parser)]
struct Args {
    /// Listening port (overrides CENTINELA_PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

fn init() {
    dotenv::dotenv().ok();

    let filter = filter::Targets::new().with_targets(vec![
        ("centinela", filter::LevelFilter::TRACE),
        ("tower_http", filter::LevelFilter::DEBUG),
    ]);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact()
                .with_ansi(false),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init();
    let args = Args::parse();
    trace!("started with args: {args:?}");

    let mut config = Config::from_env();
    if let Some(port) = args.port {
        config.bind_addr.set_port(port);
    }

    if config.inference_api_key.is_none() {
        warn!("no inference API key configured; checks will fail as upstream errors");
    }

    debug!(
        "using metrics backend {} and inference endpoint {}",
        config.prometheus_url, config.inference_url
    );

    let collector = MetricCollector::new(config.prometheus_url.clone());
    let inference = InferenceClient::new(
        config.inference_url.clone(),
        config.inference_api_key.clone(),
        config.inference_timeout,
    );
    let metrics = CheckMetrics::new();

    let api_config = ApiConfig {
        bind_addr: config.bind_addr,
    };
    spawn_api_server(api_config, ApiState::new(collector, inference, metrics)).await?;

    tokio::signal::ctrl_c().await?;
    debug!("shutting down");

    Ok(())
}
