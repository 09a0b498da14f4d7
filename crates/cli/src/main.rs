use clap::Parser;
use registry_dns_application::use_cases::ResolveRegistryQueryUseCase;
use registry_dns_domain::CliOverrides;
use registry_dns_infrastructure::dns::{FallbackHandler, RegistryRequestHandler};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "registry-dns")]
#[command(version)]
#[command(about = "Authoritative delegation answers straight from a DN42-style registry checkout")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Registry checkout root (the directory containing data/)
    #[arg(short = 'r', long, value_name = "DIR")]
    registry: Option<PathBuf>,

    /// TTL for every synthesized record
    #[arg(short = 't', long)]
    ttl: Option<u32>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            registry_path: self.registry.clone(),
            ttl: self.ttl,
            dns_port: self.dns_port,
            bind_address: self.bind.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);

    info!("Starting registry-dns v{}", env!("CARGO_PKG_VERSION"));

    let store = bootstrap::open_registry(&config)?;
    let use_case = Arc::new(ResolveRegistryQueryUseCase::new(
        Arc::new(store),
        config.registry.ttl,
    ));
    let handler = RegistryRequestHandler::new(
        use_case,
        FallbackHandler::new(config.server.fallback_rcode),
    );

    server::start_dns_server(&config.server, handler).await?;

    info!("Server shutdown complete");
    Ok(())
}
