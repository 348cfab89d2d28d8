use clap::Parser;
use stubdns_domain::CliOverrides;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser, Debug)]
#[command(name = "stubdns")]
#[command(version)]
#[command(about = "stubdns - minimal UDP DNS responder")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            dns_port: self.port,
            bind_address: self.bind.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config);

    info!("Starting stubdns v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config);

    if let Err(e) = server::start_dns_server(&config, dns_services.handler) {
        error!(error = %e, "DNS server stopped");
        return Err(e);
    }

    Ok(())
}
