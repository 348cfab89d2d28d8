use stubdns_domain::Config;
use stubdns_infrastructure::dns::{DnsServerHandler, UdpDnsServer};
use tracing::info;

/// Binds the configured socket and serves until a fatal error.
pub fn start_dns_server(config: &Config, handler: DnsServerHandler) -> anyhow::Result<()> {
    let socket_addr = config.server.socket_addr()?;

    info!(
        bind_address = %socket_addr,
        protocol = %config.server.protocol,
        "Starting DNS server"
    );

    let server = UdpDnsServer::bind(socket_addr, handler)?;
    server.run()?;
    Ok(())
}
