use crate::di::DnsServices;
use rootwalk_domain::DomainName;
use std::net::{IpAddr, SocketAddr};

pub async fn run_lookup(services: &DnsServices, server: &str, name: &str) -> anyhow::Result<()> {
    let server = parse_server(server)?;
    let ip = services
        .lookup_address
        .execute(server, &DomainName::from(name))
        .await?;

    println!("{}", ip);
    Ok(())
}

/// Accepts `ip:port` or a bare IP, which gets port 53.
fn parse_server(server: &str) -> anyhow::Result<SocketAddr> {
    if let Ok(addr) = server.parse::<SocketAddr>() {
        return Ok(addr);
    }
    let ip: IpAddr = server
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address '{}': {}", server, e))?;
    Ok(SocketAddr::new(ip, 53))
}
