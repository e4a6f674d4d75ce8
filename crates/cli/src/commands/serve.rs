use crate::di::DnsServices;
use rootwalk_domain::Config;
use rootwalk_infrastructure::dns::UdpQueryServer;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn run_serve(
    config: &Config,
    services: DnsServices,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let listen_addr = config.server.listen_addr()?;
    let server = UdpQueryServer::bind(listen_addr, services.handle_query).await?;

    let bound = server.local_addr()?;
    info!(bind_address = %bound, "Serving iterative DNS over UDP");
    server.run(shutdown).await?;

    info!("Server shutdown complete");
    Ok(())
}
