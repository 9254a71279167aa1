use freedns_infrastructure::dns::DnsServerHandler;
use hickory_server::ServerFuture;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tracing::info;

const TCP_IDLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Serve UDP and TCP on `bind_addr` until ctrl-c.
pub async fn start_dns_server(bind_addr: SocketAddr, handler: DnsServerHandler) -> anyhow::Result<()> {
    info!(bind_address = %bind_addr, "Starting DNS server");

    let udp_socket = UdpSocket::bind(bind_addr).await?;
    info!(protocol = "UDP", "DNS server listening");

    let tcp_listener = TcpListener::bind(bind_addr).await?;
    info!(protocol = "TCP", "DNS server listening");

    let mut server = ServerFuture::new(handler);
    server.register_socket(udp_socket);
    server.register_listener(tcp_listener, TCP_IDLE_TIMEOUT);

    info!("DNS server ready to accept queries");

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, draining in-flight queries");

    server.shutdown_gracefully().await?;
    info!("DNS server stopped");

    Ok(())
}
