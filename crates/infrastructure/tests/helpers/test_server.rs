#![allow(dead_code)]

use std::net::{Ipv4Addr, SocketAddr, UdpSocket};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use stubdns_application::use_cases::RespondToQueryUseCase;
use stubdns_infrastructure::dns::{DnsServerHandler, FixedAnswerSource, UdpDnsServer};

pub fn handler(address: Ipv4Addr, ttl: u32) -> DnsServerHandler {
    let source = Arc::new(FixedAnswerSource::new(address, ttl));
    DnsServerHandler::new(Arc::new(RespondToQueryUseCase::new(source)))
}

/// Starts a server on an ephemeral loopback port in a background thread.
/// The thread lives until the test process exits.
pub fn spawn_server(address: Ipv4Addr, ttl: u32) -> SocketAddr {
    let server = UdpDnsServer::bind("127.0.0.1:0".parse().unwrap(), handler(address, ttl))
        .expect("bind test server");
    let addr = server.local_addr().unwrap();
    thread::spawn(move || {
        let _ = server.run();
    });
    addr
}

pub fn client() -> UdpSocket {
    let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
    socket
        .set_read_timeout(Some(Duration::from_secs(2)))
        .unwrap();
    socket
}

pub fn exchange(client: &UdpSocket, server: SocketAddr, query: &[u8]) -> Vec<u8> {
    client.send_to(query, server).unwrap();
    let mut buf = [0u8; 512];
    let (n, from) = client.recv_from(&mut buf).expect("response from server");
    assert_eq!(from, server);
    buf[..n].to_vec()
}
