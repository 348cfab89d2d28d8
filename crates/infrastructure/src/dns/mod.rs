pub mod fixed_answer;
pub mod server;
pub mod transport;

pub use fixed_answer::FixedAnswerSource;
pub use server::DnsServerHandler;
pub use transport::udp::{ServerError, UdpDnsServer};
