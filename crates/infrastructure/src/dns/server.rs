use std::net::SocketAddr;
use std::sync::Arc;
use stubdns_application::use_cases::RespondToQueryUseCase;
use stubdns_domain::{Message, WireError};
use tracing::{debug, info};

/// Datagram-level glue between the transport and the responder.
pub struct DnsServerHandler {
    use_case: Arc<RespondToQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<RespondToQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Parses one request datagram and returns the encoded response.
    ///
    /// A malformed request yields `Ok(None)`: it is dropped without a
    /// reply. An `Err` means the response itself could not be encoded.
    pub fn handle_raw_udp(
        &self,
        datagram: &[u8],
        peer: SocketAddr,
    ) -> Result<Option<Vec<u8>>, WireError> {
        let request = match Message::parse_request(datagram) {
            Ok(request) => request,
            Err(e) => {
                debug!(%peer, bytes = datagram.len(), error = %e, "Dropping malformed request");
                return Ok(None);
            }
        };

        for question in &request.questions {
            info!(
                %peer,
                id = request.header.id,
                domain = %question.name,
                record_type = %question.record_type,
                "DNS query received"
            );
        }

        let response = self.use_case.execute(&request);
        response.to_bytes().map(Some)
    }
}
