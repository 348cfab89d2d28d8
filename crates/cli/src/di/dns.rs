use std::sync::Arc;
use stubdns_application::use_cases::RespondToQueryUseCase;
use stubdns_domain::Config;
use stubdns_infrastructure::dns::{DnsServerHandler, FixedAnswerSource};
use tracing::info;

pub struct DnsServices {
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        info!(
            address = %config.answer.address,
            ttl = config.answer.ttl,
            "Answering every question with a fixed A record"
        );

        let answers = Arc::new(FixedAnswerSource::from_config(&config.answer));
        let use_case = Arc::new(RespondToQueryUseCase::new(answers));

        Self {
            handler: DnsServerHandler::new(use_case),
        }
    }
}
