use std::net::Ipv4Addr;
use stubdns_application::ports::AnswerSource;
use stubdns_domain::{AnswerConfig, Question, ResourceRecord};

/// Placeholder answer policy: every question resolves to the same IPv4
/// address as an `IN A` record for the question's name, whatever type and
/// class were asked for.
#[derive(Debug, Clone)]
pub struct FixedAnswerSource {
    address: Ipv4Addr,
    ttl: u32,
}

impl FixedAnswerSource {
    pub fn new(address: Ipv4Addr, ttl: u32) -> Self {
        Self { address, ttl }
    }

    pub fn from_config(config: &AnswerConfig) -> Self {
        Self::new(config.address, config.ttl)
    }
}

impl AnswerSource for FixedAnswerSource {
    fn answer(&self, question: &Question) -> Option<ResourceRecord> {
        Some(ResourceRecord::a(
            question.name.clone(),
            self.ttl,
            self.address,
        ))
    }
}
