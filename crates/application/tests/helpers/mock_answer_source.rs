#![allow(dead_code)]

use std::net::Ipv4Addr;
use std::sync::Mutex;
use stubdns_application::ports::AnswerSource;
use stubdns_domain::{Question, ResourceRecord};

/// Answers every question with one fixed A record, unless the name is
/// listed as unanswerable. Records the questions it was asked.
pub struct MockAnswerSource {
    address: Ipv4Addr,
    ttl: u32,
    unanswerable: Vec<String>,
    asked: Mutex<Vec<Question>>,
}

impl MockAnswerSource {
    pub fn new(address: Ipv4Addr, ttl: u32) -> Self {
        Self {
            address,
            ttl,
            unanswerable: Vec::new(),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn without_answer_for(mut self, name: &str) -> Self {
        self.unanswerable.push(name.to_string());
        self
    }

    pub fn asked(&self) -> Vec<Question> {
        self.asked.lock().unwrap().clone()
    }
}

impl Default for MockAnswerSource {
    fn default() -> Self {
        Self::new(Ipv4Addr::new(8, 8, 8, 8), 60)
    }
}

impl AnswerSource for MockAnswerSource {
    fn answer(&self, question: &Question) -> Option<ResourceRecord> {
        self.asked.lock().unwrap().push(question.clone());
        if self
            .unanswerable
            .iter()
            .any(|name| question.name == name.as_str())
        {
            return None;
        }
        Some(ResourceRecord::a(
            question.name.clone(),
            self.ttl,
            self.address,
        ))
    }
}
