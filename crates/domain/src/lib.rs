//! stubdns domain layer: DNS wire codec, error types and configuration model.
pub mod config;
pub mod errors;
pub mod wire;

pub use config::{AnswerConfig, CliOverrides, Config, ConfigError, LoggingConfig, ServerConfig};
pub use errors::WireError;
pub use wire::{
    DomainName, Header, HeaderFlags, Message, Opcode, Question, RecordClass, RecordType,
    ResourceRecord, ResponseCode, HEADER_LEN, MAX_DATAGRAM_LEN, MAX_LABEL_LEN,
};
