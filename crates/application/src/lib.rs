//! stubdns application layer: the responder policy and the ports it depends on.
pub mod ports;
pub mod use_cases;
