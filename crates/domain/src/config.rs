mod answer;
mod errors;
mod logging;
mod root;
mod server;

pub use answer::AnswerConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
