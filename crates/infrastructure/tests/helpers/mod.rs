pub mod builders;
pub mod test_server;

pub use builders::*;
pub use test_server::*;
