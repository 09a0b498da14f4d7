pub mod errors;
pub mod logging;
pub mod registry;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use registry::RegistryConfig;
pub use root::{CliOverrides, Config};
pub use server::{FallbackRcode, ServerConfig};
