mod config;
mod logging;
mod registry;

pub use config::load_config;
pub use logging::init_logging;
pub use registry::open_registry;
