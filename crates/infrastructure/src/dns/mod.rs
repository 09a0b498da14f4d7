pub mod fallback;
pub mod records;
pub mod server;

pub use fallback::FallbackHandler;
pub use server::RegistryRequestHandler;
