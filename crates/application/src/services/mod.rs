mod domain_resolver;
mod prefix_resolver;
mod registry_parser;

pub use domain_resolver::DomainResolver;
pub use prefix_resolver::PrefixResolver;
pub use registry_parser::{build_answer, RegistryFileParser};
