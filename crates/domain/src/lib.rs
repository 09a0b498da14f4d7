//! Registry DNS Domain Layer
pub mod answer;
pub mod classless;
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod query_name;
pub mod registry_line;
pub mod registry_object;

pub use answer::{AnswerSet, QueryOutcome};
pub use classless::ClasslessRedirect;
pub use config::{CliOverrides, Config, ConfigError, FallbackRcode};
pub use dns_record::{DelegationSigner, RecordData, RecordType, ResourceRecord};
pub use errors::DomainError;
pub use query_name::{QueryKind, ReverseKey};
pub use registry_line::{NameserverEntry, RegistryLine};
pub use registry_object::{ObjectClass, RegistryFileRef};
