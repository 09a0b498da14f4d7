pub mod record;
pub mod record_type;

pub use record::{DelegationSigner, RecordData, ResourceRecord};
pub use record_type::RecordType;
