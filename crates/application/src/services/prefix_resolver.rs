use registry_dns_domain::registry_object::cidr_filename;
use registry_dns_domain::{DomainError, RegistryFileRef, ReverseKey};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::RegistryStore;

/// Longest-prefix match of an address against `inetnum`/`inet6num` objects.
///
/// Probes `/ceiling` down to `/0` and stops at the first object that exists.
/// No index is kept, so every lookup reflects the registry as it is on disk.
pub struct PrefixResolver {
    store: Arc<dyn RegistryStore>,
}

impl PrefixResolver {
    pub fn new(store: Arc<dyn RegistryStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self), level = "debug")]
    pub async fn resolve(&self, key: &ReverseKey) -> Result<RegistryFileRef, DomainError> {
        let class = key.object_class();
        let address = key.address();

        for prefix_len in (0..=key.ceiling()).rev() {
            let filename = cidr_filename(address, prefix_len)?;
            if self.store.exists(class, &filename).await {
                debug!(%class, %filename, prefix_len, "Registry object matched");
                return Ok(RegistryFileRef::network(class, filename, prefix_len));
            }
        }

        Err(DomainError::LookupMiss(format!(
            "file for range {}/{} not found",
            address,
            key.ceiling()
        )))
    }
}
