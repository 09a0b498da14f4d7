use registry_dns_domain::{DomainError, ObjectClass, RegistryFileRef};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::RegistryStore;

/// Zone-cut discovery for forward names: drop labels from the left until a
/// `dns` object exists.
pub struct DomainResolver {
    store: Arc<dyn RegistryStore>,
}

impl DomainResolver {
    pub fn new(store: Arc<dyn RegistryStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self), level = "debug")]
    pub async fn resolve(&self, labels: &[String]) -> Result<RegistryFileRef, DomainError> {
        let mut remaining = labels;

        while !remaining.is_empty() {
            let candidate = remaining.join(".");
            if self.store.exists(ObjectClass::Dns, &candidate).await {
                debug!(domain = %candidate, "Registry domain matched");
                return Ok(RegistryFileRef::domain(candidate));
            }
            remaining = &remaining[1..];
        }

        Err(DomainError::LookupMiss(format!(
            "{} not found",
            labels.join(".")
        )))
    }
}
