use async_trait::async_trait;
use registry_dns_domain::{DomainError, ObjectClass};

/// Read-only view of the registry: an existence oracle plus a line reader.
///
/// Existence of `(class, filename)` is membership in the index; there is no
/// separate catalog to keep in sync.
#[async_trait]
pub trait RegistryStore: Send + Sync {
    async fn exists(&self, class: ObjectClass, filename: &str) -> bool;

    async fn read_lines(
        &self,
        class: ObjectClass,
        filename: &str,
    ) -> Result<Vec<String>, DomainError>;
}
