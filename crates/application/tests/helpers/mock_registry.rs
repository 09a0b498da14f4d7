use async_trait::async_trait;
use registry_dns_application::ports::RegistryStore;
use registry_dns_domain::{DomainError, ObjectClass};
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, RwLock};

/// In-memory registry keyed by `(class, filename)`.
#[derive(Default)]
pub struct MockRegistryStore {
    objects: RwLock<HashMap<(ObjectClass, String), Vec<String>>>,
    unreadable: RwLock<HashSet<(ObjectClass, String)>>,
    probes: Mutex<Vec<(ObjectClass, String)>>,
}

impl MockRegistryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(self, class: ObjectClass, filename: &str, lines: &[&str]) -> Self {
        self.insert(class, filename, lines);
        self
    }

    pub fn insert(&self, class: ObjectClass, filename: &str, lines: &[&str]) {
        self.objects.write().unwrap().insert(
            (class, filename.to_string()),
            lines.iter().map(|l| l.to_string()).collect(),
        );
    }

    /// Object exists but reading it fails, as if it vanished or lost permissions.
    pub fn with_unreadable(self, class: ObjectClass, filename: &str) -> Self {
        self.insert(class, filename, &[]);
        self.unreadable
            .write()
            .unwrap()
            .insert((class, filename.to_string()));
        self
    }

    pub fn probes(&self) -> Vec<(ObjectClass, String)> {
        self.probes.lock().unwrap().clone()
    }

    pub fn probed_filenames(&self) -> Vec<String> {
        self.probes().into_iter().map(|(_, name)| name).collect()
    }
}

#[async_trait]
impl RegistryStore for MockRegistryStore {
    async fn exists(&self, class: ObjectClass, filename: &str) -> bool {
        self.probes
            .lock()
            .unwrap()
            .push((class, filename.to_string()));
        self.objects
            .read()
            .unwrap()
            .contains_key(&(class, filename.to_string()))
    }

    async fn read_lines(
        &self,
        class: ObjectClass,
        filename: &str,
    ) -> Result<Vec<String>, DomainError> {
        let key = (class, filename.to_string());
        if self.unreadable.read().unwrap().contains(&key) {
            return Err(DomainError::FileReadFailure {
                path: format!("{}/{}", class, filename),
                reason: "permission denied".to_string(),
            });
        }
        self.objects
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| DomainError::FileReadFailure {
                path: format!("{}/{}", class, filename),
                reason: "not found".to_string(),
            })
    }
}
