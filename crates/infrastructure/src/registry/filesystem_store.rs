use async_trait::async_trait;
use registry_dns_application::ports::RegistryStore;
use registry_dns_domain::{DomainError, ObjectClass};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const DATA_DIR: &str = "data";

/// Registry checkout on local disk, laid out as `<root>/data/<class>/<filename>`.
///
/// Nothing is cached: every probe and read goes to the filesystem, so edits to
/// the checkout are visible to the next query.
#[derive(Debug, Clone)]
pub struct FsRegistryStore {
    data_dir: PathBuf,
}

impl FsRegistryStore {
    /// Fails if `<root>/data` is missing or cannot be listed.
    pub fn open(root: impl AsRef<Path>) -> io::Result<Self> {
        let data_dir = root.as_ref().join(DATA_DIR);

        let metadata = std::fs::metadata(&data_dir)
            .map_err(|e| with_path(e, "reading registry data directory", &data_dir))?;
        if !metadata.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a directory", data_dir.display()),
            ));
        }
        std::fs::read_dir(&data_dir)
            .map_err(|e| with_path(e, "listing registry data directory", &data_dir))?;

        for class in [ObjectClass::Inetnum, ObjectClass::Inet6num, ObjectClass::Dns] {
            if !data_dir.join(class.as_str()).is_dir() {
                info!(class = %class, "Registry has no directory for object class");
            }
        }

        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// `None` when the name could reach outside its class directory.
    fn object_path(&self, class: ObjectClass, filename: &str) -> Option<PathBuf> {
        if !is_plain_filename(filename) {
            debug!(filename = %filename, "Rejected registry object name");
            return None;
        }
        Some(self.data_dir.join(class.as_str()).join(filename))
    }
}

fn with_path(e: io::Error, action: &str, path: &Path) -> io::Error {
    io::Error::new(e.kind(), format!("{} {}: {}", action, path.display(), e))
}

fn is_plain_filename(filename: &str) -> bool {
    !filename.is_empty()
        && filename != "."
        && filename != ".."
        && !filename.contains(['/', '\\', '\0'])
}

#[async_trait]
impl RegistryStore for FsRegistryStore {
    async fn exists(&self, class: ObjectClass, filename: &str) -> bool {
        let Some(path) = self.object_path(class, filename) else {
            return false;
        };
        tokio::fs::metadata(&path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
    }

    async fn read_lines(
        &self,
        class: ObjectClass,
        filename: &str,
    ) -> Result<Vec<String>, DomainError> {
        let path = self
            .object_path(class, filename)
            .ok_or_else(|| DomainError::FileReadFailure {
                path: format!("{}/{}", class, filename),
                reason: "invalid object name".to_string(),
            })?;

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| DomainError::FileReadFailure {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        // Free-text attributes are not guaranteed to be UTF-8.
        Ok(String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect())
    }
}
