use registry_dns_domain::ObjectClass;
use registry_dns_infrastructure::registry::FsRegistryStore;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Registry checkout in a temporary directory, removed on drop.
pub struct RegistryFixture {
    dir: TempDir,
}

impl RegistryFixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        for class in [ObjectClass::Inetnum, ObjectClass::Inet6num, ObjectClass::Dns] {
            fs::create_dir_all(dir.path().join("data").join(class.as_str())).unwrap();
        }
        Self { dir }
    }

    pub fn with_object(self, class: ObjectClass, filename: &str, lines: &[&str]) -> Self {
        let mut contents = lines.join("\n");
        contents.push('\n');
        fs::write(self.object_path(class, filename), contents).unwrap();
        self
    }

    pub fn with_raw_object(self, class: ObjectClass, filename: &str, contents: &[u8]) -> Self {
        fs::write(self.object_path(class, filename), contents).unwrap();
        self
    }

    pub fn with_subdirectory(self, class: ObjectClass, name: &str) -> Self {
        fs::create_dir_all(self.object_path(class, name)).unwrap();
        self
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn store(&self) -> FsRegistryStore {
        FsRegistryStore::open(self.root()).unwrap()
    }

    fn object_path(&self, class: ObjectClass, filename: &str) -> std::path::PathBuf {
        self.dir.path().join("data").join(class.as_str()).join(filename)
    }
}
