use anyhow::Context;
use registry_dns_domain::Config;
use registry_dns_infrastructure::registry::FsRegistryStore;
use tracing::{error, info};

pub fn open_registry(config: &Config) -> anyhow::Result<FsRegistryStore> {
    let root = &config.registry.path;
    let store = FsRegistryStore::open(root)
        .inspect_err(|e| error!(path = %root.display(), error = %e, "Registry unusable"))
        .with_context(|| format!("opening registry at {}", root.display()))?;

    info!(
        data_dir = %store.data_dir().display(),
        ttl = config.registry.ttl,
        "Registry opened"
    );
    Ok(store)
}
