use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Largest TTL a resource record may carry (RFC 2181, section 8).
pub const MAX_TTL: u32 = 2_147_483_647;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Registry checkout root. Objects are read from `<path>/data/<class>`.
    pub path: PathBuf,

    /// TTL stamped on every synthesized record.
    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

impl RegistryConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ttl: default_ttl(),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new(PathBuf::new())
    }
}

pub fn default_ttl() -> u32 {
    3600
}
