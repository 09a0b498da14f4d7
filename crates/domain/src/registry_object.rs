use crate::DomainError;
use ipnetwork::IpNetwork;
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;

/// Object class of a registry file; doubles as its directory under `data/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectClass {
    Inetnum,
    Inet6num,
    Dns,
}

impl ObjectClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectClass::Inetnum => "inetnum",
            ObjectClass::Inet6num => "inet6num",
            ObjectClass::Dns => "dns",
        }
    }

    pub fn for_address(address: IpAddr) -> Self {
        match address {
            IpAddr::V4(_) => ObjectClass::Inetnum,
            IpAddr::V6(_) => ObjectClass::Inet6num,
        }
    }
}

impl fmt::Display for ObjectClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registry file known to exist at lookup time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryFileRef {
    pub class: ObjectClass,
    pub filename: Arc<str>,
    /// Prefix length of the matching block; `None` for domain objects.
    pub prefix_len: Option<u8>,
}

impl RegistryFileRef {
    pub fn network(class: ObjectClass, filename: impl Into<Arc<str>>, prefix_len: u8) -> Self {
        Self {
            class,
            filename: filename.into(),
            prefix_len: Some(prefix_len),
        }
    }

    pub fn domain(filename: impl Into<Arc<str>>) -> Self {
        Self {
            class: ObjectClass::Dns,
            filename: filename.into(),
            prefix_len: None,
        }
    }
}

impl fmt::Display for RegistryFileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.class, self.filename)
    }
}

/// Filename of the block `address/prefix_len`: the canonical network in CIDR
/// notation with `/` replaced by `_`, e.g. `172.20.0.0_24`.
pub fn cidr_filename(address: IpAddr, prefix_len: u8) -> Result<String, DomainError> {
    let network = IpNetwork::new(address, prefix_len).map_err(|e| {
        DomainError::LookupMiss(format!("{}/{}: {}", address, prefix_len, e))
    })?;
    Ok(format!("{}_{}", network.network(), network.prefix()))
}
