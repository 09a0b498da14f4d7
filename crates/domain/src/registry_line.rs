//! Record lines of a registry object.
//!
//! Attributes are single-line with a key padded to a fixed 20-column label,
//! e.g. `nserver:            ns1.example.dn42 172.20.0.53`.

use crate::{DelegationSigner, DomainError};
use std::net::IpAddr;

pub const LABEL_WIDTH: usize = 20;
pub const NSERVER_LABEL: &str = "nserver:            ";
pub const DS_RDATA_LABEL: &str = "ds-rdata:           ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryLine<'a> {
    Nserver(&'a str),
    DsRdata(&'a str),
    Other,
}

impl<'a> RegistryLine<'a> {
    pub fn classify(line: &'a str) -> Self {
        if let Some(rest) = line.strip_prefix(NSERVER_LABEL) {
            RegistryLine::Nserver(rest)
        } else if let Some(rest) = line.strip_prefix(DS_RDATA_LABEL) {
            RegistryLine::DsRdata(rest)
        } else {
            RegistryLine::Other
        }
    }
}

/// `nserver` value: a host name and an optional glue address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameserverEntry {
    pub name: String,
    pub glue: Option<IpAddr>,
}

impl NameserverEntry {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let value = value.trim();
        let (name, glue) = match value.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim())),
            None => (value, None),
        };

        if name.is_empty() {
            return Err(DomainError::MalformedRecordLine(
                "nserver line without a name".to_string(),
            ));
        }

        let glue = glue
            .filter(|address| !address.is_empty())
            .map(|address| parse_glue(name, address))
            .transpose()?;

        Ok(Self {
            name: name.to_string(),
            glue,
        })
    }

    /// Fully qualified host name, the owner of any glue record.
    pub fn fqdn(&self) -> String {
        format!("{}.", self.name)
    }
}

/// The family is decided by the presence of a colon; the address must then
/// parse as exactly that family.
fn parse_glue(nameserver: &str, address: &str) -> Result<IpAddr, DomainError> {
    let malformed = || DomainError::MalformedGlueAddress {
        nameserver: nameserver.to_string(),
        address: address.to_string(),
    };

    if address.contains(':') {
        let v6: std::net::Ipv6Addr = address.parse().map_err(|_| malformed())?;
        if v6.to_ipv4_mapped().is_some() {
            return Err(malformed());
        }
        Ok(IpAddr::V6(v6))
    } else {
        address.parse().map(IpAddr::V4).map_err(|_| malformed())
    }
}

/// Parses `<key tag> <algorithm> <digest type> <digest...>`. Whitespace inside
/// the digest is dropped before it is hex-decoded.
pub fn parse_ds_rdata(value: &str) -> Result<DelegationSigner, DomainError> {
    let malformed = |reason: &str| {
        DomainError::MalformedRecordLine(format!("ds-rdata '{}': {}", value.trim(), reason))
    };

    let mut rest = value.trim();
    let mut fields = [""; 3];
    for field in fields.iter_mut() {
        let (head, tail) = rest
            .split_once(char::is_whitespace)
            .ok_or_else(|| malformed("expected four fields"))?;
        *field = head;
        rest = tail.trim_start();
    }

    let digest: String = rest.split_whitespace().collect();
    if digest.is_empty() {
        return Err(malformed("expected four fields"));
    }

    Ok(DelegationSigner {
        key_tag: fields[0].parse().map_err(|_| malformed("invalid key tag"))?,
        algorithm: fields[1].parse().map_err(|_| malformed("invalid algorithm"))?,
        digest_type: fields[2]
            .parse()
            .map_err(|_| malformed("invalid digest type"))?,
        digest: hex::decode(&digest).map_err(|_| malformed("digest is not hex"))?,
    })
}
