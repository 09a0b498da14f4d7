//! Classification of query names into registry search keys.
//!
//! Shapes are tried in order: IPv4 reverse (`in-addr.arpa.`), IPv6 reverse
//! (`ip6.arpa.`), then forward domain. A reverse name that fails to parse
//! falls through to the next shape.

use crate::{DomainError, ObjectClass};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

pub const IPV4_PTR_SUFFIX: &str = ".in-addr.arpa.";
pub const IPV6_PTR_SUFFIX: &str = ".ip6.arpa.";

const IPV4_LABELS: usize = 4;
const IPV6_NIBBLES: usize = 32;

/// Address to search for plus the most specific prefix length worth probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReverseKey {
    V4 { address: Ipv4Addr, ceiling: u8 },
    V6 { address: Ipv6Addr, ceiling: u8 },
}

impl ReverseKey {
    pub fn address(&self) -> IpAddr {
        match *self {
            ReverseKey::V4 { address, .. } => IpAddr::V4(address),
            ReverseKey::V6 { address, .. } => IpAddr::V6(address),
        }
    }

    pub fn ceiling(&self) -> u8 {
        match *self {
            ReverseKey::V4 { ceiling, .. } | ReverseKey::V6 { ceiling, .. } => ceiling,
        }
    }

    pub fn object_class(&self) -> ObjectClass {
        ObjectClass::for_address(self.address())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKind {
    Reverse(ReverseKey),
    /// Labels from most to least specific, without the root label.
    Forward(Vec<String>),
}

impl QueryKind {
    pub fn classify(qname: &str) -> Result<Self, DomainError> {
        if let Ok(key) = parse_ipv4_ptr(qname) {
            return Ok(QueryKind::Reverse(key));
        }
        if let Ok(key) = parse_ipv6_ptr(qname) {
            return Ok(QueryKind::Reverse(key));
        }
        forward_labels(qname).map(QueryKind::Forward)
    }
}

/// Parses `d.c.b.a.in-addr.arpa.` style names. Fewer than four labels are
/// padded with zero octets and lower the ceiling to `8 * labels`; a trailing
/// `/<mask>` on the first label lowers it further.
pub fn parse_ipv4_ptr(qname: &str) -> Result<ReverseKey, DomainError> {
    let reversed = qname
        .strip_suffix(IPV4_PTR_SUFFIX)
        .ok_or_else(|| mismatch(qname, "not an in-addr.arpa name"))?;

    let mut labels: Vec<&str> = reversed.split('.').collect();
    if labels.len() > IPV4_LABELS {
        return Err(mismatch(qname, "too many labels for an IPv4 address"));
    }
    labels.reverse();

    let mut ceiling = (labels.len() * 8) as u8;
    labels.resize(IPV4_LABELS, "0");
    let joined = labels.join(".");

    let address = match joined.split_once('/') {
        Some((address, mask)) => {
            let mask: u32 = mask
                .parse()
                .map_err(|_| mismatch(qname, "invalid classless mask"))?;
            ceiling = u32::from(ceiling).min(mask) as u8;
            address
        }
        None => joined.as_str(),
    };

    let address: Ipv4Addr = address
        .parse()
        .map_err(|_| mismatch(qname, "not an IPv4 address"))?;

    Ok(ReverseKey::V4 { address, ceiling })
}

/// Parses nibble-format `ip6.arpa.` names, padding missing low-order nibbles
/// with zero. IPv4-mapped results are rejected.
pub fn parse_ipv6_ptr(qname: &str) -> Result<ReverseKey, DomainError> {
    let reversed = qname
        .strip_suffix(IPV6_PTR_SUFFIX)
        .ok_or_else(|| mismatch(qname, "not an ip6.arpa name"))?;

    let mut nibbles: Vec<&str> = reversed.split('.').collect();
    if nibbles.len() > IPV6_NIBBLES {
        return Err(mismatch(qname, "too many nibbles for an IPv6 address"));
    }
    if !nibbles
        .iter()
        .all(|n| n.len() == 1 && n.bytes().all(|b| b.is_ascii_hexdigit()))
    {
        return Err(mismatch(qname, "labels must be single hex nibbles"));
    }
    nibbles.reverse();

    let ceiling = (nibbles.len() * 4) as u8;
    nibbles.resize(IPV6_NIBBLES, "0");
    let grouped = nibbles
        .chunks(4)
        .map(|group| group.concat())
        .collect::<Vec<_>>()
        .join(":");

    let address: Ipv6Addr = grouped
        .parse()
        .map_err(|_| mismatch(qname, "not an IPv6 address"))?;
    if address.to_ipv4_mapped().is_some() {
        return Err(mismatch(qname, "IPv4-mapped address"));
    }

    Ok(ReverseKey::V6 { address, ceiling })
}

pub fn forward_labels(qname: &str) -> Result<Vec<String>, DomainError> {
    let name = qname.strip_suffix('.').unwrap_or(qname);
    if name.is_empty() {
        return Err(mismatch(qname, "root name"));
    }
    Ok(name.split('.').map(str::to_string).collect())
}

fn mismatch(qname: &str, reason: &str) -> DomainError {
    DomainError::ClassificationMismatch(format!("{}: {}", qname, reason))
}
