//! RFC 2317 style classless reverse delegation.
//!
//! A block whose boundary falls inside the last octet (`/25` to `/31`) has its
//! records published under `<octet>/<prefix>.<c>.<b>.<a>.in-addr.arpa.`; a
//! query for the plain octet name is redirected there with a CNAME.

use crate::query_name::IPV4_PTR_SUFFIX;
use crate::{RecordData, ResourceRecord};
use std::net::Ipv4Addr;

pub fn needs_classless_cname(prefix_len: u8) -> bool {
    prefix_len > 24 && prefix_len < 32
}

/// `a.b.c.d/p` rendered as `d/p.c.b.a.in-addr.arpa.`.
pub fn classless_target(address: Ipv4Addr, prefix_len: u8) -> String {
    let cidr = format!("{}/{}", address, prefix_len);
    let mut labels: Vec<&str> = cidr.split('.').collect();
    labels.reverse();
    format!("{}{}", labels.join("."), IPV4_PTR_SUFFIX)
}

/// Outcome of the classless step: the CNAME to emit, if any, and the name
/// registry records are owned by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClasslessRedirect {
    pub cname: Option<ResourceRecord>,
    pub effective_name: String,
}

impl ClasslessRedirect {
    pub fn unchanged(qname: &str) -> Self {
        Self {
            cname: None,
            effective_name: qname.to_string(),
        }
    }

    /// `address` is the queried address and `prefix_len` the length the
    /// covering inetnum object matched at.
    pub fn for_match(qname: &str, address: Ipv4Addr, prefix_len: u8, ttl: u32) -> Self {
        if !needs_classless_cname(prefix_len) {
            return Self::unchanged(qname);
        }

        let target = classless_target(address, prefix_len);
        if target == qname {
            return Self::unchanged(qname);
        }

        Self {
            cname: Some(ResourceRecord::new(
                qname,
                ttl,
                RecordData::Cname(target.clone()),
            )),
            effective_name: target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query_name::parse_ipv4_ptr;

    const QNAME: &str = "1.0.168.192.in-addr.arpa.";

    fn addr() -> Ipv4Addr {
        "192.168.0.1".parse().unwrap()
    }

    #[test]
    fn test_target_for_every_prefix_length() {
        for prefix in 0..=32u8 {
            assert_eq!(
                classless_target(addr(), prefix),
                format!("1/{}.0.168.192.in-addr.arpa.", prefix)
            );
        }
    }

    #[test]
    fn test_target_round_trips_through_classifier() {
        for prefix in 0..=32u8 {
            let target = classless_target(addr(), prefix);
            let key = parse_ipv4_ptr(&target).unwrap();
            assert_eq!(key.address(), std::net::IpAddr::V4(addr()));
            assert_eq!(key.ceiling(), prefix);
        }
    }

    #[test]
    fn test_no_cname_on_octet_boundaries() {
        for prefix in [0u8, 8, 16, 24, 32] {
            let redirect = ClasslessRedirect::for_match(QNAME, addr(), prefix, 3600);
            assert!(redirect.cname.is_none());
            assert_eq!(redirect.effective_name, QNAME);
        }
    }

    #[test]
    fn test_cname_inside_last_octet() {
        for prefix in 25..32u8 {
            let redirect = ClasslessRedirect::for_match(QNAME, addr(), prefix, 300);
            let target = format!("1/{}.0.168.192.in-addr.arpa.", prefix);
            assert_ne!(target, QNAME);
            assert_eq!(redirect.effective_name, target);
            assert_eq!(
                redirect.cname,
                Some(ResourceRecord::new(QNAME, 300, RecordData::Cname(target)))
            );
        }
    }

    #[test]
    fn test_query_already_in_classless_form() {
        let qname = "64/26.0.20.172.in-addr.arpa.";
        let redirect =
            ClasslessRedirect::for_match(qname, "172.20.0.64".parse().unwrap(), 26, 3600);
        assert!(redirect.cname.is_none());
        assert_eq!(redirect.effective_name, qname);
    }
}
