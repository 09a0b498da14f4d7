use super::RecordType;
use std::net::{Ipv4Addr, Ipv6Addr};

/// DS rdata as published on a `ds-rdata:` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegationSigner {
    pub key_tag: u16,
    pub algorithm: u8,
    pub digest_type: u8,
    pub digest: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    Ns(String),
    Ds(DelegationSigner),
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Cname(String),
}

/// Class IN resource record. Owner and target names are fully qualified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,
    pub ttl: u32,
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self.data {
            RecordData::Ns(_) => RecordType::NS,
            RecordData::Ds(_) => RecordType::DS,
            RecordData::A(_) => RecordType::A,
            RecordData::Aaaa(_) => RecordType::AAAA,
            RecordData::Cname(_) => RecordType::CNAME,
        }
    }
}

