use registry_dns_domain::registry_line::parse_ds_rdata;
use registry_dns_domain::{
    AnswerSet, DomainError, NameserverEntry, RecordData, RegistryFileRef, RegistryLine,
    ResourceRecord,
};
use rustc_hash::FxHashSet;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::RegistryStore;

/// Turns a registry object into authority (NS, DS) and additional (glue)
/// records owned by `qname`.
pub struct RegistryFileParser {
    store: Arc<dyn RegistryStore>,
    ttl: u32,
}

impl RegistryFileParser {
    pub fn new(store: Arc<dyn RegistryStore>, ttl: u32) -> Self {
        Self { store, ttl }
    }

    #[instrument(skip(self), fields(file = %file), level = "debug")]
    pub async fn parse(&self, file: &RegistryFileRef, qname: &str) -> Result<AnswerSet, DomainError> {
        let lines = self.store.read_lines(file.class, &file.filename).await?;
        let answer = build_answer(qname, &lines, self.ttl)?;
        debug!(
            authority = answer.authority.len(),
            additional = answer.additional.len(),
            "Registry object parsed"
        );
        Ok(answer)
    }
}

/// Builds the answer for `qname` from the lines of one registry object.
///
/// NS records are deduplicated by host name, first occurrence first. Every
/// glue line yields a record in the additional section. If a glue record is
/// owned by `qname` itself, only those records are returned, as authority.
/// Any malformed line fails the whole object.
pub fn build_answer<S: AsRef<str>>(
    qname: &str,
    lines: &[S],
    ttl: u32,
) -> Result<AnswerSet, DomainError> {
    let mut authority = Vec::new();
    let mut additional = Vec::new();
    let mut direct = Vec::new();
    let mut seen_ns: FxHashSet<String> = FxHashSet::default();

    for line in lines {
        match RegistryLine::classify(line.as_ref()) {
            RegistryLine::Nserver(value) => {
                let entry = NameserverEntry::parse(value)?;
                let host = entry.fqdn();

                if seen_ns.insert(entry.name.clone()) {
                    authority.push(ResourceRecord::new(
                        qname,
                        ttl,
                        RecordData::Ns(host.clone()),
                    ));
                }

                if let Some(glue) = entry.glue {
                    let data = match glue {
                        IpAddr::V4(v4) => RecordData::A(v4),
                        IpAddr::V6(v6) => RecordData::Aaaa(v6),
                    };
                    let record = ResourceRecord::new(host, ttl, data);
                    if record.name == qname {
                        direct.push(record.clone());
                    }
                    additional.push(record);
                }
            }
            RegistryLine::DsRdata(value) => {
                let ds = parse_ds_rdata(value)?;
                authority.push(ResourceRecord::new(qname, ttl, RecordData::Ds(ds)));
            }
            RegistryLine::Other => {}
        }
    }

    if !direct.is_empty() {
        return Ok(AnswerSet::direct(direct));
    }
    Ok(AnswerSet::new(authority, additional))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_unrelated_lines() {
        let lines = [
            "domain:             example.dn42",
            "admin-c:            EXAMPLE-DN42",
            "source:             DN42",
        ];
        let answer = build_answer("example.dn42.", &lines, 3600).unwrap();
        assert!(answer.is_empty());
    }

    #[test]
    fn test_ns_owner_is_query_name() {
        let lines = ["nserver:            ns1.example.dn42"];
        let answer = build_answer("www.example.dn42.", &lines, 60).unwrap();
        assert_eq!(
            answer.authority,
            vec![ResourceRecord::new(
                "www.example.dn42.",
                60,
                RecordData::Ns("ns1.example.dn42.".to_string())
            )]
        );
        assert!(answer.additional.is_empty());
    }
}
