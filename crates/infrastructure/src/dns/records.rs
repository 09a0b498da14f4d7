use hickory_proto::dnssec::rdata::{DNSSECRData, DS};
use hickory_proto::dnssec::{Algorithm, DigestType};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, NS};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::ProtoError;
use registry_dns_domain::{DelegationSigner, RecordData, ResourceRecord};

/// Builds a wire name from dotted text without escape processing.
///
/// Classless reverse labels such as `64/26` are kept as raw bytes.
pub fn to_name(name: &str) -> Result<Name, ProtoError> {
    let labels = name.split('.').filter(|label| !label.is_empty());
    let mut wire = Name::from_labels(labels.map(str::as_bytes))?;
    wire.set_fqdn(true);
    Ok(wire)
}

/// Lowercased dotted text of a query name with a trailing dot.
pub fn query_name_text(name: &Name) -> String {
    let mut text = String::new();
    for label in name.iter() {
        text.push_str(&String::from_utf8_lossy(label).to_ascii_lowercase());
        text.push('.');
    }
    if text.is_empty() {
        text.push('.');
    }
    text
}

pub fn to_hickory(record: &ResourceRecord) -> Result<Record, ProtoError> {
    let rdata = match &record.data {
        RecordData::Ns(host) => RData::NS(NS(to_name(host)?)),
        RecordData::Cname(target) => RData::CNAME(CNAME(to_name(target)?)),
        RecordData::A(addr) => RData::A(A(*addr)),
        RecordData::Aaaa(addr) => RData::AAAA(AAAA(*addr)),
        RecordData::Ds(ds) => RData::DNSSEC(DNSSECRData::DS(to_ds(ds))),
    };
    Ok(Record::from_rdata(to_name(&record.name)?, record.ttl, rdata))
}

pub fn to_hickory_all(records: &[ResourceRecord]) -> Result<Vec<Record>, ProtoError> {
    records.iter().map(to_hickory).collect()
}

fn to_ds(ds: &DelegationSigner) -> DS {
    DS::new(
        ds.key_tag,
        Algorithm::from_u8(ds.algorithm),
        DigestType::from(ds.digest_type),
        ds.digest.clone(),
    )
}
