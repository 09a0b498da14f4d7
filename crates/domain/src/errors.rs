use thiserror::Error;

/// Reasons the registry engine cannot answer a query.
///
/// Every variant is a per-query decline: the caller passes the query on to
/// the next handler instead of turning it into a DNS error response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Query name does not match any known shape: {0}")]
    ClassificationMismatch(String),

    #[error("No registry object covers {0}")]
    LookupMiss(String),

    #[error("Failed to read registry object {path}: {reason}")]
    FileReadFailure { path: String, reason: String },

    #[error("Malformed record line: {0}")]
    MalformedRecordLine(String),

    #[error("Malformed glue address for {nameserver}: {address}")]
    MalformedGlueAddress { nameserver: String, address: String },
}
