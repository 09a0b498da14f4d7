use crate::ports::RegistryStore;
use crate::services::{DomainResolver, PrefixResolver, RegistryFileParser};
use registry_dns_domain::{
    AnswerSet, ClasslessRedirect, DomainError, QueryKind, QueryOutcome, ReverseKey,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves a query name against the registry.
///
/// classify -> find object -> (IPv4) classless CNAME -> parse object. Any
/// failure along the way declines the query so the next handler can try.
pub struct ResolveRegistryQueryUseCase {
    prefix_resolver: PrefixResolver,
    domain_resolver: DomainResolver,
    parser: RegistryFileParser,
    ttl: u32,
}

impl ResolveRegistryQueryUseCase {
    pub fn new(store: Arc<dyn RegistryStore>, ttl: u32) -> Self {
        Self {
            prefix_resolver: PrefixResolver::new(Arc::clone(&store)),
            domain_resolver: DomainResolver::new(Arc::clone(&store)),
            parser: RegistryFileParser::new(store, ttl),
            ttl,
        }
    }

    pub async fn execute(&self, qname: &str) -> QueryOutcome {
        match self.resolve(qname).await {
            Ok(answer) => {
                debug!(
                    qname = %qname,
                    authority = answer.authority.len(),
                    additional = answer.additional.len(),
                    "Registry answer assembled"
                );
                QueryOutcome::Answered(answer)
            }
            Err(e) => {
                match &e {
                    DomainError::ClassificationMismatch(_) | DomainError::LookupMiss(_) => {
                        debug!(qname = %qname, reason = %e, "Declining query");
                    }
                    _ => {
                        warn!(qname = %qname, error = %e, "Registry object unusable, declining query");
                    }
                }
                QueryOutcome::Declined(e)
            }
        }
    }

    async fn resolve(&self, qname: &str) -> Result<AnswerSet, DomainError> {
        match QueryKind::classify(qname)? {
            QueryKind::Reverse(key @ ReverseKey::V4 { address, .. }) => {
                let file = self.prefix_resolver.resolve(&key).await?;
                let redirect = match file.prefix_len {
                    Some(prefix_len) => {
                        ClasslessRedirect::for_match(qname, address, prefix_len, self.ttl)
                    }
                    None => ClasslessRedirect::unchanged(qname),
                };

                let mut answer = self.parser.parse(&file, &redirect.effective_name).await?;
                if let Some(cname) = redirect.cname {
                    answer.authority.insert(0, cname);
                }
                Ok(answer)
            }
            QueryKind::Reverse(key) => {
                let file = self.prefix_resolver.resolve(&key).await?;
                self.parser.parse(&file, qname).await
            }
            QueryKind::Forward(labels) => {
                let file = self.domain_resolver.resolve(&labels).await?;
                self.parser.parse(&file, qname).await
            }
        }
    }
}
