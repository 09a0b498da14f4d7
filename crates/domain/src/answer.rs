use crate::{DomainError, ResourceRecord};

/// Records for the authority and additional sections of one response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    pub authority: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

impl AnswerSet {
    pub fn new(authority: Vec<ResourceRecord>, additional: Vec<ResourceRecord>) -> Self {
        Self {
            authority,
            additional,
        }
    }

    /// Glue for the queried host itself, returned instead of the delegation.
    pub fn direct(records: Vec<ResourceRecord>) -> Self {
        Self {
            authority: records,
            additional: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.authority.is_empty() && self.additional.is_empty()
    }
}

/// Result of running a query through the registry engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Answered(AnswerSet),
    /// The engine cannot serve this query; the next handler should try.
    Declined(DomainError),
}
