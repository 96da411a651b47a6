use learnflow_core::DomainRef;
use serde::{Deserialize, Serialize};

/// Configuration stored in config.yaml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Minimum number of domains to pick before finishing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_domains: Option<usize>,
}

/// The domains picked at the end of sign-up, stored in profile.yaml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionProfile {
    pub completed_at: jiff::Timestamp,
    #[serde(default)]
    pub domains: Vec<DomainRef>,
}

impl SelectionProfile {
    pub fn new(domains: Vec<DomainRef>) -> Self {
        Self {
            completed_at: jiff::Timestamp::now(),
            domains,
        }
    }
}
