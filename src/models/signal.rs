use serde::{Deserialize, Serialize};

/// A human-readable trading signal: a short category label plus a
/// one-sentence summary of the current state. Constructed fresh on every
/// evaluation; carries no identity beyond the pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalRecord {
    pub title: String,
    pub summary: String,
}

impl SignalRecord {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
        }
    }
}
