//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all stored records.
//! Every record carries a unique, timestamp-based identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash + fmt::Display;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Record identifier: Unix time in milliseconds, as a string
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Generate an id from `now_millis`, bumping past any value `taken` reports
    pub fn generate(now_millis: i64, taken: impl Fn(&RecordId) -> bool) -> Self {
        let mut candidate = now_millis;
        loop {
            let id = RecordId(candidate.to_string());
            if !taken(&id) {
                return id;
            }
            candidate += 1;
        }
    }

    /// Generate from the current wall clock
    pub fn generate_now(taken: impl Fn(&RecordId) -> bool) -> Self {
        Self::generate(chrono::Utc::now().timestamp_millis(), taken)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_uses_timestamp() {
        let id = RecordId::generate(1_700_000_000_000, |_| false);
        assert_eq!(id.as_str(), "1700000000000");
    }

    #[test]
    fn test_generate_skips_taken_ids() {
        let taken = [RecordId::from("42"), RecordId::from("43")];
        let id = RecordId::generate(42, |candidate| taken.contains(candidate));
        assert_eq!(id, RecordId::from("44"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&RecordId::from("1699")).unwrap();
        assert_eq!(json, "\"1699\"");
    }
}
