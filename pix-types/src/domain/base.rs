//! Identity and timestamps shared by every entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Declares a string-backed entity identifier.
///
/// Identifiers are opaque strings so callers can supply their own; `new()`
/// generates a UUID v4.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true when the identifier holds no characters.
            pub fn is_empty(&self) -> bool {
                self.0.trim().is_empty()
            }

            /// Returns the inner string.
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

pub(crate) use string_id;

/// Identity and audit timestamps embedded in every entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Base<Id> {
    /// Unique identifier, immutable after creation
    pub id: Id,
    /// Set once when the entity is created
    pub created_at: DateTime<Utc>,
    /// Refreshed by every mutating operation
    pub updated_at: DateTime<Utc>,
}

impl<Id> Base<Id> {
    /// Stamps a fresh base with the current time.
    pub fn new(id: Id) -> Self {
        let now = Utc::now();
        Self {
            id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the entity as modified now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    string_id!(SampleId);

    #[test]
    fn test_generated_ids_are_unique() {
        let a = SampleId::new();
        let b = SampleId::new();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_blank_id_is_empty() {
        assert!(SampleId::from("").is_empty());
        assert!(SampleId::from("   ").is_empty());
        assert!(!SampleId::from("tx-1").is_empty());
    }

    #[test]
    fn test_touch_moves_updated_at_forward() {
        let mut base = Base::new(SampleId::new());
        let created = base.created_at;
        base.touch();
        assert_eq!(base.created_at, created);
        assert!(base.updated_at >= created);
    }
}
