use std::fmt;
use uuid::Uuid;

use super::Role;

// Identifiers are strings rather than parsed UUIDs: rows read back from the
// sheet may carry any text in the id column, and synthesized person ids are
// not UUIDs at all.
macro_rules! define_id_type {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn from_raw(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::from_raw(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from_raw(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.into_inner()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }
    };
}

define_id_type!(SubmissionId);
define_id_type!(PersonId);

impl PersonId {
    /// Id for a person read back from a stored row, e.g. `parent-2-<row id>`.
    /// `slot` is 1-based, matching the column headers.
    pub fn synthesized(role: Role, slot: usize, row_id: &SubmissionId) -> Self {
        Self(format!("{}-{}-{}", role.as_str(), slot, row_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_uuids() {
        let first = SubmissionId::new();
        let second = SubmissionId::new();

        assert_ne!(first, second);
        assert!(Uuid::parse_str(first.as_str()).is_ok());
    }

    #[test]
    fn raw_ids_are_kept_verbatim() {
        let id = SubmissionId::from_raw(" 42 ");
        assert_eq!(id.as_str(), " 42 ");
    }

    #[test]
    fn synthesized_person_id_uses_role_slot_and_row() {
        let row_id = SubmissionId::from_raw("abc");

        assert_eq!(
            PersonId::synthesized(Role::Parent, 1, &row_id).as_str(),
            "parent-1-abc"
        );
        assert_eq!(
            PersonId::synthesized(Role::Student, 3, &row_id).as_str(),
            "student-3-abc"
        );
    }
}
