//! Activity record type.

use serde::{Deserialize, Serialize};

/// A single extracurricular activity as exposed on the wire.
///
/// The name is not part of the record; it is the registry key, and payloads
/// are shaped as a mapping from name to record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Human-readable description.
    pub description: String,

    /// Meeting time, free-form text.
    pub schedule: String,

    /// Roster capacity.
    pub max_participants: u32,

    /// Enrolled emails, in signup order.
    pub participants: Vec<String>,
}

impl Activity {
    /// Returns true if `email` is already on the roster.
    /// Matching is exact: case-sensitive, no trimming.
    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Returns true if the roster has reached capacity.
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    /// Number of open roster slots.
    pub fn spots_left(&self) -> usize {
        (self.max_participants as usize).saturating_sub(self.participants.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(capacity: u32, participants: &[&str]) -> Activity {
        Activity {
            description: "desc".to_string(),
            schedule: "Mondays".to_string(),
            max_participants: capacity,
            participants: participants.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_enrollment_matching_is_exact() {
        let a = activity(5, &["kid@school.edu"]);
        assert!(a.is_enrolled("kid@school.edu"));
        assert!(!a.is_enrolled("KID@school.edu")); // case-sensitive
        assert!(!a.is_enrolled(" kid@school.edu")); // no trimming
    }

    #[test]
    fn test_capacity_accounting() {
        let a = activity(2, &["a@x", "b@x"]);
        assert!(a.is_full());
        assert_eq!(a.spots_left(), 0);

        let b = activity(3, &["a@x"]);
        assert!(!b.is_full());
        assert_eq!(b.spots_left(), 2);
    }
}
