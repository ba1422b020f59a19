//! Registry error definitions.

use thiserror::Error;

/// Errors produced by registry operations.
///
/// Every failure is terminal for the request that caused it and leaves the
/// registry unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Referenced activity name has no registry entry.
    #[error("Activity not found")]
    NotFound,

    /// Enroll attempted for an email already on that activity's roster.
    #[error("Student is already signed up for this activity")]
    AlreadyEnrolled,

    /// Withdraw attempted for an email absent from the roster.
    #[error("Student is not signed up for this activity")]
    NotEnrolled,

    /// Enroll attempted on a roster that is at capacity.
    #[error("Activity is full")]
    CapacityExceeded,
}
