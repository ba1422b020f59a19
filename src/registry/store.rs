//! The in-memory activity registry.
//!
//! # Responsibilities
//! - Own the name → activity mapping
//! - Enforce enrollment invariants (existence, uniqueness, capacity)
//! - Serve consistent snapshots for the read endpoints
//!
//! # Design Decisions
//! - One RwLock over the whole map; every operation is an instantaneous
//!   read/modify step and the guard is never held across an await
//! - Mutations are all-or-nothing: a failed operation leaves the map untouched
//! - Lock poisoning is recovered via `into_inner`; no registry operation
//!   panics while holding the guard mid-mutation

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::registry::activity::Activity;
use crate::registry::error::RegistryError;
use crate::registry::seed::{self, SeedActivity, SeedError};

/// The shared in-memory store mapping activity names to records.
///
/// Names are fixed at construction; only the participant rosters mutate.
pub struct ActivityRegistry {
    inner: RwLock<BTreeMap<String, Activity>>,
}

impl ActivityRegistry {
    /// Build a registry from validated seed data.
    ///
    /// The seed is re-validated here so every construction path enforces the
    /// same invariants (unique names, positive capacity, distinct rosters).
    pub fn from_seed(activities: Vec<SeedActivity>) -> Result<Self, SeedError> {
        seed::validate_seed(&activities)?;

        let map = activities
            .into_iter()
            .map(SeedActivity::into_entry)
            .collect();

        Ok(Self {
            inner: RwLock::new(map),
        })
    }

    /// Number of activities in the registry.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Full mapping of activity name to record. Always succeeds.
    pub fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.read().clone()
    }

    /// Look up one activity by its decoded literal name.
    pub fn get(&self, name: &str) -> Result<Activity, RegistryError> {
        self.read()
            .get(name)
            .cloned()
            .ok_or(RegistryError::NotFound)
    }

    /// Add `email` to the end of the activity's roster.
    ///
    /// Returns the new roster size. Fails without mutating anything if the
    /// activity does not exist, the email is already enrolled, or the roster
    /// is at capacity.
    pub fn enroll(&self, name: &str, email: &str) -> Result<usize, RegistryError> {
        let mut map = self.write();
        let activity = map.get_mut(name).ok_or(RegistryError::NotFound)?;

        if activity.is_enrolled(email) {
            return Err(RegistryError::AlreadyEnrolled);
        }
        if activity.is_full() {
            return Err(RegistryError::CapacityExceeded);
        }

        activity.participants.push(email.to_string());
        Ok(activity.participants.len())
    }

    /// Remove `email` from the activity's roster.
    ///
    /// Removal is by value equality; insertion order of the remaining
    /// participants is preserved. Returns the new roster size.
    pub fn withdraw(&self, name: &str, email: &str) -> Result<usize, RegistryError> {
        let mut map = self.write();
        let activity = map.get_mut(name).ok_or(RegistryError::NotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RegistryError::NotEnrolled)?;

        activity.participants.remove(position);
        Ok(activity.participants.len())
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, Activity>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Activity>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
