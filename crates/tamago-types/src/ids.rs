//! Type-safe identifier wrappers around [`Uuid`].
//!
//! A pet's identity lasts for one lifetime: reinitializing the simulation
//! mints a fresh [`PetId`], which lets a view notice that the pet it was
//! rendering has been replaced by a newborn. IDs use UUID v7 so they sort
//! by creation time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Unique identifier for one pet lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PetId(pub Uuid);

impl PetId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for PetId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for PetId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for PetId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<PetId> for Uuid {
    fn from(id: PetId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_distinct() {
        let a = PetId::new();
        let b = PetId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn uuid_round_trip() {
        let id = PetId::new();
        let raw: Uuid = id.into();
        assert_eq!(PetId::from(raw), id);
        assert_eq!(id.to_string(), raw.to_string());
    }
}
