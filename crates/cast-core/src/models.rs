//! Typed shapes of a cast member as it is created, stored and (eventually) updated.

use serde::{Deserialize, Serialize};

use crate::ids::CastId;

/// Fields supplied by the caller when creating a cast member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastIn {
    pub name: String,
    pub nationality: String,
}

impl CastIn {
    pub fn new(name: impl Into<String>, nationality: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nationality: nationality.into(),
        }
    }

    /// Attach a store-assigned id, producing the stored shape.
    pub fn with_id(self, id: CastId) -> CastOut {
        CastOut {
            id,
            name: self.name,
            nationality: self.nationality,
        }
    }
}

/// A stored cast member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastOut {
    pub id: CastId,
    pub name: String,
    pub nationality: String,
}

/// Fields eligible for partial update. No store operation consumes this yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
}
