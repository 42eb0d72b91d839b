//! Thinker network snapshot types
//!
//! The surrounding application owns the canonical thinker and connection
//! records; the engine borrows read-only slices of these snapshot types for
//! the duration of a single computation and holds nothing across calls.

use serde::{Deserialize, Serialize};

/// A node in the influence network.
///
/// Only the identifier and display name matter to the analytics engine;
/// every other domain attribute stays with the owning application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thinker {
    /// Unique identifier
    pub id: String,

    /// Display name used in path and ranking output
    pub name: String,
}

impl Thinker {
    /// Create a thinker snapshot record
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Thinker {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A directed, optionally mutual influence connection between two thinkers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Source thinker id
    pub from_id: String,

    /// Target thinker id
    pub to_id: String,

    /// Relationship tag (e.g. "influenced", "critiqued"). Informational
    /// only; scoring does not consult it.
    pub connection_type: String,

    /// Strength in 1..=5. Reserved for weighted ranking; the current
    /// algorithms ignore it.
    pub strength: u8,

    /// Mutual connections are traversed in both directions
    pub bidirectional: bool,
}

impl Connection {
    /// Create a one-way connection with mid-range strength
    pub fn new(
        from_id: impl Into<String>,
        to_id: impl Into<String>,
        connection_type: impl Into<String>,
    ) -> Self {
        Connection {
            from_id: from_id.into(),
            to_id: to_id.into(),
            connection_type: connection_type.into(),
            strength: 3,
            bidirectional: false,
        }
    }

    /// Mark the connection as mutual
    pub fn mutual(mut self) -> Self {
        self.bidirectional = true;
        self
    }

    /// Set the connection strength (1..=5)
    pub fn with_strength(mut self, strength: u8) -> Self {
        self.strength = strength;
        self
    }
}
