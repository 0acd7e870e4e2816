//! Named color records.

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::OklchColor;

/// Length of generated record ids.
pub const ID_LENGTH: usize = 9;

fn default_votes() -> u32 {
    1
}

/// One submitted (or seeded) color name.
///
/// The JSON form uses camelCase keys and omits `suspiciousReason` when it is
/// absent, matching the persisted record layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorEntry {
    pub id: String,
    pub color: OklchColor,
    pub name: String,
    #[serde(default = "default_votes")]
    pub votes: u32,
    /// Flagged records are kept for audit but never clustered.
    #[serde(default)]
    pub is_suspicious: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspicious_reason: Option<String>,
    /// Milliseconds since the Unix epoch
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub is_seed: bool,
}

impl ColorEntry {
    /// A fresh, unflagged record with one vote.
    pub fn new(
        id: impl Into<String>,
        color: OklchColor,
        name: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            id: id.into(),
            color,
            name: name.into(),
            votes: 1,
            is_suspicious: false,
            suspicious_reason: None,
            timestamp,
            is_seed: false,
        }
    }

    /// Mark the record as suspicious with a machine-readable reason.
    pub fn flagged(mut self, reason: impl Into<String>) -> Self {
        self.is_suspicious = true;
        self.suspicious_reason = Some(reason.into());
        self
    }

    /// Mark the record as synthetic seed data.
    pub fn seeded(mut self) -> Self {
        self.is_seed = true;
        self
    }
}

/// Generate a random lower-case alphanumeric record id.
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LENGTH)
        .map(|_| char::from(rng.sample(Alphanumeric)).to_ascii_lowercase())
        .collect()
}
