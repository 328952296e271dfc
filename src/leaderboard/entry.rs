//! @ai:module:intent Leaderboard entry definition
//! @ai:module:layer domain
//! @ai:module:public_api LeaderboardEntry
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

/// @ai:intent One leaderboard row: a run directory and the model that produced it
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub dirname: String,
    pub model: String,
}

impl LeaderboardEntry {
    /// @ai:intent Create an entry from its run directory and model
    /// @ai:effects pure
    pub fn new(dirname: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            dirname: dirname.into(),
            model: model.into(),
        }
    }
}
