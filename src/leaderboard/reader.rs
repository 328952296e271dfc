//! @ai:module:intent YAML reader for the leaderboard manifest
//! @ai:module:layer infrastructure
//! @ai:module:public_api LeaderboardReader
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::leaderboard::LeaderboardEntry;
use std::path::Path;

/// @ai:intent Trait for reading the leaderboard manifest
pub trait LeaderboardReaderTrait: Send + Sync {
    /// @ai:intent Read all entries in manifest order
    fn read_leaderboard(&self, path: &Path) -> Result<Vec<LeaderboardEntry>>;
}

/// @ai:intent Reads leaderboard entries from a YAML manifest
/// @ai:effects pure (stateless)
pub struct LeaderboardReader;

impl LeaderboardReader {
    /// @ai:intent Create a new leaderboard reader
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Parse manifest text into entries
    /// @ai:effects pure
    fn parse(content: &str, path: &Path) -> Result<Vec<LeaderboardEntry>> {
        serde_yaml::from_str(content).map_err(|source| Error::LeaderboardParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for LeaderboardReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LeaderboardReaderTrait for LeaderboardReader {
    /// @ai:intent Read the manifest; any failure is fatal to the caller
    /// @ai:pre path points to a YAML sequence of mappings with dirname and model
    /// @ai:effects fs:read
    fn read_leaderboard(&self, path: &Path) -> Result<Vec<LeaderboardEntry>> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::LeaderboardRead {
            path: path.to_path_buf(),
            source,
        })?;

        let entries = Self::parse(&content, path)?;
        tracing::debug!("Read {} leaderboard entries from {}", entries.len(), path.display());
        Ok(entries)
    }
}
