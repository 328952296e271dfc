//! @ai:module:intent Leaderboard manifest definitions and loading
//! @ai:module:layer domain
//! @ai:module:public_api LeaderboardEntry, LeaderboardReader

pub mod entry;
pub mod reader;

pub use entry::LeaderboardEntry;
pub use reader::{LeaderboardReader, LeaderboardReaderTrait};
