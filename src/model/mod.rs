pub mod dimension;
pub mod error;
pub mod leaderboard_entry;
pub mod scenario;
pub mod session;
