pub mod catalog;
pub mod controller;
pub mod engine;
pub mod interpret;
pub mod leaderboard;
pub mod protocol;
