pub mod assignment;
pub mod leaderboard;
pub mod ranking;
pub mod rubric;
pub mod scoring;
