pub mod assignments;
pub mod leaderboard;
pub mod ranking;
pub mod rubrics;
pub mod scoring;
