pub mod assignment;
pub mod leaderboard;
pub mod rubric;
pub mod score;
pub mod submission;
