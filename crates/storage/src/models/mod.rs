mod assignment;
mod event;
mod leaderboard;
mod rubric;
mod score;
mod submission;
mod team;
mod user;

pub use assignment::Assignment;
pub use event::Event;
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use rubric::{Rubric, RubricCriterion, total_max_score};
pub use score::{Score, ScoreEntry};
pub use submission::Submission;
pub use team::Team;
pub use user::User;
