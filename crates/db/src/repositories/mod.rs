mod achievement_repo;
mod chat_repo;
mod insight_repo;
mod leaderboard_repo;
mod payment_repo;
mod task_repo;
mod user_repo;

pub use achievement_repo::AchievementRepo;
pub use chat_repo::ChatRepo;
pub use insight_repo::InsightRepo;
pub use leaderboard_repo::LeaderboardRepo;
pub use payment_repo::PaymentRepo;
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
