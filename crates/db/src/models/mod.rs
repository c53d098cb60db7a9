pub mod chat;
pub mod gamification;
pub mod insight;
pub mod payment;
pub mod task;
pub mod user;
