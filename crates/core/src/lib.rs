//! Domain logic for the gigpay platform.
//!
//! This crate has no I/O dependencies: everything here is pure data and
//! pure functions so it can be used by the API layer, repositories, and
//! any future CLI tooling alike.

pub mod chat;
pub mod error;
pub mod gamification;
pub mod insight;
pub mod streak;
pub mod types;
