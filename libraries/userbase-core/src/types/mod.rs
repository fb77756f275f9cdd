//! Domain types for Userbase

mod ids;
mod user;

pub use ids::UserId;
pub use user::{now_timestamp, CreateUser, UpdateUser, User};
