//! Userbase Core
//!
//! Domain types, error handling and the in-memory record store behind the
//! Userbase service.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `UserId`, `CreateUser`, `UpdateUser`
//! - **Record Store**: `UserStore`, a lock-guarded collection with
//!   monotonic identifier allocation
//! - **Error Handling**: Unified `UserError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use userbase_core::{CreateUser, UpdateUser, UserStore};
//!
//! let store = UserStore::seeded();
//! assert_eq!(store.len().unwrap(), 3);
//!
//! let dana = store
//!     .create(CreateUser::new("Dana", "dana@example.com"))
//!     .unwrap();
//! assert_eq!(dana.id.get(), 4);
//!
//! let patch = UpdateUser {
//!     email: Some("d2@example.com".to_string()),
//!     ..UpdateUser::default()
//! };
//! let dana = store.update(dana.id, patch).unwrap();
//! assert_eq!(dana.name, "Dana");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{Result, UserError};
pub use store::{seed_users, UserStore};
pub use types::{CreateUser, UpdateUser, User, UserId};
