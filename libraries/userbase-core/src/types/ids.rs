/// ID types for Userbase entities
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use crate::error::UserError;

/// User identifier
///
/// Identifiers are positive and allocated by the store; zero never names a
/// record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(NonZeroU64);

impl UserId {
    /// The first identifier a store hands out
    pub const FIRST: Self = Self(NonZeroU64::MIN);

    /// Create a user ID, returning `None` for zero
    pub fn new(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(Self)
    }

    /// Get the numeric value
    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// The identifier allocated after this one, `None` once the id space is spent
    pub(crate) fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = UserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // u64 parsing accepts a leading '+', path segments must be plain digits
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(UserError::invalid_input(format!("not a user id: {s:?}")));
        }
        s.parse::<u64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| UserError::invalid_input(format!("not a user id: {s:?}")))
    }
}
