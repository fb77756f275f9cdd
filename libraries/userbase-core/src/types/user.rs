/// User domain types
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;
use crate::error::{Result, UserError};

/// User record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier, fixed at creation
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Creation timestamp (ISO-8601 UTC with `Z` suffix), fixed at creation
    pub created_at: String,
}

impl User {
    /// Build a record with an explicit timestamp (used for seed data)
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            created_at: created_at.into(),
        }
    }
}

/// Payload for creating a user
///
/// Both fields are optional on the wire so that a missing field can be
/// reported as a validation failure instead of a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name, required
    #[serde(default)]
    pub name: Option<String>,
    /// Contact email, required
    #[serde(default)]
    pub email: Option<String>,
}

impl CreateUser {
    /// Payload with both fields present
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Split into `(name, email)`, requiring both to be present and non-empty
    pub fn validate(self) -> Result<(String, String)> {
        match (self.name, self.email) {
            (Some(name), Some(email)) if !name.is_empty() && !email.is_empty() => {
                Ok((name, email))
            }
            _ => Err(UserError::MissingFields),
        }
    }
}

/// Partial update for a user
///
/// `None` leaves the field untouched. `Some(String::new())` is a present but
/// empty value and is applied as-is; only creation enforces non-empty fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New display name
    #[serde(default)]
    pub name: Option<String>,
    /// New contact email
    #[serde(default)]
    pub email: Option<String>,
}

impl UpdateUser {
    /// True when the patch carries no fields
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    /// Apply present fields to `user`; id and timestamp are never touched
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
    }
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.ffffffZ`
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User::new(
            UserId::new(1).unwrap(),
            "Alice Johnson",
            "alice@example.com",
            "2026-01-01T10:00:00Z",
        )
    }

    #[test]
    fn create_requires_both_fields() {
        assert_eq!(
            CreateUser::new("Dana", "dana@example.com").validate(),
            Ok(("Dana".to_string(), "dana@example.com".to_string()))
        );

        let missing_email = CreateUser {
            name: Some("Dana".to_string()),
            email: None,
        };
        assert_eq!(missing_email.validate(), Err(UserError::MissingFields));
        assert_eq!(
            CreateUser::new("", "dana@example.com").validate(),
            Err(UserError::MissingFields)
        );
        assert_eq!(CreateUser::default().validate(), Err(UserError::MissingFields));
    }

    #[test]
    fn update_distinguishes_absent_from_empty() {
        let patch: UpdateUser = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert_eq!(patch.name.as_deref(), Some(""));
        assert!(patch.email.is_none());

        let mut user = sample();
        patch.apply(&mut user);
        assert_eq!(user.name, "");
        assert_eq!(user.email, "alice@example.com");
    }

    #[test]
    fn null_fields_count_as_absent() {
        let patch: UpdateUser = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn empty_patch_leaves_record_unchanged() {
        let mut user = sample();
        UpdateUser::default().apply(&mut user);
        assert_eq!(user, sample());
    }

    #[test]
    fn timestamp_is_utc_with_z_suffix() {
        let ts = now_timestamp();
        assert!(ts.ends_with('Z'), "{ts}");
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn user_serializes_with_flat_fields() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Alice Johnson");
        assert_eq!(value["created_at"], "2026-01-01T10:00:00Z");
    }
}
