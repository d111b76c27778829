//! Data models for the users API

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Current time at millisecond precision
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// User record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    /// Absent until the record is first updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Overwrite the supplied fields and stamp `updated_at`
    pub fn apply(&mut self, changes: UserChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        self.updated_at = Some(now());
    }
}

/// Validated input for creating a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Fields to overwrite on update; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// The two records present at startup
pub fn seed_users() -> Vec<NewUser> {
    vec![
        NewUser {
            name: "Ali Veli".to_string(),
            email: "ali@example.com".to_string(),
        },
        NewUser {
            name: "Ayşe Yılmaz".to_string(),
            email: "ayse@example.com".to_string(),
        },
    ]
}

/// Create user request
///
/// Both fields are optional at the wire level so a missing field is reported
/// as a validation failure instead of a deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CreateUserRequest {
    /// Validate the create user request
    ///
    /// Name and email must both be present and non-empty.
    pub fn validate(self) -> Result<NewUser, String> {
        match (non_empty(self.name), non_empty(self.email)) {
            (Some(name), Some(email)) => Ok(NewUser { name, email }),
            _ => Err("Name and email are required".to_string()),
        }
    }
}

/// Update user request
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserRequest {
    /// Convert into changes, dropping empty values
    pub fn into_changes(self) -> UserChanges {
        UserChanges {
            name: non_empty(self.name),
            email: non_empty(self.email),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
