//! User record and the client-side shapes derived from it.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};

/// Server-assigned user identifier.
pub type UserId = i64;

/// A user record as stored by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Body of `POST /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// What the Detail View was opened to do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Action {
    #[default]
    New,
    Edit,
    Delete,
}

impl Action {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }

    /// Whether the Detail View loads an existing record for this action.
    #[must_use]
    pub const fn reads_existing(self) -> bool {
        matches!(self, Self::Edit | Self::Delete)
    }

    /// Past-tense verb used in notifications.
    #[must_use]
    pub const fn past_tense(self) -> &'static str {
        match self {
            Self::New => "created",
            Self::Edit => "updated",
            Self::Delete => "deleted",
        }
    }

    /// Present-tense verb used in notifications.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::New => "create",
            Self::Edit => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(Self::New),
            "edit" => Ok(Self::Edit),
            "delete" => Ok(Self::Delete),
            other => Err(format!("unknown action: {other}")),
        }
    }
}

/// The Detail View's unsaved working copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
}

impl From<User> for Draft {
    fn from(user: User) -> Self {
        Self {
            id: Some(user.id),
            name: user.name,
            email: user.email,
        }
    }
}

impl Draft {
    /// Validates the editable fields and returns the create payload.
    ///
    /// # Errors
    /// Returns `ValidationError::MissingFields` if name or email is blank.
    pub fn to_new_user(&self) -> Result<NewUser, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();

        if name.is_empty() || email.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        Ok(NewUser {
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    /// Validates the draft and returns the full record for `PUT /users/{id}`.
    ///
    /// # Errors
    /// Returns `ValidationError` if fields are blank or the draft has no id.
    pub fn to_user(&self) -> Result<User, ValidationError> {
        let fields = self.to_new_user()?;
        let id = self.id.ok_or(ValidationError::MissingId)?;

        Ok(User {
            id,
            name: fields.name,
            email: fields.email,
        })
    }
}

/// Decoded body of a successful create, update, or delete call.
///
/// The API wraps mutation results as `{"success": true, "message": "...", "data": {...}}`;
/// a bare user object or an empty body are accepted too.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MutationReceipt {
    pub message: Option<String>,
    pub user: Option<User>,
}

impl MutationReceipt {
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Self::default();
        }

        let Ok(value) = serde_json::from_str::<Value>(trimmed) else {
            tracing::debug!("mutation response is not JSON, ignoring body");
            return Self::default();
        };

        let message = value
            .get("message")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .map(str::to_string);

        let user = value
            .get("data")
            .and_then(|data| User::deserialize(data).ok())
            .or_else(|| User::deserialize(&value).ok());

        Self { message, user }
    }
}
