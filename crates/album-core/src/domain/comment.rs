//! Comment domain types.
//!
//! Comments come from two places: the remote API (confirmed, with a stable
//! remote id) and the user (pending, never sent anywhere). [`CommentRecord`]
//! keeps the two apart instead of overloading a placeholder id.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A comment confirmed by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Id of the photo this comment belongs to.
    pub post_id: i64,
    /// Remote identifier.
    pub id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Validation failures for user-authored comments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentValidationError {
    #[error("Comment {0} cannot be empty")]
    EmptyField(&'static str),
}

/// A comment authored locally, before it has any identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

impl NewComment {
    /// Build a validated comment draft.
    ///
    /// Name, email and body must all contain something other than whitespace.
    pub fn new(
        post_id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, CommentValidationError> {
        let comment = Self {
            post_id,
            name: name.into(),
            email: email.into(),
            body: body.into(),
        };
        comment.validate()?;
        Ok(comment)
    }

    /// Check that every user-supplied field is non-blank.
    ///
    /// Fields are trimmed before the check, so whitespace-only input is
    /// rejected, not just the empty string.
    pub fn validate(&self) -> Result<(), CommentValidationError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("body", &self.body),
        ] {
            if value.trim().is_empty() {
                return Err(CommentValidationError::EmptyField(field));
            }
        }
        Ok(())
    }
}

/// A locally authored comment that the remote API has never seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingComment {
    /// Local store key, when the comment has been written to the store.
    pub local_id: Option<i64>,
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

impl From<NewComment> for PendingComment {
    fn from(comment: NewComment) -> Self {
        Self {
            local_id: None,
            post_id: comment.post_id,
            name: comment.name,
            email: comment.email,
            body: comment.body,
        }
    }
}

/// A row of the local comment store.
///
/// `local_id` is assigned by the store and is unrelated to any remote id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedComment {
    pub local_id: i64,
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

impl From<PersistedComment> for PendingComment {
    fn from(row: PersistedComment) -> Self {
        Self {
            local_id: Some(row.local_id),
            post_id: row.post_id,
            name: row.name,
            email: row.email,
            body: row.body,
        }
    }
}

/// An entry in a photo's comment list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CommentRecord {
    /// Fetched from the remote API.
    Remote(Comment),
    /// Added locally; has no remote id.
    Pending(PendingComment),
}

impl CommentRecord {
    pub const fn post_id(&self) -> i64 {
        match self {
            Self::Remote(c) => c.post_id,
            Self::Pending(c) => c.post_id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Remote(c) => &c.name,
            Self::Pending(c) => &c.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Self::Remote(c) => &c.email,
            Self::Pending(c) => &c.email,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Self::Remote(c) => &c.body,
            Self::Pending(c) => &c.body,
        }
    }

    /// The remote id, if the API has confirmed this comment.
    pub const fn remote_id(&self) -> Option<i64> {
        match self {
            Self::Remote(c) => Some(c.id),
            Self::Pending(_) => None,
        }
    }

    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

impl From<Comment> for CommentRecord {
    fn from(comment: Comment) -> Self {
        Self::Remote(comment)
    }
}

impl From<NewComment> for CommentRecord {
    fn from(comment: NewComment) -> Self {
        Self::Pending(comment.into())
    }
}

impl From<PersistedComment> for CommentRecord {
    fn from(row: PersistedComment) -> Self {
        Self::Pending(row.into())
    }
}
