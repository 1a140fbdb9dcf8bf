use serde::{Deserialize, Serialize};

/// Caller identity carried inside a token.
///
/// Immutable once issued: a caller who joins a couple needs a fresh token
/// before `group_id` shows up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSet {
    /// `users.id`
    pub subject_id: String,
    pub email: String,
    /// `couples.id` of the caller's couple, if any
    pub group_id: Option<String>,
}

impl ClaimSet {
    pub fn new(subject_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            subject_id: subject_id.into(),
            email: email.into(),
            group_id: None,
        }
    }

    pub fn with_group(mut self, group_id: Option<String>) -> Self {
        self.group_id = group_id;
        self
    }
}
