//! User records.

use serde::Serialize;

use super::record::{Kind, Record, RecordId};
use super::schema::{SchemaViolation, required_text, required_text_update};

/// A stored user; `username` and `email` are both required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: RecordId,
    username: String,
    email: String,
}

impl User {
    /// Rebuild a user from stored fields.
    pub fn from_parts(id: RecordId, username: String, email: String) -> Self {
        Self {
            id,
            username,
            email,
        }
    }

    /// Login name, never empty.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Contact address, stored as submitted.
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// User fields submitted on create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Validated user ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

/// User fields submitted on update; see [`crate::domain::ItemPatch`] for the
/// meaning of the nested options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub username: Option<Option<String>>,
    pub email: Option<Option<String>>,
}

/// Validated user update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl UserChanges {
    /// True when applying the changes would leave the record as it is.
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none()
    }
}

impl Record for User {
    const KIND: Kind = Kind::User;

    type Draft = UserDraft;
    type New = NewUser;
    type Patch = UserPatch;
    type Changes = UserChanges;

    fn validate_draft(draft: UserDraft) -> Result<NewUser, SchemaViolation> {
        let username = required_text("username", draft.username);
        let email = required_text("email", draft.email);
        match (username, email) {
            (Ok(username), Ok(email)) => Ok(NewUser { username, email }),
            (username, email) => Err(SchemaViolation::new(
                Kind::User,
                [username.err(), email.err()],
            )),
        }
    }

    fn validate_patch(patch: UserPatch) -> Result<UserChanges, SchemaViolation> {
        let username = required_text_update("username", patch.username);
        let email = required_text_update("email", patch.email);
        match (username, email) {
            (Ok(username), Ok(email)) => Ok(UserChanges { username, email }),
            (username, email) => Err(SchemaViolation::new(
                Kind::User,
                [username.err(), email.err()],
            )),
        }
    }

    fn assemble(id: RecordId, new: NewUser) -> Self {
        Self::from_parts(id, new.username, new.email)
    }

    fn apply(&mut self, changes: &UserChanges) {
        if let Some(username) = &changes.username {
            self.username.clone_from(username);
        }
        if let Some(email) = &changes.email {
            self.email.clone_from(email);
        }
    }

    fn id(&self) -> &RecordId {
        &self.id
    }
}
