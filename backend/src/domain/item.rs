//! Item records.
//!
//! `name` is required; `description` is optional; `createdAt` defaults to the
//! time of creation and is never changed afterwards.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::record::{Kind, Record, RecordId};
use super::schema::{SchemaViolation, required_text, required_text_update};

/// A stored item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    id: RecordId,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl Item {
    /// Rebuild an item from stored fields.
    pub fn from_parts(
        id: RecordId,
        name: String,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            created_at,
        }
    }

    /// Display name, never empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Creation time, fixed at insert.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Item fields submitted on create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Validated item ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Item fields submitted on update.
///
/// The outer `Option` records presence in the payload; the inner one an
/// explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<Option<String>>,
    pub description: Option<Option<String>>,
}

/// Validated item update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

impl ItemChanges {
    /// True when applying the changes would leave the record as it is.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

impl Record for Item {
    const KIND: Kind = Kind::Item;

    type Draft = ItemDraft;
    type New = NewItem;
    type Patch = ItemPatch;
    type Changes = ItemChanges;

    fn validate_draft(draft: ItemDraft) -> Result<NewItem, SchemaViolation> {
        let ItemDraft {
            name,
            description,
            created_at,
        } = draft;
        match required_text("name", name) {
            Ok(name) => Ok(NewItem {
                name,
                description,
                created_at: created_at.unwrap_or_else(Utc::now),
            }),
            Err(missing) => Err(SchemaViolation::new(Kind::Item, [Some(missing)])),
        }
    }

    fn validate_patch(patch: ItemPatch) -> Result<ItemChanges, SchemaViolation> {
        let ItemPatch { name, description } = patch;
        match required_text_update("name", name) {
            Ok(name) => Ok(ItemChanges { name, description }),
            Err(missing) => Err(SchemaViolation::new(Kind::Item, [Some(missing)])),
        }
    }

    fn assemble(id: RecordId, new: NewItem) -> Self {
        Self::from_parts(id, new.name, new.description, new.created_at)
    }

    fn apply(&mut self, changes: &ItemChanges) {
        if let Some(name) = &changes.name {
            self.name.clone_from(name);
        }
        if let Some(description) = &changes.description {
            self.description.clone_from(description);
        }
    }

    fn id(&self) -> &RecordId {
        &self.id
    }
}
