//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and never
//! leave it; repositories convert them to and from domain records.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{Item, ItemChanges, Record, RecordId, User, UserChanges};

use super::schema::{items, users};

/// Row struct for reading from the items table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ItemRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self::from_parts(
            RecordId::from_uuid(row.id),
            row.name,
            row.description,
            row.created_at,
        )
    }
}

/// Insertable struct for new item records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = items)]
pub(crate) struct NewItemRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub created_at: DateTime<Utc>,
}

impl<'a> From<&'a Item> for NewItemRow<'a> {
    fn from(item: &'a Item) -> Self {
        Self {
            id: *item.id().as_uuid(),
            name: item.name(),
            description: item.description(),
            created_at: item.created_at(),
        }
    }
}

/// Partial update of an item; `None` columns are left untouched and
/// `Some(None)` clears `description`.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = items)]
pub(crate) struct ItemChangeset<'a> {
    pub name: Option<&'a str>,
    pub description: Option<Option<&'a str>>,
}

impl<'a> From<&'a ItemChanges> for ItemChangeset<'a> {
    fn from(changes: &'a ItemChanges) -> Self {
        Self {
            name: changes.name.as_deref(),
            description: changes.description.as_ref().map(Option::as_deref),
        }
    }
}

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self::from_parts(RecordId::from_uuid(row.id), row.username, row.email)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a User> for NewUserRow<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: *user.id().as_uuid(),
            username: user.username(),
            email: user.email(),
        }
    }
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserChangeset<'a> {
    pub username: Option<&'a str>,
    pub email: Option<&'a str>,
}

impl<'a> From<&'a UserChanges> for UserChangeset<'a> {
    fn from(changes: &'a UserChanges) -> Self {
        Self {
            username: changes.username.as_deref(),
            email: changes.email.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn item_changeset_distinguishes_clear_from_keep() {
        let clear = ItemChanges {
            name: None,
            description: Some(None),
        };
        let keep = ItemChanges {
            name: Some("Lamp".to_owned()),
            description: None,
        };

        let cleared = ItemChangeset::from(&clear);
        let kept = ItemChangeset::from(&keep);

        assert_eq!(cleared.description, Some(None));
        assert_eq!(cleared.name, None);
        assert_eq!(kept.description, None);
        assert_eq!(kept.name, Some("Lamp"));
    }

    #[rstest]
    fn rows_round_trip_into_records() {
        let id = Uuid::new_v4();
        let user = User::from(UserRow {
            id,
            username: "ada".to_owned(),
            email: "ada@example.com".to_owned(),
        });

        let row = NewUserRow::from(&user);

        assert_eq!(row.id, id);
        assert_eq!(row.username, "ada");
        assert_eq!(row.email, "ada@example.com");
    }

    #[rstest]
    fn new_item_rows_carry_the_record_id() {
        let created_at = Utc::now();
        let item = Item::from_parts(
            RecordId::random(),
            "   ".to_owned(),
            None,
            created_at,
        );

        let row = NewItemRow::from(&item);

        assert_eq!(&row.id, item.id().as_uuid());
        assert_eq!(row.name, "   ");
        assert_eq!(row.description, None);
        assert_eq!(row.created_at, created_at);
    }
}
