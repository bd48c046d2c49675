//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match `backend/migrations` exactly.

diesel::table! {
    /// Items: `name` is required, `description` optional.
    items (id) {
        id -> Uuid,
        name -> Text,
        description -> Nullable<Text>,
        /// Set once at creation.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    users (id) {
        id -> Uuid,
        username -> Text,
        email -> Text,
    }
}
