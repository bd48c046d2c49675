//! Required-field validation shared by every record kind.
//!
//! Checks report every offending field at once so clients can fix a payload
//! in a single round trip.

use std::fmt;

use super::record::Kind;

/// A required field that is missing, `null`, or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingField(&'static str);

impl MissingField {
    /// Name of the offending field as it appears on the wire.
    pub fn field(self) -> &'static str {
        self.0
    }
}

/// Schema validation failure for one record kind.
///
/// # Examples
/// ```
/// use crud_backend::domain::{Kind, SchemaViolation, required_text};
///
/// let username = required_text("username", None);
/// let email = required_text("email", Some("ada@example.com".to_owned()));
/// let violation = SchemaViolation::new(Kind::User, [username.err(), email.err()]);
/// assert_eq!(violation.to_string(), "User validation failed: username is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    kind: Kind,
    fields: Vec<&'static str>,
}

impl SchemaViolation {
    /// Gather the failed checks of one validation pass.
    ///
    /// Callers build a violation only after at least one check failed; the
    /// `None` entries are the checks that passed.
    pub fn new<I>(kind: Kind, failures: I) -> Self
    where
        I: IntoIterator<Item = Option<MissingField>>,
    {
        let fields = failures
            .into_iter()
            .flatten()
            .map(MissingField::field)
            .collect();
        Self { kind, fields }
    }

    /// Kind whose schema was violated.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Offending fields in schema order.
    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation failed: ", self.kind)?;
        for (index, field) in self.fields.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field} is required")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaViolation {}

/// Require a text value on create.
///
/// Any non-empty string passes and is kept verbatim, whitespace included.
pub fn required_text(field: &'static str, value: Option<String>) -> Result<String, MissingField> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(MissingField(field)),
    }
}

/// Check a required text value on update.
///
/// The outer `Option` is presence in the payload: an absent field keeps the
/// stored (already valid) value, while an explicit `null` or empty string
/// would leave the merged record without it.
pub fn required_text_update(
    field: &'static str,
    value: Option<Option<String>>,
) -> Result<Option<String>, MissingField> {
    match value {
        None => Ok(None),
        Some(inner) => required_text(field, inner).map(Some),
    }
}
