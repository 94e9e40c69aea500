//! # Field Descriptors
//!
//! A [`Field`] describes one declared, persistable attribute of a resource type.
//! Every concrete resource owns a `&'static [Field]`, so the schema lives at the type level
//! and costs nothing per instance.

/// The kind of value a field is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Untyped JSON.
    Json,
    Text,
    Boolean,
    Integer,
    Float,
    Url,
    Date,
    /// Reference to a single related resource.
    ToOne,
    /// References to many related resources.
    ToMany,
}

impl FieldKind {
    pub fn is_relationship(self) -> bool {
        matches!(self, FieldKind::ToOne | FieldKind::ToMany)
    }
}

/// One declared attribute of a resource type.
///
/// ```rust
/// use resource_framework::{Field, FieldKind};
///
/// const TITLE: Field = Field::new("title", FieldKind::Text).serialized_as("headline");
/// assert_eq!(TITLE.serialized_name, "headline");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    /// Name used by the generic accessors.
    pub name: &'static str,
    /// Name used on the wire. Defaults to `name`.
    pub serialized_name: &'static str,
    pub kind: FieldKind,
    /// Read-only fields are populated by the server and never sent back.
    pub read_only: bool,
}

impl Field {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            serialized_name: name,
            kind,
            read_only: false,
        }
    }

    pub const fn serialized_as(mut self, serialized_name: &'static str) -> Self {
        self.serialized_name = serialized_name;
        self
    }

    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

/// Returns the first field called exactly `name`.
pub fn field_named<'a>(fields: &'a [Field], name: &str) -> Option<&'a Field> {
    fields.iter().find(|field| field.name == name)
}
