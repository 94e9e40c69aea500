//! Hand-written [`Resource`] implementation.
//!
//! Equivalent to what `resource!` generates, spelled out: schema constant, storage in
//! [`ResourceBase`], typed accessors over the generic ones, and an encode/decode pair that runs
//! the base contract before persisting its own fields.

use chrono::{DateTime, Utc};
use resource_framework::{
    same_identity, Archive, ArchiveError, Field, FieldKind, FieldType, FieldValue, Resource,
    ResourceBase,
};
use std::fmt;
use url::Url;

const FIELDS: &[Field] = &[
    Field::new("name", FieldKind::Text),
    Field::new("email", FieldKind::Text),
    Field::new("homepage", FieldKind::Url),
    Field::new("joined_at", FieldKind::Date)
        .serialized_as("joined-at")
        .read_only(),
];

/// A registered person, e.g. the author of an article.
#[derive(Debug, Clone, Default)]
pub struct Person {
    base: ResourceBase,
}

impl Person {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            base: ResourceBase::with_id(id),
        }
    }

    pub fn name(&self) -> Option<String> {
        self.typed("name")
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.set_value("name", name.map(FieldValue::from));
    }

    pub fn email(&self) -> Option<String> {
        self.typed("email")
    }

    pub fn set_email(&mut self, email: Option<String>) {
        self.set_value("email", email.map(FieldValue::from));
    }

    pub fn homepage(&self) -> Option<Url> {
        self.typed("homepage")
    }

    pub fn set_homepage(&mut self, homepage: Option<Url>) {
        self.set_value("homepage", homepage.map(FieldValue::from));
    }

    /// Server-assigned; never sent back.
    pub fn joined_at(&self) -> Option<DateTime<Utc>> {
        self.typed("joined_at")
    }

    pub fn set_joined_at(&mut self, joined_at: Option<DateTime<Utc>>) {
        self.set_value("joined_at", joined_at.map(FieldValue::from));
    }

    fn typed<T: FieldType>(&self, name: &str) -> Option<T> {
        self.value_for_field(name).and_then(T::from_value)
    }
}

impl Resource for Person {
    fn resource_type() -> &'static str {
        "people"
    }

    fn fields() -> &'static [Field] {
        FIELDS
    }

    fn base(&self) -> &ResourceBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ResourceBase {
        &mut self.base
    }

    fn encode(&self, archive: &mut Archive) -> Result<(), ArchiveError> {
        archive.encode_base(Self::resource_type(), &self.base)?;
        archive.encode_fields(FIELDS, &self.base)
    }

    fn decode(archive: &Archive) -> Result<Self, ArchiveError> {
        let mut person = Self::default();
        archive.decode_base(Self::resource_type(), &mut person.base)?;
        archive.decode_fields(FIELDS, &mut person.base)?;
        Ok(person)
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        same_identity(self, other)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_accessors_share_generic_storage() {
        let mut person = Person::with_id("9");
        person.set_name(Some("Ada".to_string()));
        assert_eq!(
            person.value_for_field("name"),
            Some(&FieldValue::Text("Ada".into()))
        );

        person.set_value("email", Some("ada@example.com".into()));
        assert_eq!(person.email().as_deref(), Some("ada@example.com"));

        // Wrong kind reads as absent through the typed accessor.
        person.set_value("homepage", Some(FieldValue::Integer(1)));
        assert_eq!(person.homepage(), None);
    }

    #[test]
    fn joined_at_is_read_only() {
        let field = Person::field_named("joined_at").unwrap();
        assert!(field.read_only);
        assert_eq!(field.serialized_name, "joined-at");
        assert!(!Person::field_named("name").unwrap().read_only);
    }
}
