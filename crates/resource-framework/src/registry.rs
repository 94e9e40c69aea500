//! # Resource Registry
//!
//! Maps resource type tags to the concrete types that implement them, so generic code holding
//! only a tag (from a response, an identifier or an archive) can recover the schema and build
//! instances.
//!
//! Schemas are validated when registered: field names must be unique within a type and must not
//! shadow the reserved `id`/`type` members.

use crate::archive::Archive;
use crate::error::{ArchiveError, RegistryError};
use crate::field::Field;
use crate::identifier::ResourceIdentifier;
use crate::resource::{AnyResource, Resource, ResourceBase, Schema};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

const RESERVED_FIELDS: &[&str] = &["id", "type"];

struct Registration {
    schema: Schema,
    instantiate: fn() -> Box<dyn AnyResource>,
    decode: fn(&Archive) -> Result<Box<dyn AnyResource>, ArchiveError>,
}

fn instantiate<T: Resource>() -> Box<dyn AnyResource> {
    Box::new(T::default())
}

fn decode<T: Resource>(archive: &Archive) -> Result<Box<dyn AnyResource>, ArchiveError> {
    Ok(Box::new(T::decode(archive)?))
}

/// Registry of resource types keyed by their type tag.
///
/// ```rust
/// use resource_framework::{resource, ResourceIdentifier, ResourceRegistry};
///
/// resource! {
///     pub struct Tag: "tags" {
///         label: String,
///     }
/// }
///
/// let mut registry = ResourceRegistry::new();
/// registry.register::<Tag>().unwrap();
///
/// let tag = registry
///     .instantiate_identified(&ResourceIdentifier::new("tags", "3"))
///     .unwrap();
/// assert_eq!(tag.description(), "tags(3, none)");
/// ```
#[derive(Default)]
pub struct ResourceRegistry {
    registrations: HashMap<&'static str, Registration>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` after validating its schema.
    pub fn register<T: Resource>(&mut self) -> Result<(), RegistryError> {
        let schema = Schema::of::<T>();
        validate(&schema)?;

        if self.registrations.contains_key(schema.resource_type) {
            return Err(RegistryError::DuplicateType(schema.resource_type.to_string()));
        }

        info!(
            resource_type = schema.resource_type,
            fields = schema.fields.len(),
            "Registered resource type"
        );
        self.registrations.insert(
            schema.resource_type,
            Registration {
                schema,
                instantiate: instantiate::<T>,
                decode: decode::<T>,
            },
        );
        Ok(())
    }

    pub fn contains(&self, resource_type: &str) -> bool {
        self.registrations.contains_key(resource_type)
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Registered type tags, sorted.
    pub fn resource_types(&self) -> Vec<&'static str> {
        let mut types: Vec<_> = self.registrations.keys().copied().collect();
        types.sort_unstable();
        types
    }

    pub fn schema(&self, resource_type: &str) -> Result<Schema, RegistryError> {
        self.registration(resource_type).map(|registration| registration.schema)
    }

    pub fn field_named(
        &self,
        resource_type: &str,
        name: &str,
    ) -> Result<Option<&'static Field>, RegistryError> {
        Ok(self.schema(resource_type)?.field_named(name))
    }

    /// A fresh, unloaded instance of the type registered under `resource_type`.
    pub fn instantiate(&self, resource_type: &str) -> Result<Box<dyn AnyResource>, RegistryError> {
        let registration = self.registration(resource_type)?;
        Ok((registration.instantiate)())
    }

    /// An unloaded instance carrying the identifier's id, ready to be populated.
    pub fn instantiate_identified(
        &self,
        identifier: &ResourceIdentifier,
    ) -> Result<Box<dyn AnyResource>, RegistryError> {
        let mut resource = self.instantiate(identifier.resource_type())?;
        *resource.state_mut() = ResourceBase::with_id(identifier.id());
        debug!(%identifier, "Instantiated");
        Ok(resource)
    }

    /// Decodes an archive as whichever registered type it was written for.
    pub fn decode(&self, archive: &Archive) -> Result<Box<dyn AnyResource>, ArchiveError> {
        let resource_type = archive
            .resource_type()?
            .ok_or_else(|| ArchiveError::MissingKey(crate::archive::TYPE_KEY.to_string()))?;
        let registration = self.registration(&resource_type)?;
        (registration.decode)(archive)
    }

    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<Box<dyn AnyResource>, ArchiveError> {
        self.decode(&Archive::from_bytes(bytes)?)
    }

    fn registration(&self, resource_type: &str) -> Result<&Registration, RegistryError> {
        self.registrations
            .get(resource_type)
            .ok_or_else(|| RegistryError::UnknownType(resource_type.to_string()))
    }
}

fn validate(schema: &Schema) -> Result<(), RegistryError> {
    let mut seen = HashSet::new();
    for field in schema.fields {
        if RESERVED_FIELDS.contains(&field.name) {
            return Err(RegistryError::ReservedField {
                resource_type: schema.resource_type.to_string(),
                field: field.name.to_string(),
            });
        }
        if !seen.insert(field.name) {
            return Err(RegistryError::DuplicateField {
                resource_type: schema.resource_type.to_string(),
                field: field.name.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;

    macro_rules! test_resource {
        ($name:ident, $tag:literal, $fields:expr) => {
            #[derive(Debug, Clone, Default)]
            struct $name {
                base: ResourceBase,
            }

            impl Resource for $name {
                fn resource_type() -> &'static str {
                    $tag
                }

                fn fields() -> &'static [Field] {
                    const FIELDS: &[Field] = $fields;
                    FIELDS
                }

                fn base(&self) -> &ResourceBase {
                    &self.base
                }

                fn base_mut(&mut self) -> &mut ResourceBase {
                    &mut self.base
                }
            }
        };
    }

    test_resource!(Post, "posts", &[Field::new("title", FieldKind::Text)]);
    test_resource!(OtherPost, "posts", &[]);
    test_resource!(
        Doubled,
        "doubled",
        &[
            Field::new("title", FieldKind::Text),
            Field::new("title", FieldKind::Integer),
        ]
    );
    test_resource!(Shadowing, "shadowing", &[Field::new("id", FieldKind::Text)]);

    #[test]
    fn register_and_lookup() {
        let mut registry = ResourceRegistry::new();
        assert!(registry.is_empty());
        registry.register::<Post>().unwrap();

        assert!(registry.contains("posts"));
        assert_eq!(registry.resource_types(), vec!["posts"]);
        assert_eq!(registry.schema("posts").unwrap(), Schema::of::<Post>());
        assert!(registry.field_named("posts", "title").unwrap().is_some());
        assert!(registry.field_named("posts", "body").unwrap().is_none());
        assert_eq!(
            registry.schema("comments").unwrap_err(),
            RegistryError::UnknownType("comments".into())
        );
    }

    #[test]
    fn rejects_invalid_schemas() {
        let mut registry = ResourceRegistry::new();
        registry.register::<Post>().unwrap();

        assert_eq!(
            registry.register::<OtherPost>().unwrap_err(),
            RegistryError::DuplicateType("posts".into())
        );
        assert!(matches!(
            registry.register::<Doubled>().unwrap_err(),
            RegistryError::DuplicateField { .. }
        ));
        assert!(matches!(
            registry.register::<Shadowing>().unwrap_err(),
            RegistryError::ReservedField { .. }
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn instantiate_and_decode() {
        let mut registry = ResourceRegistry::new();
        registry.register::<Post>().unwrap();

        let identifier = ResourceIdentifier::new("posts", "5");
        let resource = registry.instantiate_identified(&identifier).unwrap();
        assert_eq!(resource.identifier(), Some(identifier));
        assert!(!resource.state().is_loaded());

        let mut archive = Archive::new();
        resource.encode_into(&mut archive).unwrap();
        let decoded = registry.decode(&archive).unwrap();
        assert_eq!(decoded.downcast_ref::<Post>().and_then(|post| post.id()), Some("5"));
    }

    #[test]
    fn decode_requires_known_type() {
        let registry = ResourceRegistry::new();
        let err = registry.decode(&Archive::new()).unwrap_err();
        assert!(matches!(err, ArchiveError::MissingKey(ref key) if key == "type"));

        let err = registry.decode_bytes(br#"{"type":"posts"}"#).unwrap_err();
        assert!(matches!(
            err,
            ArchiveError::Registry(RegistryError::UnknownType(_))
        ));
    }
}
