//! # Resource Trait
//!
//! The [`Resource`] trait defines the contract every concrete resource (Article, Person, …)
//! implements. It pairs **type-level** schema data (`resource_type()`, `fields()`) with an
//! **instance-level** [`ResourceBase`] that carries identity, load state, metadata and the
//! values bound to declared fields.
//!
//! # Architecture Note
//! There is no runtime reflection. Field values live in a name-keyed map inside
//! [`ResourceBase`], and the trait exposes only the generic get/set contract over that map.
//! Typed accessors are generated on top of it by the [`resource!`](crate::resource!) macro.
//!
//! `resource_type()` has no default implementation, so forgetting to provide it is a compile
//! error rather than a runtime failure.
//!
//! # Concurrency
//! Every mutating operation takes `&mut self`. Sharing one instance between threads therefore
//! requires exclusive ownership or an external `Mutex` at the integration layer.

use crate::archive::Archive;
use crate::error::ArchiveError;
use crate::field::{self, Field};
use crate::identifier::ResourceIdentifier;
use crate::value::FieldValue;
use serde_json::{Map, Value};
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt::Debug;
use tracing::{debug, trace};
use url::Url;

/// Instance state shared by every resource.
///
/// `id`, `url` and `meta` are identity and bookkeeping. `values` holds whatever has been bound
/// to field names through [`ResourceBase::set_value`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceBase {
    id: Option<String>,
    url: Option<Url>,
    is_loaded: bool,
    meta: Option<Map<String, Value>>,
    values: BTreeMap<String, FieldValue>,
}

impl ResourceBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    pub fn set_url(&mut self, url: Option<Url>) {
        self.url = url;
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    pub fn set_loaded(&mut self, is_loaded: bool) {
        self.is_loaded = is_loaded;
    }

    pub fn meta(&self) -> Option<&Map<String, Value>> {
        self.meta.as_ref()
    }

    pub fn set_meta(&mut self, meta: Option<Map<String, Value>>) {
        self.meta = meta;
    }

    /// Value currently bound to `name`, declared or not.
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Binds `value` to `name`; `None` clears it.
    pub fn set_value(&mut self, name: &str, value: Option<FieldValue>) {
        match value {
            Some(value) => {
                self.values.insert(name.to_string(), value);
            }
            None => {
                self.values.remove(name);
            }
        }
    }

    /// Iterates over every bound value in name order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// Trait that every concrete resource type implements.
///
/// Most types should be declared with [`resource!`](crate::resource!) instead of implementing
/// this by hand.
pub trait Resource: Clone + Default + Debug + 'static {
    /// The plural resource-category tag, e.g. `"articles"`.
    fn resource_type() -> &'static str;

    /// The declared fields, in order. Empty unless the type overrides it.
    fn fields() -> &'static [Field] {
        &[]
    }

    fn base(&self) -> &ResourceBase;

    fn base_mut(&mut self) -> &mut ResourceBase;

    /// First declared field named exactly `name`.
    fn field_named(name: &str) -> Option<&'static Field> {
        field::field_named(Self::fields(), name)
    }

    fn id(&self) -> Option<&str> {
        self.base().id()
    }

    fn url(&self) -> Option<&Url> {
        self.base().url()
    }

    fn is_loaded(&self) -> bool {
        self.base().is_loaded()
    }

    fn set_loaded(&mut self, is_loaded: bool) {
        self.base_mut().set_loaded(is_loaded);
    }

    fn meta(&self) -> Option<&Map<String, Value>> {
        self.base().meta()
    }

    /// Generic read. The name does not have to be declared in [`Resource::fields`].
    fn value_for_field(&self, name: &str) -> Option<&FieldValue> {
        self.base().value(name)
    }

    /// Generic write. `None` clears the value.
    fn set_value(&mut self, name: &str, value: Option<FieldValue>) {
        trace!(resource_type = Self::resource_type(), field = name, "Set value");
        self.base_mut().set_value(name, value);
    }

    /// Clears every declared field and marks the resource as not loaded.
    fn unload(&mut self) {
        for field in Self::fields() {
            self.set_value(field.name, None);
        }
        self.set_loaded(false);
        debug!(
            resource_type = Self::resource_type(),
            id = self.id().unwrap_or_default(),
            "Unloaded"
        );
    }

    /// `(type, id)` reference to this resource, once it has an id.
    fn identifier(&self) -> Option<ResourceIdentifier> {
        self.id()
            .map(|id| ResourceIdentifier::new(Self::resource_type(), id))
    }

    /// Writes the base contract: `type`, `id`, `url`, `isLoaded` and `meta`.
    ///
    /// Types that persist their own fields override this, calling
    /// [`Archive::encode_base`] first.
    fn encode(&self, archive: &mut Archive) -> Result<(), ArchiveError> {
        archive.encode_base(Self::resource_type(), self.base())
    }

    /// Rebuilds an instance from an archive written by [`Resource::encode`].
    /// Declared fields stay unset at this level.
    fn decode(archive: &Archive) -> Result<Self, ArchiveError> {
        let mut resource = Self::default();
        archive.decode_base(Self::resource_type(), resource.base_mut())?;
        Ok(resource)
    }

    fn to_bytes(&self) -> Result<Vec<u8>, ArchiveError> {
        let mut archive = Archive::new();
        self.encode(&mut archive)?;
        archive.to_bytes()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, ArchiveError> {
        Self::decode(&Archive::from_bytes(bytes)?)
    }

    /// `"<resource_type>(<id>, <url>)"`, for diagnostics only.
    fn description(&self) -> String {
        describe(Self::resource_type(), self.base())
    }
}

pub(crate) fn describe(resource_type: &str, base: &ResourceBase) -> String {
    format!(
        "{}({}, {})",
        resource_type,
        base.id().unwrap_or("none"),
        base.url().map(Url::as_str).unwrap_or("none")
    )
}

/// Identity equality: same resource type and equal ids.
///
/// Two resources whose ids are both absent compare equal. Unsaved instances are therefore not
/// distinguishable by this check; compare [`Resource::id`] first when that matters.
pub fn same_identity<T: Resource>(a: &T, b: &T) -> bool {
    a.id() == b.id()
}

/// Type-level description of a resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub resource_type: &'static str,
    pub fields: &'static [Field],
}

impl Schema {
    pub fn of<T: Resource>() -> Self {
        Self {
            resource_type: T::resource_type(),
            fields: T::fields(),
        }
    }

    pub fn field_named(&self, name: &str) -> Option<&'static Field> {
        field::field_named(self.fields, name)
    }
}

/// Object-safe view over any [`Resource`], used where the concrete type is only known at runtime.
pub trait AnyResource: Debug {
    fn schema(&self) -> Schema;

    fn state(&self) -> &ResourceBase;

    fn state_mut(&mut self) -> &mut ResourceBase;

    /// Generic read through the concrete type's [`Resource::value_for_field`].
    fn field_value(&self, name: &str) -> Option<&FieldValue>;

    /// Generic write through the concrete type's [`Resource::set_value`].
    fn set_field_value(&mut self, name: &str, value: Option<FieldValue>);

    /// Runs the concrete type's [`Resource::unload`].
    fn unload_fields(&mut self);

    fn encode_into(&self, archive: &mut Archive) -> Result<(), ArchiveError>;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Resource> AnyResource for T {
    fn schema(&self) -> Schema {
        Schema::of::<T>()
    }

    fn state(&self) -> &ResourceBase {
        self.base()
    }

    fn state_mut(&mut self) -> &mut ResourceBase {
        self.base_mut()
    }

    fn field_value(&self, name: &str) -> Option<&FieldValue> {
        self.value_for_field(name)
    }

    fn set_field_value(&mut self, name: &str, value: Option<FieldValue>) {
        self.set_value(name, value);
    }

    fn unload_fields(&mut self) {
        Resource::unload(self);
    }

    fn encode_into(&self, archive: &mut Archive) -> Result<(), ArchiveError> {
        self.encode(archive)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl dyn AnyResource {
    pub fn resource_type(&self) -> &'static str {
        self.schema().resource_type
    }

    pub fn identifier(&self) -> Option<ResourceIdentifier> {
        self.state()
            .id()
            .map(|id| ResourceIdentifier::new(self.resource_type(), id))
    }

    pub fn value_for_field(&self, name: &str) -> Option<&FieldValue> {
        self.field_value(name)
    }

    pub fn set_value(&mut self, name: &str, value: Option<FieldValue>) {
        self.set_field_value(name, value);
    }

    pub fn unload(&mut self) {
        self.unload_fields();
    }

    pub fn description(&self) -> String {
        describe(self.resource_type(), self.state())
    }

    pub fn downcast_ref<T: Resource>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    pub fn downcast<T: Resource>(self: Box<Self>) -> Option<T> {
        self.into_any().downcast::<T>().ok().map(|boxed| *boxed)
    }
}
