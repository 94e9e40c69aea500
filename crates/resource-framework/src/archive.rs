//! # Persistence Archive
//!
//! An [`Archive`] is a keyed container that resources encode themselves into and decode
//! themselves from. It is backed by a JSON object, so the persisted bytes are plain JSON and any
//! backend that can store bytes (a file, a key-value store, …) can hold it.
//!
//! ## The Contract
//!
//! The base contract covers exactly four values plus the resource type:
//!
//! | Key        | Value                              |
//! |------------|------------------------------------|
//! | `type`     | resource type tag                  |
//! | `id`       | optional string                    |
//! | `url`      | optional URI string                |
//! | `isLoaded` | boolean (missing decodes as false) |
//! | `meta`     | optional object of opaque values   |
//!
//! Field values are outside the base contract. A type that persists them calls
//! [`Archive::encode_base`] first and then [`Archive::encode_fields`], which writes them under
//! `fields`. Decoding mirrors that order.

use crate::error::ArchiveError;
use crate::field::Field;
use crate::resource::ResourceBase;
use crate::value::FieldValue;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

pub const TYPE_KEY: &str = "type";
pub const ID_KEY: &str = "id";
pub const URL_KEY: &str = "url";
pub const IS_LOADED_KEY: &str = "isLoaded";
pub const META_KEY: &str = "meta";
pub const FIELDS_KEY: &str = "fields";

/// Keyed container for persisted resource state.
///
/// ```rust
/// use resource_framework::Archive;
///
/// let mut archive = Archive::new();
/// archive.encode("count", &3).unwrap();
/// let bytes = archive.to_bytes().unwrap();
///
/// let restored = Archive::from_bytes(&bytes).unwrap();
/// assert_eq!(restored.decode::<u32>("count").unwrap(), Some(3));
/// assert_eq!(restored.decode::<u32>("missing").unwrap(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Archive {
    entries: Map<String, Value>,
}

impl Archive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Stores `value` under `key`, replacing any previous entry.
    pub fn encode<V: Serialize + ?Sized>(
        &mut self,
        key: &str,
        value: &V,
    ) -> Result<(), ArchiveError> {
        let value = serde_json::to_value(value).map_err(|source| ArchiveError::InvalidValue {
            key: key.to_string(),
            source,
        })?;
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    /// Reads `key`. Missing and `null` entries decode as `None`.
    pub fn decode<V: DeserializeOwned>(&self, key: &str) -> Result<Option<V>, ArchiveError> {
        match self.entries.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|source| ArchiveError::InvalidValue {
                    key: key.to_string(),
                    source,
                }),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ArchiveError> {
        Ok(serde_json::to_vec(&self.entries)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArchiveError> {
        let entries = serde_json::from_slice(bytes)?;
        Ok(Self { entries })
    }

    /// The archived resource type, if one was written.
    pub fn resource_type(&self) -> Result<Option<String>, ArchiveError> {
        self.decode(TYPE_KEY)
    }

    pub fn encode_base(
        &mut self,
        resource_type: &str,
        base: &ResourceBase,
    ) -> Result<(), ArchiveError> {
        self.encode(TYPE_KEY, resource_type)?;
        self.encode(ID_KEY, &base.id())?;
        self.encode(URL_KEY, &base.url())?;
        self.encode(IS_LOADED_KEY, &base.is_loaded())?;
        self.encode(META_KEY, &base.meta())?;
        debug!(resource_type, id = base.id().unwrap_or_default(), "Encoded");
        Ok(())
    }

    /// Restores `id`, `url`, `isLoaded` and `meta` into `base`.
    ///
    /// Fails if the archive was written for a different resource type.
    pub fn decode_base(
        &self,
        resource_type: &str,
        base: &mut ResourceBase,
    ) -> Result<(), ArchiveError> {
        if let Some(found) = self.resource_type()? {
            if found != resource_type {
                warn!(expected = resource_type, %found, "Archive type mismatch");
                return Err(ArchiveError::TypeMismatch {
                    expected: resource_type.to_string(),
                    found,
                });
            }
        }

        base.set_id(self.decode::<String>(ID_KEY)?);
        base.set_url(self.decode::<Url>(URL_KEY)?);
        base.set_loaded(self.decode::<bool>(IS_LOADED_KEY)?.unwrap_or(false));
        base.set_meta(self.decode::<Map<String, Value>>(META_KEY)?);
        debug!(resource_type, id = base.id().unwrap_or_default(), "Decoded");
        Ok(())
    }

    /// Writes the values currently bound to `fields` under the `fields` key. Unset fields are skipped.
    ///
    /// NaN and infinite floats have no JSON form and are rejected with
    /// [`ArchiveError::InvalidValue`].
    pub fn encode_fields(
        &mut self,
        fields: &[Field],
        base: &ResourceBase,
    ) -> Result<(), ArchiveError> {
        let values: Map<String, Value> = fields
            .iter()
            .filter_map(|field| base.value(field.name).map(|value| (field.name, value)))
            .map(|(name, value)| {
                if let FieldValue::Float(float) = value {
                    if !float.is_finite() {
                        let message = format!("non-finite float {float} cannot be archived");
                        return Err(ArchiveError::InvalidValue {
                            key: name.to_string(),
                            source: <serde_json::Error as serde::ser::Error>::custom(message),
                        });
                    }
                }
                serde_json::to_value(value)
                    .map(|value| (name.to_string(), value))
                    .map_err(|source| ArchiveError::InvalidValue {
                        key: name.to_string(),
                        source,
                    })
            })
            .collect::<Result<_, _>>()?;
        self.entries.insert(FIELDS_KEY.to_string(), Value::Object(values));
        Ok(())
    }

    /// Binds archived values for `fields` into `base`. Entries for undeclared names are ignored.
    pub fn decode_fields(
        &self,
        fields: &[Field],
        base: &mut ResourceBase,
    ) -> Result<(), ArchiveError> {
        let Some(values) = self.decode::<Map<String, Value>>(FIELDS_KEY)? else {
            return Ok(());
        };

        for field in fields {
            let Some(value) = values.get(field.name) else {
                continue;
            };
            let value: FieldValue =
                serde_json::from_value(value.clone()).map_err(|source| ArchiveError::InvalidValue {
                    key: field.name.to_string(),
                    source,
                })?;
            base.set_value(field.name, Some(value));
        }
        Ok(())
    }
}
