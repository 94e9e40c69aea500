//! # Resource Identifiers
//!
//! A [`ResourceIdentifier`] is a lightweight `(type, id)` reference to a resource. It is used
//! wherever a resource must be named without loading it, e.g. inside relationships or lookups.

use crate::error::IdentifierError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

const TYPE_KEY: &str = "type";
const ID_KEY: &str = "id";

/// Immutable reference to a resource by resource type and server-assigned id.
///
/// Two identifiers are equal iff both the type and the id are equal.
///
/// ```rust
/// use resource_framework::ResourceIdentifier;
///
/// let identifier = ResourceIdentifier::new("articles", "1");
/// let mapping = identifier.to_mapping();
/// assert_eq!(ResourceIdentifier::from_mapping(&mapping).unwrap(), identifier);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    resource_type: String,
    id: String,
}

impl ResourceIdentifier {
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Builds an identifier from a mapping holding exactly the string keys `"type"` and `"id"`.
    pub fn from_mapping(mapping: &Map<String, Value>) -> Result<Self, IdentifierError> {
        if let Some(key) = mapping.keys().find(|key| *key != TYPE_KEY && *key != ID_KEY) {
            return Err(IdentifierError::UnexpectedKey(key.clone()));
        }

        let resource_type = string_for_key(mapping, TYPE_KEY)?;
        let id = string_for_key(mapping, ID_KEY)?;
        Ok(Self::new(resource_type, id))
    }

    /// Inverse of [`ResourceIdentifier::from_mapping`].
    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut mapping = Map::new();
        mapping.insert(TYPE_KEY.to_string(), Value::String(self.resource_type.clone()));
        mapping.insert(ID_KEY.to_string(), Value::String(self.id.clone()));
        mapping
    }
}

fn string_for_key(mapping: &Map<String, Value>, key: &str) -> Result<String, IdentifierError> {
    match mapping.get(key) {
        None => Err(IdentifierError::MissingKey(key.to_string())),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(IdentifierError::TypeMismatch {
            key: key.to_string(),
        }),
    }
}

impl TryFrom<&Map<String, Value>> for ResourceIdentifier {
    type Error = IdentifierError;

    fn try_from(mapping: &Map<String, Value>) -> Result<Self, Self::Error> {
        Self::from_mapping(mapping)
    }
}

impl From<&ResourceIdentifier> for Map<String, Value> {
    fn from(identifier: &ResourceIdentifier) -> Self {
        identifier.to_mapping()
    }
}

impl fmt::Display for ResourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.resource_type, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mapping(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn mapping_round_trip() {
        let input = mapping(json!({"type": "people", "id": "9"}));
        let identifier = ResourceIdentifier::from_mapping(&input).unwrap();
        assert_eq!(identifier.resource_type(), "people");
        assert_eq!(identifier.id(), "9");
        assert_eq!(identifier.to_mapping(), input);
    }

    #[test]
    fn missing_keys_are_reported() {
        let err = ResourceIdentifier::from_mapping(&mapping(json!({"id": "9"}))).unwrap_err();
        assert_eq!(err, IdentifierError::MissingKey("type".into()));

        let err = ResourceIdentifier::from_mapping(&mapping(json!({"type": "people"}))).unwrap_err();
        assert_eq!(err, IdentifierError::MissingKey("id".into()));
    }

    #[test]
    fn non_string_values_are_rejected() {
        let err =
            ResourceIdentifier::from_mapping(&mapping(json!({"type": "people", "id": 9})))
                .unwrap_err();
        assert_eq!(err, IdentifierError::TypeMismatch { key: "id".into() });
    }

    #[test]
    fn extra_keys_are_rejected() {
        let err = ResourceIdentifier::try_from(&mapping(
            json!({"type": "people", "id": "9", "meta": {}}),
        ))
        .unwrap_err();
        assert_eq!(err, IdentifierError::UnexpectedKey("meta".into()));
    }

    #[test]
    fn equality_is_structural() {
        let a = ResourceIdentifier::new("people", "1");
        assert_eq!(a, ResourceIdentifier::new("people", "1"));
        assert_ne!(a, ResourceIdentifier::new("people", "2"));
        assert_ne!(a, ResourceIdentifier::new("articles", "1"));
    }

    #[test]
    fn serde_uses_wire_names() {
        let identifier = ResourceIdentifier::new("people", "1");
        let value = serde_json::to_value(&identifier).unwrap();
        assert_eq!(value, json!({"type": "people", "id": "1"}));
        assert_eq!(identifier.to_string(), "people/1");
    }
}
