//! # Field Values
//!
//! [`FieldValue`] is the tagged union stored behind the generic name-keyed accessors.
//! [`FieldType`] converts between it and plain Rust types so generated accessors stay typed.

use crate::field::FieldKind;
use crate::identifier::ResourceIdentifier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// A value bound to a resource field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Json(serde_json::Value),
    Text(String),
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Url(Url),
    Date(DateTime<Utc>),
    ToOne(ResourceIdentifier),
    ToMany(Vec<ResourceIdentifier>),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Json(_) => FieldKind::Json,
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Boolean(_) => FieldKind::Boolean,
            FieldValue::Integer(_) => FieldKind::Integer,
            FieldValue::Float(_) => FieldKind::Float,
            FieldValue::Url(_) => FieldKind::Url,
            FieldValue::Date(_) => FieldKind::Date,
            FieldValue::ToOne(_) => FieldKind::ToOne,
            FieldValue::ToMany(_) => FieldKind::ToMany,
        }
    }
}

/// A Rust type that can live in a [`FieldValue`].
pub trait FieldType: Sized {
    const KIND: FieldKind;

    fn into_value(self) -> FieldValue;

    fn from_value(value: &FieldValue) -> Option<Self>;
}

macro_rules! impl_field_type {
    ($ty:ty, $variant:ident) => {
        impl FieldType for $ty {
            const KIND: FieldKind = FieldKind::$variant;

            fn into_value(self) -> FieldValue {
                FieldValue::$variant(self)
            }

            fn from_value(value: &FieldValue) -> Option<Self> {
                match value {
                    FieldValue::$variant(inner) => Some(inner.clone()),
                    _ => None,
                }
            }
        }

        impl From<$ty> for FieldValue {
            fn from(value: $ty) -> Self {
                FieldValue::$variant(value)
            }
        }
    };
}

impl_field_type!(serde_json::Value, Json);
impl_field_type!(String, Text);
impl_field_type!(bool, Boolean);
impl_field_type!(i64, Integer);
impl_field_type!(Url, Url);
impl_field_type!(DateTime<Utc>, Date);
impl_field_type!(ResourceIdentifier, ToOne);
impl_field_type!(Vec<ResourceIdentifier>, ToMany);

// Integers widen into floats on read.
impl FieldType for f64 {
    const KIND: FieldKind = FieldKind::Float;

    fn into_value(self) -> FieldValue {
        FieldValue::Float(self)
    }

    fn from_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Float(inner) => Some(*inner),
            FieldValue::Integer(inner) => Some(*inner as f64),
            _ => None,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}
