//! # Resource Framework
//!
//! This crate provides the model layer for **remotely-sourced, schema-described entities**
//! ("resources"). A resource can be identified, partially loaded, persisted to bytes and read
//! back, and have its declared fields read and written by name, without each concrete type
//! hand-writing accessor code.
//!
//! Network transport, response parsing and caching build on top of this crate and are not
//! part of it.
//!
//! ## Core Abstractions
//!
//! 1. **Identity** ([`ResourceIdentifier`]) - an immutable `(type, id)` reference.
//! 2. **Schema** ([`Field`], [`Schema`]) - the static, per-type list of declared fields.
//! 3. **Entity** ([`Resource`], [`ResourceBase`]) - identity, load state, metadata and the
//!    name-keyed field values.
//! 4. **Persistence** ([`Archive`]) - the encode/decode contract.
//! 5. **Dispatch** ([`ResourceRegistry`], [`AnyResource`]) - recover a type from its tag.
//!
//! ## Declaring a Resource
//!
//! ```rust
//! use resource_framework::{resource, FieldValue, Resource};
//!
//! resource! {
//!     pub struct Article: "articles" {
//!         title: String,
//!         body: String,
//!     }
//! }
//!
//! let mut article = Article::with_id("1");
//! article.set_value("title", Some(FieldValue::Text("Hello".into())));
//! article.set_loaded(true);
//! assert_eq!(article.title().as_deref(), Some("Hello"));
//!
//! let restored = Article::from_bytes(&article.to_bytes().unwrap()).unwrap();
//! assert_eq!(restored.title().as_deref(), Some("Hello"));
//! assert!(restored.is_loaded());
//!
//! article.unload();
//! assert!(!article.is_loaded());
//! assert_eq!(article.title(), None);
//! ```
//!
//! ## Load State
//!
//! A resource starts **unloaded**. Whatever populates it from a response sets
//! [`Resource::set_loaded`] once its fields are filled; [`Resource::unload`] clears every
//! declared field and returns it to unloaded. `id`, `url` and `meta` survive an unload.
//!
//! ## Concurrency
//!
//! Everything here is synchronous. Mutation needs `&mut`, so an instance shared between threads
//! must sit behind a `Mutex` (or be owned by one thread) at the integration layer.

pub mod archive;
pub mod error;
pub mod field;
pub mod identifier;
mod macros;
pub mod registry;
pub mod resource;
pub mod tracing;
pub mod value;

#[doc(hidden)]
pub use paste as __paste;

// Re-export core types for convenience
pub use archive::Archive;
pub use error::{ArchiveError, IdentifierError, RegistryError, ResourceError};
pub use field::{Field, FieldKind};
pub use identifier::ResourceIdentifier;
pub use registry::ResourceRegistry;
pub use resource::{same_identity, AnyResource, Resource, ResourceBase, Schema};
pub use value::{FieldType, FieldValue};
