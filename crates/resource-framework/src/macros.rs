//! # The `resource!` Macro
//!
//! Declaring a resource by hand means writing the struct, the schema, the [`Resource`](crate::Resource)
//! impl, typed accessors and the encode/decode extension for its fields. [`resource!`](crate::resource!)
//! writes all of that from one declaration.

/// Declares a concrete resource type.
///
/// Each field becomes an entry in the type's `FIELDS` schema plus a typed getter and setter
/// (`title()` / `set_title()`) over the generic name-keyed storage. A field may carry
/// `as "wire-name"` to override its serialized name.
///
/// The generated type:
/// - implements [`Resource`](crate::Resource), persisting declared fields after the base contract,
/// - implements `PartialEq` as identity equality ([`same_identity`](crate::same_identity)),
/// - implements `Display` with [`Resource::description`](crate::Resource::description).
///
/// ```rust
/// use resource_framework::{resource, Resource};
///
/// resource! {
///     /// A blog post.
///     pub struct Post: "posts" {
///         title: String,
///         comment_count: i64 as "comment-count",
///     }
/// }
///
/// let mut post = Post::with_id("1");
/// post.set_title(Some("Hello".to_string()));
/// assert_eq!(post.title().as_deref(), Some("Hello"));
/// assert_eq!(Post::field_named("comment_count").unwrap().serialized_name, "comment-count");
///
/// post.unload();
/// assert_eq!(post.title(), None);
/// assert_eq!(post, Post::with_id("1"));
/// ```
#[macro_export]
macro_rules! resource {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $resource_type:literal {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty $(as $serialized:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        $vis struct $name {
            base: $crate::ResourceBase,
        }

        impl $name {
            pub const FIELDS: &'static [$crate::Field] = &[
                $(
                    $crate::Field::new(
                        stringify!($field),
                        <$ty as $crate::FieldType>::KIND,
                    )
                    $(.serialized_as($serialized))?
                ),*
            ];

            pub fn new() -> Self {
                Self::default()
            }

            pub fn with_id(id: impl Into<String>) -> Self {
                Self {
                    base: $crate::ResourceBase::with_id(id),
                }
            }

            $crate::__paste::paste! {
                $(
                    $(#[$field_meta])*
                    pub fn $field(&self) -> ::std::option::Option<$ty> {
                        self.base
                            .value(stringify!($field))
                            .and_then(<$ty as $crate::FieldType>::from_value)
                    }

                    pub fn [<set_ $field>](&mut self, value: ::std::option::Option<$ty>) {
                        $crate::Resource::set_value(
                            self,
                            stringify!($field),
                            value.map(<$ty as $crate::FieldType>::into_value),
                        );
                    }
                )*
            }
        }

        impl $crate::Resource for $name {
            fn resource_type() -> &'static str {
                $resource_type
            }

            fn fields() -> &'static [$crate::Field] {
                Self::FIELDS
            }

            fn base(&self) -> &$crate::ResourceBase {
                &self.base
            }

            fn base_mut(&mut self) -> &mut $crate::ResourceBase {
                &mut self.base
            }

            fn encode(
                &self,
                archive: &mut $crate::Archive,
            ) -> ::std::result::Result<(), $crate::ArchiveError> {
                archive.encode_base($resource_type, &self.base)?;
                archive.encode_fields(Self::FIELDS, &self.base)
            }

            fn decode(
                archive: &$crate::Archive,
            ) -> ::std::result::Result<Self, $crate::ArchiveError> {
                let mut resource = Self::default();
                archive.decode_base($resource_type, &mut resource.base)?;
                archive.decode_fields(Self::FIELDS, &mut resource.base)?;
                ::std::result::Result::Ok(resource)
            }
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::same_identity(self, other)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::Resource::description(self))
            }
        }
    };
}
