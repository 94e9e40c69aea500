//! Concrete resource types.
//!
//! [`Article`] and [`Comment`] are declared with [`resource!`](resource_framework::resource!).
//! [`Person`] implements [`Resource`](resource_framework::Resource) by hand to show the full contract.

pub mod article;
pub mod comment;
pub mod person;

pub use article::*;
pub use comment::*;
pub use person::*;
