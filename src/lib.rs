//! # Resource Recipe
//!
//! Application-side resource types built on [`resource_framework`].
//!
//! ## Module Tour
//!
//! - **[`model`]**: concrete resources ([`Article`](model::Article), [`Comment`](model::Comment),
//!   [`Person`](model::Person)).
//! - **[`catalog`]**: the [`ResourceRegistry`](resource_framework::ResourceRegistry) holding them.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! ```

pub mod catalog;
pub mod model;
