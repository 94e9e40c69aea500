//! # Catalog
//!
//! Wires every resource type this application knows into one [`ResourceRegistry`], so code
//! holding only a type tag (from an identifier or a persisted archive) can build the right type.

use crate::model::{Article, Comment, Person};
use resource_framework::{RegistryError, ResourceRegistry};

/// Builds the registry of all application resource types.
pub fn registry() -> Result<ResourceRegistry, RegistryError> {
    let mut registry = ResourceRegistry::new();
    registry.register::<Article>()?;
    registry.register::<Comment>()?;
    registry.register::<Person>()?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_every_model() {
        let registry = registry().unwrap();
        assert_eq!(registry.resource_types(), vec!["articles", "comments", "people"]);
    }
}
