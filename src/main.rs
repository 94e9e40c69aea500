//! Demo: populate a resource, persist it, restore it through the catalog and unload it.

use chrono::Utc;
use resource_framework::tracing::setup_tracing;
use resource_framework::{AnyResource, Resource, ResourceError, ResourceIdentifier};
use resource_recipe::catalog;
use resource_recipe::model::{Article, Person};
use serde_json::{json, Map};
use tracing::{info, info_span};
use url::Url;

fn main() -> Result<(), ResourceError> {
    setup_tracing();

    let registry = catalog::registry()?;
    info!(types = ?registry.resource_types(), "Catalog ready");

    let mut author_mapping = Map::new();
    author_mapping.insert("type".to_string(), json!("people"));
    author_mapping.insert("id".to_string(), json!("7"));
    let author = ResourceIdentifier::from_mapping(&author_mapping)?;

    let _span = info_span!("article").entered();

    let mut article = Article::with_id("42");
    article.set_title(Some("Resources in Rust".to_string()));
    article.set_body(Some("Identity, schema and persistence.".to_string()));
    article.set_published_at(Some(Utc::now()));
    article.set_author(Some(author.clone()));
    article.base_mut().set_url(Url::parse("https://example.com/articles/42").ok());
    article.set_loaded(true);
    info!(%article, "Populated");

    let bytes = article.to_bytes()?;
    info!(bytes = bytes.len(), "Archived");

    let restored = registry.decode_bytes(&bytes)?;
    info!(description = %restored.description(), loaded = restored.state().is_loaded(), "Restored");

    let stub = registry.instantiate_identified(&author)?;
    match stub.downcast::<Person>() {
        Some(person) => info!(%person, loaded = person.is_loaded(), "Author stub"),
        None => info!("Author stub has unexpected type"),
    }

    article.unload();
    info!(%article, loaded = article.is_loaded(), title = ?article.title(), "Unloaded");

    Ok(())
}
