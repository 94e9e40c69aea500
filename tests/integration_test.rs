use chrono::{TimeZone, Utc};
use resource_framework::{
    AnyResource, FieldValue, RegistryError, Resource, ResourceIdentifier, ResourceRegistry,
};
use resource_recipe::catalog;
use resource_recipe::model::{Article, Comment, Person};
use serde_json::json;
use url::Url;

fn populated_article() -> Article {
    let mut article = Article::with_id("42");
    article.set_title(Some("Hello".to_string()));
    article.set_body(Some("World".to_string()));
    article.set_published_at(Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()));
    article.set_view_count(Some(10));
    article.set_author(Some(ResourceIdentifier::new("people", "7")));
    article.set_comments(Some(vec![
        ResourceIdentifier::new("comments", "1"),
        ResourceIdentifier::new("comments", "2"),
    ]));
    article.set_extras(Some(json!({"featured": true})));
    article
        .base_mut()
        .set_url(Url::parse("https://example.com/articles/42").ok());
    article.set_loaded(true);
    article
}

/// Full round trip through the catalog: archive an article, restore it by type tag.
#[test]
fn test_article_survives_persistence() {
    let registry = catalog::registry().expect("Failed to build catalog");
    let article = populated_article();

    let bytes = article.to_bytes().expect("Failed to encode article");
    let restored = registry
        .decode_bytes(&bytes)
        .expect("Failed to decode article")
        .downcast::<Article>()
        .expect("Restored resource is not an article");

    assert_eq!(restored, article);
    assert!(restored.is_loaded());
    assert_eq!(restored.url(), article.url());
    assert_eq!(restored.title().as_deref(), Some("Hello"));
    assert_eq!(restored.published_at(), article.published_at());
    assert_eq!(restored.view_count(), Some(10));
    assert_eq!(restored.author(), Some(ResourceIdentifier::new("people", "7")));
    assert_eq!(restored.comments().map(|comments| comments.len()), Some(2));
    assert_eq!(restored.extras(), Some(json!({"featured": true})));
}

#[test]
fn test_person_survives_persistence() {
    let mut person = Person::with_id("7");
    person.set_name(Some("Ada".to_string()));
    person.set_homepage(Url::parse("https://ada.example.com").ok());
    person.set_joined_at(Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()));
    person.set_loaded(true);

    let restored = Person::from_bytes(&person.to_bytes().unwrap()).unwrap();
    assert_eq!(restored.name().as_deref(), Some("Ada"));
    assert_eq!(restored.email(), None);
    assert_eq!(restored.homepage(), person.homepage());
    assert_eq!(restored.joined_at(), person.joined_at());
    assert!(restored.is_loaded());
}

/// Stubs created from identifiers are unloaded until something populates them.
#[test]
fn test_identifier_to_stub_to_loaded() {
    let registry = catalog::registry().unwrap();
    let identifier = ResourceIdentifier::new("comments", "1");

    let mut stub = registry.instantiate_identified(&identifier).unwrap();
    assert!(!stub.state().is_loaded());
    assert_eq!(stub.identifier(), Some(identifier.clone()));

    stub.set_value("body", Some(FieldValue::Text("Nice".into())));
    stub.state_mut().set_loaded(true);

    let comment = stub.downcast::<Comment>().unwrap();
    assert_eq!(comment.body().as_deref(), Some("Nice"));
    assert_eq!(comment.identifier(), Some(identifier));
}

#[test]
fn test_unload_through_dynamic_view() {
    let mut resource: Box<dyn AnyResource> = Box::new(populated_article());
    resource.unload();
    resource.unload();

    let article = resource.downcast::<Article>().unwrap();
    assert!(!article.is_loaded());
    for field in Article::fields() {
        assert_eq!(article.value_for_field(field.name), None, "{}", field.name);
    }
    assert_eq!(article.id(), Some("42"));
    assert!(article.url().is_some());
}

#[test]
fn test_catalog_rejects_reregistration() {
    let mut registry: ResourceRegistry = catalog::registry().unwrap();
    assert_eq!(
        registry.register::<Person>().unwrap_err(),
        RegistryError::DuplicateType("people".into())
    );
    assert!(matches!(
        registry.instantiate("tags"),
        Err(RegistryError::UnknownType(_))
    ));
}

#[test]
fn test_serialized_names() {
    let schema = catalog::registry().unwrap().schema("articles").unwrap();
    let wire: Vec<_> = schema.fields.iter().map(|field| field.serialized_name).collect();
    assert_eq!(
        wire,
        vec![
            "title",
            "body",
            "published-at",
            "view-count",
            "author",
            "comments",
            "extras"
        ]
    );
}
