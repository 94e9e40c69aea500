use chrono::{DateTime, Utc};
use resource_framework::{resource, ResourceIdentifier};

resource! {
    /// A published article.
    pub struct Article: "articles" {
        title: String,
        body: String,
        /// Set by the server when the article goes live.
        published_at: DateTime<Utc> as "published-at",
        view_count: i64 as "view-count",
        author: ResourceIdentifier,
        comments: Vec<ResourceIdentifier>,
        /// Free-form attributes the schema does not model.
        extras: serde_json::Value,
    }
}
