use resource_framework::{resource, ResourceIdentifier};

resource! {
    /// A reader comment attached to an [`Article`](crate::model::Article).
    pub struct Comment: "comments" {
        body: String,
        author: ResourceIdentifier,
    }
}
