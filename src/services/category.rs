//! Category service
//!
//! Categories are read-only from the client's side; this service fetches them
//! and resolves what a user typed into a category.

use crate::api::ApiClient;
use crate::error::{BoardsError, BoardsResult};
use crate::models::category::match_label;
use crate::models::{Category, CategoryId};
use crate::session::Session;

/// Service for category lookup
pub struct CategoryService<'a> {
    client: &'a ApiClient,
    session: &'a Session,
}

impl<'a> CategoryService<'a> {
    pub fn new(client: &'a ApiClient, session: &'a Session) -> Self {
        Self { client, session }
    }

    /// List all categories
    pub fn list(&self) -> BoardsResult<Vec<Category>> {
        self.client.categories(self.session.bearer()?)
    }

    /// Find a category by ID or by name
    pub fn find(&self, identifier: &str) -> BoardsResult<Category> {
        let categories = self.list()?;
        resolve(&categories, identifier)
            .cloned()
            .ok_or_else(|| BoardsError::category_not_found(identifier))
    }
}

/// Resolve an ID ("3", "#3") first, then a name
pub fn resolve<'c>(categories: &'c [Category], identifier: &str) -> Option<&'c Category> {
    if let Ok(id) = identifier.parse::<CategoryId>() {
        if let Some(category) = categories.iter().find(|c| c.id == id) {
            return Some(category);
        }
    }
    match_label(categories, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    fn categories() -> Vec<Category> {
        vec![
            Category::new(CategoryId::server(1), "Groceries"),
            Category::new(CategoryId::server(2), "Dining Out"),
            Category::new(CategoryId::server(12), "Rent"),
        ]
    }

    #[test]
    fn test_resolve_by_id_then_name() {
        let categories = categories();
        assert_eq!(resolve(&categories, "12").unwrap().name, "Rent");
        assert_eq!(resolve(&categories, "#2").unwrap().name, "Dining Out");
        assert_eq!(resolve(&categories, "dining").unwrap().name, "Dining Out");
        assert!(resolve(&categories, "Travel").is_none());
    }

    #[test]
    fn test_find_through_client() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/categories/")
                .header("Authorization", "Bearer tok");
            then.status(200)
                .json_body(json!([{"id": 1, "name": "Groceries"}, {"id": 2, "name": "Rent"}]));
        });

        let client = ApiClient::new(&server.base_url(), Duration::from_secs(5)).unwrap();
        let session = Session::with_token("tok");
        let service = CategoryService::new(&client, &session);

        assert_eq!(service.find("rent").unwrap().id, CategoryId::server(2));
        assert!(service.find("Travel").unwrap_err().is_not_found());
        mock.assert_calls(2);
    }

    #[test]
    fn test_requires_session() {
        let client = ApiClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
        let session = Session::anonymous();
        let service = CategoryService::new(&client, &session);

        assert!(matches!(service.list(), Err(BoardsError::NotAuthenticated)));
    }
}
