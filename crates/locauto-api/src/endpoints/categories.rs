//! # Category Endpoint
//!
//! Vehicle category reference data for catalog filters.

use locauto_core::types::Category;

use crate::client::HttpClient;
use crate::error::RemoteResult;

/// Category read operations.
#[derive(Debug, Clone)]
pub struct CategoryEndpoint {
    client: HttpClient,
}

impl CategoryEndpoint {
    pub fn new(client: HttpClient) -> Self {
        CategoryEndpoint { client }
    }

    /// Lists all categories. Small reference set, never paginated.
    pub async fn list(&self, token: Option<&str>) -> RemoteResult<Vec<Category>> {
        self.client.get("/categories", token).await
    }

    /// Fetches a single category.
    pub async fn get(&self, id: i64, token: Option<&str>) -> RemoteResult<Category> {
        self.client.get(&format!("/categories/{id}"), token).await
    }
}
