//! Thin HTTP client wrapper for the e2e tests.

use reqwest::Response;
use serde_json::Value;

pub struct TestClient {
    base_url: String,
    client: reqwest::Client,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn stats(&self) -> Response {
        self.client.get(self.url("/")).send().await.unwrap()
    }

    pub async fn metrics(&self) -> Response {
        self.client.get(self.url("/metrics")).send().await.unwrap()
    }

    // =========================================================================
    // Taste matching
    // =========================================================================

    pub async fn match_references(&self, body: Value) -> Response {
        self.client
            .post(self.url("/v1/taste/match"))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    // =========================================================================
    // Curation
    // =========================================================================

    pub async fn coverage(&self) -> Response {
        self.client
            .get(self.url("/v1/curation/coverage"))
            .send()
            .await
            .unwrap()
    }

    pub async fn list_brand_references(&self) -> Response {
        self.client
            .get(self.url("/v1/curation/brand-references"))
            .send()
            .await
            .unwrap()
    }

    pub async fn create_brand_reference(&self, body: Value) -> Response {
        self.client
            .post(self.url("/v1/curation/brand-references"))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    pub async fn update_brand_reference(&self, id: &str, body: Value) -> Response {
        self.client
            .put(self.url(&format!("/v1/curation/brand-references/{}", id)))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    pub async fn delete_brand_reference(&self, id: &str) -> Response {
        self.client
            .delete(self.url(&format!("/v1/curation/brand-references/{}", id)))
            .send()
            .await
            .unwrap()
    }

    pub async fn list_style_references(&self) -> Response {
        self.client
            .get(self.url("/v1/curation/style-references"))
            .send()
            .await
            .unwrap()
    }

    pub async fn create_style_reference(&self, body: Value) -> Response {
        self.client
            .post(self.url("/v1/curation/style-references"))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    pub async fn update_style_reference(&self, id: &str, body: Value) -> Response {
        self.client
            .put(self.url(&format!("/v1/curation/style-references/{}", id)))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    pub async fn delete_style_reference(&self, id: &str) -> Response {
        self.client
            .delete(self.url(&format!("/v1/curation/style-references/{}", id)))
            .send()
            .await
            .unwrap()
    }
}
