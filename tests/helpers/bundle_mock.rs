//! Mock HTTP server serving translation bundles
//!
//! Uses wiremock to answer GET requests with configurable bodies and status
//! codes.

use serde_json::Value;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock bundle host for remote-loading tests
pub struct BundleMockServer {
    pub server: MockServer,
}

impl BundleMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Absolute URL for `route` on this server
    pub fn url(&self, route: &str) -> String {
        format!("{}{}", self.server.uri(), route)
    }

    /// Serve `body` as JSON at `route`, expecting exactly one request
    pub async fn mount_bundle(&self, route: &str, body: &Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Serve a raw text body at `route`
    pub async fn mount_raw(&self, route: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Answer `route` with an empty response of the given status
    pub async fn mount_status(&self, route: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }
}
