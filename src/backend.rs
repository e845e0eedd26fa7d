//! HTTP client for the upstream content backend.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::ToolError;

/// Issues GET requests against the configured backend base URL.
///
/// No retries: a failed fetch is reported to the caller immediately.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ToolError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ToolError::Internal(format!("cannot build HTTP client: {e}")))?;
        Ok(Self { client, base_url })
    }

    /// Append path segments to the base URL, percent-encoding each one.
    ///
    /// A path prefix on the base URL (`https://host/api`) is kept.
    fn build_url(&self, segments: &[&str]) -> Result<Url, ToolError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ToolError::Internal(format!("base URL cannot carry a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Fetch the body of `segments` as text.
    ///
    /// Non-2xx responses fail with [`ToolError::BackendHttp`] without reading
    /// the body.
    pub async fn fetch_text(&self, segments: &[&str]) -> Result<String, ToolError> {
        let url = self.build_url(segments)?;
        debug!(url = %url, "backend fetch start");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ToolError::BackendUnreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!(url = %url, status = status.as_u16(), "backend fetch failed");
            return Err(ToolError::BackendHttp { status: status.as_u16() });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ToolError::BackendUnreachable(e.to_string()))?;
        debug!(url = %url, status = status.as_u16(), bytes = body.len(), "backend fetch end");
        Ok(body)
    }

    /// Fetch `segments` and parse the body as JSON.
    pub async fn fetch_json(&self, segments: &[&str]) -> Result<Value, ToolError> {
        let body = self.fetch_text(segments).await?;
        serde_json::from_str(&body).map_err(|_| ToolError::malformed(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(base: &str) -> BackendClient {
        BackendClient::new(Url::parse(base).unwrap(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn fetch_json_parses_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/genres"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"genre_id": 1, "genre_name": "Drama"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let value = client_for(&server.uri()).fetch_json(&["genres"]).await.unwrap();
        assert_eq!(value[0]["genre_name"], "Drama");
    }

    #[tokio::test]
    async fn non_success_status_is_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movies"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let err = client_for(&server.uri()).fetch_text(&["movies"]).await.unwrap_err();
        assert!(matches!(err, ToolError::BackendHttp { status: 503 }), "got {err:?}");
    }

    #[tokio::test]
    async fn unparseable_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movies"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server.uri()).fetch_json(&["movies"]).await.unwrap_err();
        match err {
            ToolError::MalformedResponse { snippet } => assert_eq!(snippet, "<html>oops</html>"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn connection_failure_is_unreachable() {
        // Nothing listens on port 9 of the loopback interface.
        let err = client_for("http://127.0.0.1:9").fetch_text(&["movies"]).await.unwrap_err();
        assert!(matches!(err, ToolError::BackendUnreachable(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn base_path_prefix_is_preserved_and_ids_are_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/movies/tt%2F01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&format!("{}/api/", server.uri()));
        let value = client.fetch_json(&["movies", "tt/01"]).await.unwrap();
        assert_eq!(value["ok"], true);
    }
}
