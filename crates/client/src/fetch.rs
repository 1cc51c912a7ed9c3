use article_widget_core::article::RawArticleData;
use thiserror::Error;

/// Failures at the article fetch boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure or an undecodable response body.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Server answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
}

/// Client for the hosting CMS article endpoint.
///
/// Keeps a cookie store so host session credentials travel with every
/// request. One request per call: no retry, dedupe, or timeout — a hung
/// request simply leaves the widget showing its previous state.
#[derive(Debug, Clone)]
pub struct ArticleFetcher {
    http: reqwest::Client,
    api_base_url: String,
}

impl ArticleFetcher {
    /// Create a fetcher for the given API base URL.
    pub fn new(api_base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self {
            http,
            api_base_url: api_base_url.into(),
        })
    }

    /// Fetch the raw payload for one article identifier.
    pub async fn fetch_article(&self, article_id: &str) -> Result<RawArticleData, FetchError> {
        let url = format!(
            "{}/articles/{}",
            self.api_base_url.trim_end_matches('/'),
            article_id
        );
        tracing::debug!("fetching article from {url}");

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetch_parses_article_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/articles/abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "contents": {
                    "en_US": { "title": "Hi", "content": "<p>x</p>" }
                },
                "published": true
            })))
            .mount(&mock_server)
            .await;

        let fetcher = ArticleFetcher::new(mock_server.uri()).unwrap();
        let raw = fetcher.fetch_article("abc123").await.unwrap();

        assert_eq!(raw.contents["en_US"].title.as_deref(), Some("Hi"));
        assert!(raw.is_published());
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_tolerated() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/articles/abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "contents": {} })))
            .mount(&mock_server)
            .await;

        let fetcher = ArticleFetcher::new(format!("{}/", mock_server.uri())).unwrap();
        assert!(fetcher.fetch_article("abc123").await.is_ok());
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/articles/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let fetcher = ArticleFetcher::new(mock_server.uri()).unwrap();
        match fetcher.fetch_article("missing").await {
            Err(FetchError::Status(status)) => assert_eq!(status.as_u16(), 404),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_body_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/articles/garbled"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let fetcher = ArticleFetcher::new(mock_server.uri()).unwrap();
        assert!(matches!(
            fetcher.fetch_article("garbled").await,
            Err(FetchError::Request(_))
        ));
    }
}
