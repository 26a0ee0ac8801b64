use std::time::Duration;

use tracing::{debug, info};

use moviedb_core::config::LookupConfig;
use moviedb_core::error::MovieDbError;
use moviedb_core::lookup::{LookupOutcome, MetadataLookup};

use crate::error::LookupError;
use crate::models::OmdbResponse;

/// Client for the OMDb title lookup endpoint.
pub struct OmdbClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for OmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OmdbClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

impl OmdbClient {
    /// Build a client from configuration.
    ///
    /// A missing API key is accepted here and reported on the first fetch.
    pub fn new(config: &LookupConfig) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(|e| LookupError::ClientInit(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            api_key: config
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_owned),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Look up a single title. One request, no retries.
    pub async fn fetch_title(&self, title: &str) -> crate::Result<LookupOutcome> {
        let api_key = self.api_key.as_deref().ok_or(LookupError::MissingApiKey)?;

        debug!(title, "Querying OMDb");
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .query(&[("apikey", api_key), ("t", title)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LookupError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: OmdbResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::Decode(e.to_string()))?;

        let reason = parsed.error.clone();
        let outcome = parsed.into_outcome();
        if outcome == LookupOutcome::NotFound {
            info!(
                title,
                reason = reason.as_deref().unwrap_or("empty response"),
                "OMDb has no match"
            );
        }
        Ok(outcome)
    }
}

impl MetadataLookup for OmdbClient {
    async fn fetch(&self, title: &str) -> Result<LookupOutcome, MovieDbError> {
        Ok(self.fetch_title(title).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moviedb_core::lookup::MovieMetadata;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(server: &MockServer, api_key: Option<&str>) -> LookupConfig {
        LookupConfig {
            base_url: server.uri(),
            api_key: api_key.map(str::to_owned),
            timeout_secs: 5,
        }
    }

    #[tokio::test]
    async fn test_fetch_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("apikey", "test-key"))
            .and(query_param("t", "Inception"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Title": "Inception",
                "Year": "2010",
                "imdbRating": "8.8",
                "Poster": "http://x/p.jpg",
                "Response": "True"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OmdbClient::new(&config(&server, Some("test-key"))).unwrap();
        let outcome = client.fetch_title("Inception").await.unwrap();

        assert_eq!(
            outcome,
            LookupOutcome::Found(MovieMetadata {
                title: Some("Inception".to_string()),
                year: Some(2010),
                rating: Some(8.8),
                poster_url: Some("http://x/p.jpg".to_string()),
            })
        );
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Response": "False",
                "Error": "Movie not found!"
            })))
            .mount(&server)
            .await;

        let client = OmdbClient::new(&config(&server, Some("test-key"))).unwrap();
        let outcome = client.fetch("No Such Movie").await.unwrap();
        assert_eq!(outcome, LookupOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_fetch_empty_body_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = OmdbClient::new(&config(&server, Some("test-key"))).unwrap();
        let outcome = client.fetch_title("Heat").await.unwrap();
        assert_eq!(outcome, LookupOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = OmdbClient::new(&config(&server, Some("  "))).unwrap();
        assert!(!client.has_api_key());

        let err = client.fetch_title("Up").await.unwrap_err();
        assert!(matches!(err, LookupError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key!"))
            .mount(&server)
            .await;

        let client = OmdbClient::new(&config(&server, Some("bad"))).unwrap();
        let err = client.fetch_title("Up").await.unwrap_err();
        match err {
            LookupError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API key!");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = OmdbClient::new(&config(&server, Some("k"))).unwrap();
        let err = client.fetch_title("Up").await.unwrap_err();
        assert!(matches!(err, LookupError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_maps_to_lookup_unavailable() {
        let client = OmdbClient::new(&LookupConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            api_key: Some("k".to_string()),
            timeout_secs: 2,
        })
        .unwrap();

        let err = client.fetch("Up").await.unwrap_err();
        assert!(matches!(err, MovieDbError::LookupUnavailable(_)));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = OmdbClient::new(&LookupConfig {
            api_key: Some("secret".to_string()),
            ..LookupConfig::default()
        })
        .unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("***"));
        assert!(debug.contains("http://www.omdbapi.com"));
    }
}
