use thiserror::Error;

use super::models::SearchResponse;

/// Endpoint for keyword photo search
const SEARCH_ENDPOINT: &str = "https://api.unsplash.com/search/photos";

/// Errors a search or thumbnail fetch can end in.
///
/// Variants carry strings rather than the underlying reqwest error so
/// the whole type stays `Clone` and can travel inside UI messages.
#[derive(Debug, Clone, Error)]
pub enum UnsplashError {
    /// The request never produced a response (DNS, TLS, refused, ...)
    #[error("request failed: {0}")]
    Request(String),
    /// The API answered with a non-success status, e.g. 401 for a bad key
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    /// The response body was not the JSON shape we expect
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// The HTTP gateway to Unsplash.
///
/// Holds the access key injected at startup and a shared connection
/// pool. Cloning is cheap (reqwest clients share their pool), which is
/// what lets background fetch tasks each carry their own handle.
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    http: reqwest::Client,
    access_key: String,
}

impl UnsplashClient {
    /// Create a client around the given access key.
    ///
    /// The key is not validated here; an empty or wrong key only
    /// surfaces as a failed request at search time.
    pub fn new(access_key: String) -> Self {
        UnsplashClient {
            http: reqwest::Client::new(),
            access_key,
        }
    }

    /// Run one keyword search against the API.
    ///
    /// One GET, one outcome. No retry, no timeout beyond reqwest's
    /// defaults; the term is URL-encoded by the query builder.
    pub async fn search_photos(&self, query: &str) -> Result<SearchResponse, UnsplashError> {
        let response = self
            .http
            .get(SEARCH_ENDPOINT)
            .query(&[("query", query), ("client_id", &self.access_key)])
            .send()
            .await
            .map_err(|e| UnsplashError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UnsplashError::Status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| UnsplashError::Request(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| UnsplashError::Decode(e.to_string()))
    }

    /// Download the raw bytes of one image URL.
    ///
    /// Used for grid thumbnails; decoding happens on the UI side.
    pub async fn fetch_image_bytes(&self, url: &str) -> Result<Vec<u8>, UnsplashError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| UnsplashError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UnsplashError::Status(status));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| UnsplashError::Request(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_format_for_the_dev_log() {
        let err = UnsplashError::Status(reqwest::StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "unexpected status 401 Unauthorized");

        let err = UnsplashError::Decode("missing field `results`".to_string());
        assert!(err.to_string().contains("results"));
    }

    #[test]
    fn test_client_is_cheaply_cloneable() {
        let client = UnsplashClient::new("demo-key".to_string());
        let clone = client.clone();
        assert_eq!(clone.access_key, "demo-key");
    }
}
