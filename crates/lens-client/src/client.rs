//! HTTP client for the sentence analysis service.

use reqwest::Client;
use tracing::{debug, error, instrument};

use lens_core::{AnalysisRequest, AnalysisResponse, LensError};

/// Path of the analysis endpoint, relative to the base URL.
pub const ANALYZE_PATH: &str = "/analyze";

/// Client for the analysis service API.
///
/// One POST per call: no retry, no backoff and no timeout beyond what the
/// platform imposes.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    client: Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent(concat!("sentence-lens/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit sentences for analysis.
    ///
    /// Any non-success status is a failure without looking at the body. A
    /// success body only has to parse; missing fields are left for the
    /// renderer to degrade.
    #[instrument(skip(self, request), fields(sentences = request.sentences.len()))]
    pub async fn submit(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, LensError> {
        let url = format!("{}{}", self.base_url, ANALYZE_PATH);
        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Request to {} failed: {}", url, e);
                LensError::Transport(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            error!(status = %status, "Analysis service rejected request");
            return Err(LensError::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| LensError::Transport(e.to_string()))?;
        let response: AnalysisResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Undecodable analysis response: {}", e);
            LensError::Decode(e.to_string())
        })?;

        debug!("Received {} sentence results", response.results.len());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = AnalysisClient::new("http://127.0.0.1:5010/");
        assert_eq!(client.base_url(), "http://127.0.0.1:5010");
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        // Bind then drop so the port is closed.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = AnalysisClient::new(format!("http://127.0.0.1:{port}"));
        let request = AnalysisRequest {
            sentences: vec!["本".into()],
            target_language: "en".into(),
        };

        let err = client.submit(&request).await.unwrap_err();
        assert!(matches!(err, LensError::Transport(_)), "{err:?}");
    }
}
