//! HTTP client for the analysis backend

use crate::constants::{ANALYZE_PATH, CSV_FILE_NAME};
use crate::error::ClientError;
use crate::types::{AnalysisResult, ResultCount};
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Upper bound on the buffer preallocated from a Content-Length header
const MAX_PREALLOC: u64 = 8 * 1024 * 1024;

/// Thin wrapper over `reqwest::Client` bound to one backend base URL.
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a path like `/download_csv` against the base URL.
    /// Absolute URLs are returned unchanged.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// `GET /analyze?query=..&results=..`
    pub async fn analyze(
        &self,
        query: &str,
        count: ResultCount,
    ) -> Result<AnalysisResult, ClientError> {
        if query.trim().is_empty() {
            return Err(ClientError::EmptyQuery);
        }

        let url = self.endpoint(ANALYZE_PATH);
        debug!(url = %url, query = %query, results = count.value(), "Requesting analysis");

        let response = self
            .http
            .get(&url)
            .query(&[("query", query.to_string()), ("results", count.value().to_string())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        Ok(response.json::<AnalysisResult>().await?)
    }

    /// Fetch the CSV export produced by the last analysis.
    pub async fn download_csv(&self, path: &str) -> Result<Vec<u8>, ClientError> {
        let url = self.endpoint(path);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        let mut bytes = Vec::with_capacity(capacity_hint(response.content_length()));
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            bytes.extend_from_slice(&chunk?);
        }

        debug!(url = %url, size = bytes.len(), "CSV downloaded");
        Ok(bytes)
    }
}

fn capacity_hint(content_length: Option<u64>) -> usize {
    content_length.unwrap_or(0).min(MAX_PREALLOC) as usize
}

/// Write CSV bytes into `dir` under the fixed export file name.
pub async fn save_export(dir: &Path, bytes: &[u8]) -> Result<PathBuf, ClientError> {
    tokio::fs::create_dir_all(dir).await?;
    let dest = dir.join(CSV_FILE_NAME);
    tokio::fs::write(&dest, bytes).await?;
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn analysis_json() -> serde_json::Value {
        json!({
            "query": "ceiling fans",
            "total_results": 3,
            "share_of_voice": 33.33,
            "videos": [
                {"title": "Top 5 fans", "channel": "Gadgets", "views": 2500000, "likes": 41000,
                 "mentions_atomberg": true, "sentiment": 0.31},
                {"title": "Fan review", "channel": "HomeLab", "views": 8700, "likes": 120,
                 "mentions_atomberg": false, "sentiment": -0.05},
                {"title": "Noisy fan fix", "channel": "DIY", "views": 640, "likes": 9,
                 "mentions_atomberg": false, "sentiment": -0.4}
            ],
            "charts": {"pie_chart": "", "bar_chart": ""},
            "csv_download_url": "/download_csv"
        })
    }

    #[tokio::test]
    async fn analyze_sends_query_and_result_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/analyze"))
            .and(query_param("query", "ceiling fans"))
            .and(query_param("results", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(analysis_json()))
            .expect(1)
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let result = client
            .analyze("ceiling fans", ResultCount::Fifty)
            .await
            .expect("analysis should succeed");

        assert_eq!(result.total_results, 3);
        assert_eq!(result.share_of_voice, 33.33);
        assert_eq!(result.videos.len(), 3);
        assert_eq!(result.videos[0].channel, "Gadgets");
        assert_eq!(result.videos[2].title, "Noisy fan fix");
    }

    #[tokio::test]
    async fn blank_query_never_reaches_the_backend() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(analysis_json()))
            .expect(0)
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let err = client.analyze("   ", ResultCount::Ten).await.unwrap_err();

        assert!(matches!(err, ClientError::EmptyQuery));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/analyze"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let err = client.analyze("fans", ResultCount::Twenty).await.unwrap_err();

        assert!(
            matches!(err, ClientError::Status(s) if s == reqwest::StatusCode::INTERNAL_SERVER_ERROR),
            "unexpected error: {err:?}"
        );
    }

    #[tokio::test]
    async fn malformed_body_is_an_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/analyze"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let err = client.analyze("fans", ResultCount::Twenty).await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)), "unexpected error: {err:?}");
    }

    #[tokio::test]
    async fn unreachable_backend_is_an_http_error() {
        // Port 9 (discard) is not listening on test machines
        let client = BackendClient::new("http://127.0.0.1:9");
        let err = client.analyze("fans", ResultCount::Ten).await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)), "unexpected error: {err:?}");
    }

    #[tokio::test]
    async fn download_csv_returns_body_bytes() {
        let server = MockServer::start().await;
        let csv = "title,channel,views,likes,mentions_atomberg,sentiment\nA,B,1,2,True,0.5\n";
        Mock::given(method("GET"))
            .and(path("/download_csv"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(csv, "text/csv"))
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let bytes = client.download_csv("/download_csv").await.unwrap();
        assert_eq!(bytes, csv.as_bytes());
    }

    #[tokio::test]
    async fn download_csv_failure_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/download_csv"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        assert!(client.download_csv("/download_csv").await.is_err());
    }

    #[tokio::test]
    async fn save_export_writes_fixed_file_name() {
        let dir = std::env::temp_dir().join(format!("sov-export-test-{}", std::process::id()));
        let dest = save_export(&dir, b"a,b\n1,2\n").await.unwrap();

        assert_eq!(dest.file_name().and_then(|n| n.to_str()), Some(CSV_FILE_NAME));
        assert_eq!(std::fs::read(&dest).unwrap(), b"a,b\n1,2\n");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn content_length_hint_is_capped() {
        assert_eq!(capacity_hint(None), 0);
        assert_eq!(capacity_hint(Some(512)), 512);
        assert_eq!(capacity_hint(Some(u64::MAX)), MAX_PREALLOC as usize);
    }

    #[test]
    fn endpoint_resolves_relative_and_absolute_paths() {
        let client = BackendClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.endpoint("/download_csv"), "http://localhost:8000/download_csv");
        assert_eq!(client.endpoint("download_csv"), "http://localhost:8000/download_csv");
        assert_eq!(
            client.endpoint("http://files.local/export.csv"),
            "http://files.local/export.csv"
        );
    }
}
