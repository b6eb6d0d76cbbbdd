//! Common types and data structures

use crate::constants::{ANALYZE_FAILED_MESSAGE, DOWNLOAD_CSV_PATH, EMPTY_QUERY_MESSAGE};
use crate::error::ClientError;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Number of videos the backend should analyze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ResultCount {
    Ten,
    #[default]
    Twenty,
    Fifty,
}

impl ResultCount {
    pub const ALL: [ResultCount; 3] = [ResultCount::Ten, ResultCount::Twenty, ResultCount::Fifty];

    pub fn value(self) -> u32 {
        match self {
            ResultCount::Ten => 10,
            ResultCount::Twenty => 20,
            ResultCount::Fifty => 50,
        }
    }

    pub fn label(self) -> String {
        format!("{} videos", self.value())
    }
}

impl TryFrom<u32> for ResultCount {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(ResultCount::Ten),
            20 => Ok(ResultCount::Twenty),
            50 => Ok(ResultCount::Fifty),
            other => Err(format!("unsupported result count {other}, expected 10, 20 or 50")),
        }
    }
}

impl From<ResultCount> for u32 {
    fn from(count: ResultCount) -> Self {
        count.value()
    }
}

/// One analyzed video, in backend order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub title: String,
    pub channel: String,
    pub views: u64,
    pub likes: u64,
    #[serde(rename = "mentions_atomberg", alias = "mentions_brand")]
    pub mentions_brand: bool,
    pub sentiment: f64,
}

/// Base64-encoded PNG charts rendered by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartImages {
    pub pie_chart: String,
    pub bar_chart: String,
}

/// Response body of `GET /analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub query: String,
    pub total_results: u64,
    pub share_of_voice: f64,
    pub videos: Vec<VideoRecord>,
    pub charts: ChartImages,
    #[serde(default = "default_csv_url")]
    pub csv_download_url: String,
}

fn default_csv_url() -> String {
    DOWNLOAD_CSV_PATH.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Idle,
    Loading,
}

/// Shared between the UI thread and the analysis task
pub struct AnalysisState {
    pub status: RequestStatus,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
    pub generation: u64, // bumped on every successful result
    pub completed_at: Option<DateTime<Local>>,
}

impl Default for AnalysisState {
    fn default() -> Self {
        Self {
            status: RequestStatus::Idle,
            result: None,
            error: None,
            generation: 0,
            completed_at: None,
        }
    }
}

impl AnalysisState {
    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }

    /// Mark a request as started. Returns false when the query is blank
    /// or a request is already in flight; nothing should be sent then.
    pub fn begin(&mut self, query: &str) -> bool {
        if query.trim().is_empty() {
            self.error = Some(EMPTY_QUERY_MESSAGE.to_string());
            return false;
        }
        if self.is_loading() {
            return false;
        }
        self.status = RequestStatus::Loading;
        self.error = None;
        true
    }

    /// Record the outcome of a request. A failure keeps the previous result.
    pub fn finish(&mut self, outcome: Result<AnalysisResult, ClientError>) {
        self.status = RequestStatus::Idle;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.generation += 1;
                self.completed_at = Some(Local::now());
            }
            Err(_) => {
                self.error = Some(ANALYZE_FAILED_MESSAGE.to_string());
            }
        }
    }
}

/// CSV export progress
#[derive(Debug, Clone, PartialEq)]
pub enum ExportStatus {
    Idle,
    Downloading,
    Saved(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            query: "ceiling fans".into(),
            total_results: 1,
            share_of_voice: 100.0,
            videos: vec![VideoRecord {
                title: "Best BLDC fan".into(),
                channel: "Tech Hub".into(),
                views: 12_000,
                likes: 800,
                mentions_brand: true,
                sentiment: 0.42,
            }],
            charts: ChartImages {
                pie_chart: String::new(),
                bar_chart: String::new(),
            },
            csv_download_url: "/download_csv".into(),
        }
    }

    #[test]
    fn result_count_accepts_only_fixed_values() {
        assert_eq!(ResultCount::try_from(10), Ok(ResultCount::Ten));
        assert_eq!(ResultCount::try_from(50), Ok(ResultCount::Fifty));
        assert!(ResultCount::try_from(25).is_err());
        assert_eq!(ResultCount::default().value(), 20);
        assert_eq!(ResultCount::Fifty.label(), "50 videos");
    }

    #[test]
    fn result_count_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&ResultCount::Ten).unwrap(), "10");
        let parsed: ResultCount = serde_json::from_str("50").unwrap();
        assert_eq!(parsed, ResultCount::Fifty);
        assert!(serde_json::from_str::<ResultCount>("7").is_err());
    }

    #[test]
    fn analysis_result_parses_backend_payload_in_order() {
        let body = serde_json::json!({
            "query": "atomberg",
            "total_results": 2,
            "share_of_voice": 50.0,
            "videos": [
                {"title": "A", "channel": "One", "views": 1500000, "likes": 2300,
                 "mentions_atomberg": true, "sentiment": 0.35},
                {"title": "B", "channel": "Two", "views": 420, "likes": 12,
                 "mentions_atomberg": false, "sentiment": -0.2}
            ],
            "charts": {"pie_chart": "cGll", "bar_chart": "YmFy"},
            "csv_download_url": "/download_csv"
        });
        let result: AnalysisResult = serde_json::from_value(body).unwrap();

        assert_eq!(result.total_results, 2);
        assert_eq!(result.videos.len(), 2);
        assert_eq!(result.videos[0].title, "A");
        assert!(result.videos[0].mentions_brand);
        assert_eq!(result.videos[1].channel, "Two");
        assert!(!result.videos[1].mentions_brand);
        assert_eq!(result.videos[1].sentiment, -0.2);
        assert_eq!(result.charts.bar_chart, "YmFy");
    }

    #[test]
    fn missing_csv_url_falls_back_to_default_endpoint() {
        let body = serde_json::json!({
            "query": "q", "total_results": 0, "share_of_voice": 0.0, "videos": [],
            "charts": {"pie_chart": "", "bar_chart": ""}
        });
        let result: AnalysisResult = serde_json::from_value(body).unwrap();
        assert_eq!(result.csv_download_url, DOWNLOAD_CSV_PATH);
    }

    #[test]
    fn blank_query_is_rejected_with_message() {
        let mut state = AnalysisState::default();
        assert!(!state.begin(""));
        assert!(!state.begin("   \t"));
        assert_eq!(state.error.as_deref(), Some(EMPTY_QUERY_MESSAGE));
        assert_eq!(state.status, RequestStatus::Idle);
    }

    #[test]
    fn begin_clears_error_and_blocks_overlap() {
        let mut state = AnalysisState::default();
        state.begin("");
        assert!(state.begin("fans"));
        assert!(state.error.is_none());
        assert!(state.is_loading());
        assert!(!state.begin("fans again"));
    }

    #[test]
    fn success_stores_result_and_bumps_generation() {
        let mut state = AnalysisState::default();
        state.begin("ceiling fans");
        state.finish(Ok(sample_result()));

        assert_eq!(state.status, RequestStatus::Idle);
        assert_eq!(state.generation, 1);
        assert!(state.completed_at.is_some());
        assert_eq!(state.result.as_ref().map(|r| r.videos.len()), Some(1));
    }

    #[test]
    fn failure_sets_fixed_message_and_keeps_previous_result() {
        let mut state = AnalysisState::default();
        state.begin("ceiling fans");
        state.finish(Ok(sample_result()));

        state.begin("ceiling fans");
        state.finish(Err(ClientError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR)));

        assert_eq!(state.error.as_deref(), Some(ANALYZE_FAILED_MESSAGE));
        assert_eq!(state.generation, 1);
        assert!(state.result.is_some());
        assert!(!state.is_loading());
    }
}
