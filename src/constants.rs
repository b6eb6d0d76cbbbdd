//! Application constants and configuration

pub const APP_NAME: &str = "SOV Dashboard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
/// Overrides the backend URL stored in settings.json
pub const BACKEND_URL_ENV: &str = "SOV_BACKEND_URL";

pub const ANALYZE_PATH: &str = "/analyze";
pub const DOWNLOAD_CSV_PATH: &str = "/download_csv";
pub const CSV_FILE_NAME: &str = "youtube_analysis_results.csv";

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search query";
pub const ANALYZE_FAILED_MESSAGE: &str =
    "Failed to analyze. Make sure your backend server is running on port 8000.";

/// Seconds a toast stays fully visible before fading
pub const TOAST_SECS: f32 = 3.0;
