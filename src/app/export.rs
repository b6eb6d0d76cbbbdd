//! CSV export download

use super::App;
use crate::client::save_export;
use crate::constants::{CSV_FILE_NAME, DOWNLOAD_CSV_PATH};
use crate::types::{AnalysisResult, ExportStatus};
use eframe::egui;
use tracing::{error, info};

/// Export location advertised by the analysis, or the default endpoint.
pub(crate) fn csv_path(result: Option<&AnalysisResult>) -> String {
    result
        .map(|r| r.csv_download_url.trim())
        .filter(|u| !u.is_empty())
        .unwrap_or(DOWNLOAD_CSV_PATH)
        .to_string()
}

impl App {
    /// Fetch the CSV blob at `path` and save it into the export directory.
    /// Failures are logged only.
    pub fn download_csv(&mut self, ctx: &egui::Context, path: String) {
        {
            let mut s = self.export.lock().unwrap();
            if *s == ExportStatus::Downloading {
                return;
            }
            *s = ExportStatus::Downloading;
        }

        let dir = self.export_dir.clone();
        let client = self.client.clone();
        let state = self.export.clone();
        let ctx = ctx.clone();

        info!(url = %client.endpoint(&path), dir = %dir.display(), "Downloading CSV export");

        self.runtime.spawn(async move {
            let outcome = match client.download_csv(&path).await {
                Ok(bytes) => save_export(&dir, &bytes).await,
                Err(e) => Err(e),
            };
            let next = match outcome {
                Ok(dest) => {
                    info!(path = %dest.display(), "CSV saved");
                    ExportStatus::Saved(dest)
                }
                Err(e) => {
                    error!(error = %e, "Failed to download CSV");
                    ExportStatus::Idle
                }
            };
            *state.lock().unwrap() = next;
            ctx.request_repaint();
        });
    }

    /// Turn a finished export into a toast.
    pub fn poll_export(&mut self) {
        let saved = {
            let mut s = self.export.lock().unwrap();
            match std::mem::replace(&mut *s, ExportStatus::Idle) {
                ExportStatus::Saved(path) => Some(path),
                other => {
                    *s = other;
                    None
                }
            }
        };
        if let Some(path) = saved {
            let folder = path
                .parent()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            self.show_toast(format!("Saved {} to {}", CSV_FILE_NAME, folder));
        }
    }

    pub fn is_exporting(&self) -> bool {
        *self.export.lock().unwrap() == ExportStatus::Downloading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::BackendClient;
    use crate::types::ChartImages;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn result_with_csv_url(url: &str) -> AnalysisResult {
        AnalysisResult {
            query: "ceiling fans".into(),
            total_results: 0,
            share_of_voice: 0.0,
            videos: Vec::new(),
            charts: ChartImages {
                pie_chart: String::new(),
                bar_chart: String::new(),
            },
            csv_download_url: url.into(),
        }
    }

    #[test]
    fn csv_path_uses_url_from_result() {
        let result = result_with_csv_url("/exports/x.csv");
        assert_eq!(csv_path(Some(&result)), "/exports/x.csv");
    }

    #[test]
    fn csv_path_falls_back_without_usable_url() {
        assert_eq!(csv_path(None), DOWNLOAD_CSV_PATH);
        let blank = result_with_csv_url("  ");
        assert_eq!(csv_path(Some(&blank)), DOWNLOAD_CSV_PATH);
    }

    #[tokio::test]
    async fn advertised_csv_url_is_the_one_requested() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/exports/x.csv"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("a,b\n", "text/csv"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(DOWNLOAD_CSV_PATH))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let result = result_with_csv_url("/exports/x.csv");
        let bytes = client.download_csv(&csv_path(Some(&result))).await.unwrap();
        assert_eq!(bytes, b"a,b\n");
    }
}
