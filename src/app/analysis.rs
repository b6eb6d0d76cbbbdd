//! Analysis request lifecycle

use super::App;
use eframe::egui;
use tracing::{error, info, warn};

impl App {
    /// Validate the query and fire `GET /analyze` on the runtime.
    pub fn start_analysis(&mut self, ctx: &egui::Context) {
        let query = self.query.clone();
        let count = self.result_count;

        if !self.analysis.lock().unwrap().begin(&query) {
            warn!("Analysis not started: empty query or request in flight");
            return;
        }

        info!(query = %query, results = count.value(), backend = %self.client.base_url(), "Starting analysis");
        self.save_settings();

        let client = self.client.clone();
        let state = self.analysis.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let outcome = client.analyze(&query, count).await;
            match &outcome {
                Ok(result) => info!(
                    query = %result.query,
                    total = result.total_results,
                    share_of_voice = result.share_of_voice,
                    "Analysis complete"
                ),
                Err(e) => error!(error = %e, "Analysis failed"),
            }
            state.lock().unwrap().finish(outcome);
            ctx.request_repaint();
        });
    }

    /// Pick up a newly finished result and rebuild chart textures.
    pub fn poll_analysis(&mut self, ctx: &egui::Context) {
        let fresh = {
            let s = self.analysis.lock().unwrap();
            if s.generation != self.seen_generation {
                Some((s.generation, s.result.clone()))
            } else {
                None
            }
        };

        if let Some((generation, result)) = fresh {
            self.seen_generation = generation;
            if let Some(result) = &result {
                self.charts.load(ctx, generation, &result.charts);
            }
            self.result = result;
        }
    }
}
