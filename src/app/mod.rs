//! App module - contains the main application state and logic

mod analysis;
mod charts;
mod export;
mod modals;
mod views;

use crate::client::BackendClient;
use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::info;

pub(crate) use charts::ChartTextures;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) client: BackendClient,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Search form
    pub(crate) query: String,
    pub(crate) result_count: ResultCount,
    pub(crate) focus_query: bool,
    // Analysis request, written by the background task
    pub(crate) analysis: Arc<Mutex<AnalysisState>>,
    // Snapshot of the last result taken on the UI thread
    pub(crate) result: Option<AnalysisResult>,
    pub(crate) seen_generation: u64,
    pub(crate) charts: ChartTextures,
    // CSV export
    pub(crate) export: Arc<Mutex<ExportStatus>>,
    pub(crate) export_dir: PathBuf,
    pub(crate) export_dir_str: String,
    // Settings window
    pub(crate) show_settings: bool,
    pub(crate) backend_url: String,
    pub(crate) backend_url_str: String,
    // Toast notification
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<std::time::Instant>,
    // Window
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        runtime: tokio::runtime::Runtime,
        data_dir: PathBuf,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let backend_url = settings.effective_backend_url();
        let export_dir = settings.export_dir_or_default();
        info!(backend = %backend_url, export_dir = %export_dir.display(), "Dashboard configured");

        Self {
            client: BackendClient::new(backend_url.clone()),
            runtime,
            query: settings.last_query.clone(),
            result_count: settings.result_count,
            focus_query: true,
            analysis: Arc::new(Mutex::new(AnalysisState::default())),
            result: None,
            seen_generation: 0,
            charts: ChartTextures::default(),
            export: Arc::new(Mutex::new(ExportStatus::Idle)),
            export_dir_str: export_dir.to_string_lossy().to_string(),
            export_dir,
            show_settings: false,
            backend_url_str: settings.backend_url.clone(),
            backend_url,
            toast_message: None,
            toast_start: None,
            logo_texture: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            backend_url: self.backend_url_str.clone(),
            last_query: self.query.clone(),
            result_count: self.result_count,
            export_dir: Some(self.export_dir_str.clone()),
        };
        settings.save(&self.data_dir);
    }

    /// Point the client at a new backend. Takes effect for the next request.
    pub fn set_backend_url(&mut self, url: String) {
        let stored = Settings {
            backend_url: url,
            ..Settings::default()
        };
        self.backend_url = stored.effective_backend_url();
        self.backend_url_str = stored.backend_url;
        self.client = BackendClient::new(self.backend_url.clone());
        info!(backend = %self.backend_url, "Backend URL changed");
        self.save_settings();
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_start = Some(std::time::Instant::now());
    }

    pub fn is_loading(&self) -> bool {
        self.analysis.lock().unwrap().is_loading()
    }

    pub fn current_error(&self) -> Option<String> {
        self.analysis.lock().unwrap().error.clone()
    }
}
