//! Chart textures decoded from the backend's base64 PNGs

use crate::types::ChartImages;
use crate::utils::decode_chart;
use eframe::egui;
use tracing::{debug, warn};

#[derive(Default)]
pub(crate) struct ChartTextures {
    pub pie: Option<egui::TextureHandle>,
    pub bar: Option<egui::TextureHandle>,
}

impl ChartTextures {
    /// Replace both textures. A chart that fails to decode is left empty.
    pub fn load(&mut self, ctx: &egui::Context, generation: u64, charts: &ChartImages) {
        self.pie = load_chart(ctx, &format!("pie_chart_{}", generation), &charts.pie_chart);
        self.bar = load_chart(ctx, &format!("bar_chart_{}", generation), &charts.bar_chart);
    }
}

fn load_chart(ctx: &egui::Context, name: &str, encoded: &str) -> Option<egui::TextureHandle> {
    if encoded.trim().is_empty() {
        debug!(chart = name, "Chart payload empty");
        return None;
    }
    match decode_chart(encoded) {
        Ok((pixels, w, h)) => Some(ctx.load_texture(
            name,
            egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
            egui::TextureOptions::LINEAR,
        )),
        Err(e) => {
            warn!(chart = name, error = %e, "Failed to decode chart");
            None
        }
    }
}
