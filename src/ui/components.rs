//! Reusable UI components
//!
//! Formatting helpers and small widgets shared by the dashboard views.

use crate::theme;
use eframe::egui;

/// Compact view/like counts: 1.5M, 2.3K, 999
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{}M", one_decimal(n, 1_000_000))
    } else if n >= 1_000 {
        format!("{}K", one_decimal(n, 1_000))
    } else {
        n.to_string()
    }
}

/// `n / unit` to one decimal place, halves rounded up
fn one_decimal(n: u64, unit: u64) -> String {
    let tenths = (n as u128 * 10 + unit as u128 / 2) / unit as u128;
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Share of voice as the backend reports it, e.g. "33.33%" or "50%"
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

/// Polarity bucket for a signed sentiment score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn from_score(score: f64) -> Self {
        if score > 0.1 {
            Sentiment::Positive
        } else if score < -0.1 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    /// (bg, text) colors for the badge
    pub fn colors(self) -> (egui::Color32, egui::Color32) {
        match self {
            Sentiment::Positive => theme::tinted(theme::STATUS_SUCCESS),
            Sentiment::Neutral => theme::tinted(theme::STATUS_WARNING),
            Sentiment::Negative => theme::tinted(theme::STATUS_ERROR),
        }
    }
}

/// Pill-shaped label
pub fn badge(ui: &mut egui::Ui, text: &str, bg: egui::Color32, fg: egui::Color32) -> egui::Response {
    egui::Frame::new()
        .fill(bg)
        .corner_radius(theme::BADGE_HEIGHT / 2.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(text)
                        .size(theme::FONT_SMALL)
                        .strong()
                        .color(fg),
                )
                .selectable(false),
            );
        })
        .response
}

pub fn mention_badge(ui: &mut egui::Ui, mentions: bool) -> egui::Response {
    if mentions {
        let (bg, fg) = theme::tinted(theme::STATUS_SUCCESS);
        badge(ui, "Yes", bg, fg)
    } else {
        badge(ui, "No", theme::BG_SURFACE, theme::TEXT_MUTED)
    }
}

pub fn sentiment_badge(ui: &mut egui::Ui, score: f64) -> egui::Response {
    let sentiment = Sentiment::from_score(score);
    let (bg, fg) = sentiment.colors();
    badge(ui, sentiment.label(), bg, fg)
}

/// Square icon tile used on the right of stat cards
pub fn icon_tile(ui: &mut egui::Ui, icon: &str, color: egui::Color32) -> egui::Response {
    let size = theme::ICON_TILE_SIZE;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        let (bg, _) = theme::tinted(color);
        ui.painter().rect_filled(rect, theme::RADIUS_LARGE, bg);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(size * 0.6),
            color,
        );
    }
    response
}

/// Icon tile that acts as a button. Returns the click response.
pub fn icon_button_tile(ui: &mut egui::Ui, icon: &str, color: egui::Color32, enabled: bool) -> egui::Response {
    let size = theme::ICON_TILE_SIZE;
    let sense = if enabled { egui::Sense::click() } else { egui::Sense::hover() };
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), sense);
    if ui.is_rect_visible(rect) {
        let (bg, _) = theme::tinted(color);
        let (fill, draw_rect) = theme::button_visual(&response, bg, rect);
        if enabled && response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        let fg = if enabled { color } else { theme::TEXT_DIM };
        ui.painter().rect_filled(draw_rect, theme::RADIUS_LARGE, fill);
        ui.painter().text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(size * 0.6),
            fg,
        );
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_counts_are_printed_verbatim() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn thousands_collapse_to_k() {
        assert_eq!(format_count(1_000), "1.0K");
        assert_eq!(format_count(2_340), "2.3K");
        assert_eq!(format_count(41_000), "41.0K");
    }

    #[test]
    fn just_below_a_million_stays_in_k() {
        assert_eq!(format_count(999_999), "1000.0K");
        assert_eq!(format_count(999_950), "1000.0K");
        assert_eq!(format_count(999_949), "999.9K");
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(format_count(1_250), "1.3K");
        assert_eq!(format_count(2_250), "2.3K");
        assert_eq!(format_count(1_050), "1.1K");
        assert_eq!(format_count(1_249), "1.2K");
        assert_eq!(format_count(1_250_000), "1.3M");
        assert_eq!(format_count(2_450_000), "2.5M");
    }

    #[test]
    fn millions_collapse_to_m() {
        assert_eq!(format_count(1_000_000), "1.0M");
        assert_eq!(format_count(1_500_000), "1.5M");
        assert_eq!(format_count(2_520_000), "2.5M");
        assert_eq!(format_count(1_200_000_000), "1200.0M");
    }

    #[test]
    fn percent_keeps_backend_precision() {
        assert_eq!(format_percent(33.33), "33.33%");
        assert_eq!(format_percent(50.0), "50%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn sentiment_thresholds() {
        assert_eq!(Sentiment::from_score(0.42), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(0.1001), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(-0.35), Sentiment::Negative);
        assert_eq!(Sentiment::from_score(-0.1001), Sentiment::Negative);
        assert_eq!(Sentiment::from_score(0.0), Sentiment::Neutral);
    }

    #[test]
    fn sentiment_boundaries_are_neutral() {
        assert_eq!(Sentiment::from_score(0.1), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(-0.1), Sentiment::Neutral);
    }

    #[test]
    fn sentiment_labels() {
        assert_eq!(Sentiment::Positive.label(), "Positive");
        assert_eq!(Sentiment::Neutral.label(), "Neutral");
        assert_eq!(Sentiment::Negative.label(), "Negative");
    }
}
