//! Settings window and toast notification

use super::App;
use crate::constants::{BACKEND_URL_ENV, TOAST_SECS};
use crate::theme;
use eframe::egui;
use egui_phosphor::regular as icons;
use std::path::PathBuf;

impl App {
    pub(crate) fn render_settings_window(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let mut open = true;
        egui::Window::new(format!("{}  Settings", icons::GEAR))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(420.0)
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-theme::SPACING_XL, theme::HEADER_HEIGHT + theme::SPACING_MD))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                // Backend
                ui.label(
                    egui::RichText::new("Backend")
                        .size(theme::FONT_LABEL)
                        .color(theme::ACCENT),
                );
                ui.add_space(2.0);
                let te = ui.add(
                    egui::TextEdit::singleline(&mut self.backend_url_str)
                        .hint_text("http://localhost:8000")
                        .desired_width(ui.available_width()),
                );
                if te.lost_focus() && self.backend_url_str.trim() != self.backend_url {
                    let url = self.backend_url_str.trim().to_string();
                    self.set_backend_url(url);
                }
                if std::env::var(BACKEND_URL_ENV).is_ok() {
                    ui.label(
                        egui::RichText::new(format!("Overridden by {} = {}", BACKEND_URL_ENV, self.backend_url))
                            .size(theme::FONT_SMALL)
                            .color(theme::STATUS_WARNING),
                    );
                }

                ui.add_space(theme::SPACING_MD);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                // Export folder
                ui.label(
                    egui::RichText::new("CSV Export Folder")
                        .size(theme::FONT_LABEL)
                        .color(theme::ACCENT),
                );
                ui.add_space(2.0);
                let path_changed = ui
                    .horizontal(|ui| {
                        let te = ui.add(
                            egui::TextEdit::singleline(&mut self.export_dir_str)
                                .desired_width(ui.available_width() - 36.0),
                        );
                        let (rect, resp) =
                            ui.allocate_exact_size(egui::vec2(28.0, 28.0), egui::Sense::click());
                        if resp.hovered() {
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                            ui.painter().rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_SURFACE);
                        }
                        ui.painter().text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            icons::FOLDER_OPEN,
                            egui::FontId::proportional(16.0),
                            theme::TEXT_SECONDARY,
                        );
                        if resp.clicked() || te.double_clicked() {
                            std::fs::create_dir_all(&self.export_dir).ok();
                            if let Some(path) = rfd::FileDialog::new()
                                .set_directory(&self.export_dir)
                                .pick_folder()
                            {
                                self.export_dir = path;
                                self.export_dir_str = self.export_dir.to_string_lossy().to_string();
                                self.save_settings();
                            }
                        }
                        te.lost_focus()
                    })
                    .inner;

                if path_changed && PathBuf::from(&self.export_dir_str) != self.export_dir {
                    self.export_dir = PathBuf::from(&self.export_dir_str);
                    self.save_settings();
                }

                ui.add_space(theme::SPACING_SM);
                if ui
                    .add(theme::button(format!("{}  Open Folder", icons::FOLDER_OPEN)))
                    .clicked()
                {
                    std::fs::create_dir_all(&self.export_dir).ok();
                    let _ = open::that(&self.export_dir);
                }
            });

        if !open {
            self.show_settings = false;
        }
    }

    /// Bottom-right toast: visible for a few seconds then fades, hover pauses it
    pub(crate) fn render_toast(&mut self, ctx: &egui::Context) {
        let Some(msg) = self.toast_message.clone() else {
            return;
        };

        let margin = theme::SPACING_XL;
        let elapsed = self.toast_start.map(|t| t.elapsed().as_secs_f32()).unwrap_or(0.0);
        let alpha = if elapsed <= TOAST_SECS {
            1.0
        } else {
            (1.0 - (elapsed - TOAST_SECS)).max(0.0)
        };

        let response = egui::Area::new(egui::Id::new("export_toast"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-margin, -margin))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.set_opacity(alpha);
                theme::modal_frame()
                    .inner_margin(egui::Margin::symmetric(14, 10))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(icons::CHECK_CIRCLE)
                                    .size(theme::FONT_HEADING)
                                    .color(theme::STATUS_SUCCESS),
                            );
                            ui.label(
                                egui::RichText::new(msg)
                                    .size(theme::FONT_LABEL)
                                    .color(theme::TEXT_SECONDARY),
                            );
                            if ui
                                .add(theme::button(icons::FOLDER_OPEN).small())
                                .on_hover_text("Open folder")
                                .clicked()
                            {
                                let _ = open::that(&self.export_dir);
                            }
                        });
                    });
            })
            .response;

        if response.hovered() {
            self.toast_start = Some(std::time::Instant::now());
        }

        if elapsed > TOAST_SECS + 1.0 {
            self.toast_message = None;
            self.toast_start = None;
        } else {
            ctx.request_repaint();
        }
    }
}
