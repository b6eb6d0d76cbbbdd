//! View rendering (header, search form, stat cards, charts, video table)

use super::export::csv_path;
use super::App;
use crate::constants::APP_VERSION;
use crate::theme;
use crate::types::{AnalysisResult, ResultCount};
use crate::ui::components::{
    format_count, format_percent, icon_button_tile, icon_tile, mention_badge, sentiment_badge,
};
use crate::utils;
use eframe::egui;
use egui_phosphor::regular as icons;

impl App {
    pub(crate) fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .exact_height(theme::HEADER_HEIGHT)
            .show_separator_line(false)
            .frame(theme::header_frame())
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    if self.logo_texture.is_none() {
                        if let Some((pixels, w, h)) = utils::rasterize_logo(theme::LOGO_SIZE as u32 * 2) {
                            self.logo_texture = Some(ctx.load_texture(
                                "logo",
                                egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                                egui::TextureOptions::LINEAR,
                            ));
                        }
                    }
                    if let Some(texture) = &self.logo_texture {
                        ui.image(egui::load::SizedTexture::new(
                            texture.id(),
                            egui::vec2(theme::LOGO_SIZE, theme::LOGO_SIZE),
                        ));
                    }
                    ui.add_space(theme::SPACING_MD);
                    ui.vertical(|ui| {
                        ui.add_space(theme::SPACING_SM);
                        ui.label(
                            egui::RichText::new("YouTube Share of Voice Analysis")
                                .size(theme::FONT_TITLE)
                                .strong()
                                .color(theme::TEXT_PRIMARY),
                        );
                        ui.label(
                            egui::RichText::new("Analyze brand mentions and sentiment across YouTube content")
                                .size(theme::FONT_LABEL)
                                .color(theme::TEXT_MUTED),
                        );
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let gear = ui
                            .add(theme::button(icons::GEAR).min_size(egui::vec2(32.0, 32.0)))
                            .on_hover_text("Settings");
                        if gear.clicked() {
                            self.show_settings = !self.show_settings;
                        }
                        ui.label(
                            egui::RichText::new(format!("v{}", APP_VERSION))
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_DIM),
                        );
                    });
                });
            });
    }

    pub(crate) fn render_search_card(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let loading = self.is_loading();
        let mut submit = false;

        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_top(|ui| {
                let controls_w = 180.0 + 140.0 + theme::SPACING_XL * 2.0;
                let query_w = (ui.available_width() - controls_w).max(200.0);

                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new("Search Query")
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    );
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.query)
                            .hint_text("Enter search terms (e.g., ceiling fans, atomberg)")
                            .desired_width(query_w)
                            .margin(egui::Margin::symmetric(10, 8)),
                    );
                    if self.focus_query {
                        self.focus_query = false;
                        response.request_focus();
                    }
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit = true;
                    }
                });

                ui.add_space(theme::SPACING_XL);
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new("Number of Results")
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    );
                    egui::ComboBox::from_id_salt("result_count")
                        .width(180.0)
                        .selected_text(self.result_count.label())
                        .show_ui(ui, |ui| {
                            for count in ResultCount::ALL {
                                ui.selectable_value(&mut self.result_count, count, count.label());
                            }
                        });
                });

                ui.add_space(theme::SPACING_XL);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(" ").size(theme::FONT_LABEL));
                    let size = egui::vec2(140.0, theme::BUTTON_HEIGHT_LARGE);
                    if loading {
                        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
                        ui.painter()
                            .rect_filled(rect, theme::RADIUS_LARGE, theme::BTN_DISABLED);
                        ui.put(rect, egui::Spinner::new().size(18.0).color(theme::TEXT_PRIMARY));
                    } else {
                        let clicked = ui
                            .add(
                                theme::button_accent(format!("{}  Analyze", icons::MAGNIFYING_GLASS))
                                    .min_size(size),
                            )
                            .clicked();
                        submit |= clicked;
                    }
                });
            });

            if let Some(message) = self.current_error() {
                ui.add_space(theme::SPACING_LG);
                theme::error_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(icons::WARNING_CIRCLE)
                                .size(theme::FONT_HEADING)
                                .color(theme::STATUS_ERROR),
                        );
                        ui.label(
                            egui::RichText::new(message)
                                .size(theme::FONT_BODY)
                                .color(theme::STATUS_ERROR),
                        );
                    });
                });
            }
        });

        if submit && !loading {
            self.start_analysis(ctx);
        }
    }

    pub(crate) fn render_results(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let Some(result) = self.result.take() else {
            self.render_empty_state(ui);
            return;
        };

        self.render_stat_cards(ui, ctx, &result);
        ui.add_space(theme::SPACING_XXL);
        self.render_charts(ui);
        ui.add_space(theme::SPACING_XXL);
        render_video_table(ui, &result);

        self.result = Some(result);
    }

    fn render_empty_state(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.label(
                egui::RichText::new(icons::CHART_BAR)
                    .size(48.0)
                    .color(theme::TEXT_DIM),
            );
            ui.add_space(theme::SPACING_MD);
            ui.label(
                egui::RichText::new("Run an analysis to see share of voice and sentiment")
                    .size(theme::FONT_HEADING)
                    .color(theme::TEXT_MUTED),
            );
        });
    }

    fn render_stat_cards(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, result: &AnalysisResult) {
        let exporting = self.is_exporting();
        let completed_at = self
            .analysis
            .lock()
            .unwrap()
            .completed_at
            .map(|t| t.format("%H:%M:%S").to_string());
        let mut download = false;

        ui.columns(3, |cols| {
            stat_card(&mut cols[0], "Total Results", |ui| {
                ui.label(
                    egui::RichText::new(result.total_results.to_string())
                        .size(theme::FONT_DISPLAY)
                        .strong()
                        .color(theme::ACCENT),
                );
            }, |ui| {
                icon_tile(ui, icons::CHART_BAR, theme::ACCENT);
            });

            stat_card(&mut cols[1], "Share of Voice", |ui| {
                ui.label(
                    egui::RichText::new(format_percent(result.share_of_voice))
                        .size(theme::FONT_DISPLAY)
                        .strong()
                        .color(theme::ACCENT_ALT),
                );
            }, |ui| {
                icon_tile(ui, icons::CHART_PIE, theme::ACCENT_ALT);
            });

            stat_card(&mut cols[2], "Query", |ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(&result.query)
                            .size(theme::FONT_HEADING)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    )
                    .truncate(),
                );
                if let Some(time) = &completed_at {
                    ui.label(
                        egui::RichText::new(format!("Analyzed at {}", time))
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                    );
                }
            }, |ui| {
                let resp = icon_button_tile(ui, icons::DOWNLOAD_SIMPLE, theme::ACCENT_EXPORT, !exporting)
                    .on_hover_text("Download CSV");
                if resp.clicked() {
                    download = true;
                }
            });
        });

        if download {
            self.download_csv(ctx, csv_path(Some(result)));
        }
    }

    fn render_charts(&self, ui: &mut egui::Ui) {
        ui.columns(2, |cols| {
            chart_card(&mut cols[0], "Share of Voice Distribution", self.charts.pie.as_ref());
            chart_card(&mut cols[1], "Sentiment Analysis by Channel", self.charts.bar.as_ref());
        });
    }
}

/// Card with a caption, a value area on the left and a tile on the right
fn stat_card(
    ui: &mut egui::Ui,
    caption: &str,
    value: impl FnOnce(&mut egui::Ui),
    tile: impl FnOnce(&mut egui::Ui),
) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.set_min_height(theme::STAT_CARD_HEIGHT);
        ui.horizontal(|ui| {
            let tile_w = theme::ICON_TILE_SIZE + theme::SPACING_MD;
            ui.allocate_ui(egui::vec2(ui.available_width() - tile_w, theme::STAT_CARD_HEIGHT), |ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(caption)
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    );
                    value(ui);
                });
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), tile);
        });
    });
}

fn chart_card(ui: &mut egui::Ui, title: &str, texture: Option<&egui::TextureHandle>) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new(title)
                .size(theme::FONT_HEADING)
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
        ui.add_space(theme::SPACING_LG);
        ui.vertical_centered(|ui| match texture {
            Some(texture) => {
                let [w, h] = texture.size();
                let aspect = h as f32 / w.max(1) as f32;
                let mut width = ui.available_width().min(w as f32);
                if width * aspect > theme::CHART_MAX_HEIGHT {
                    width = theme::CHART_MAX_HEIGHT / aspect;
                }
                ui.add(
                    egui::Image::new(egui::load::SizedTexture::new(
                        texture.id(),
                        egui::vec2(width, width * aspect),
                    ))
                    .corner_radius(theme::RADIUS_LARGE),
                );
            }
            None => {
                ui.add_space(theme::SPACING_XXL);
                ui.label(
                    egui::RichText::new(format!("{}  Chart unavailable", icons::IMAGE_BROKEN))
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_DIM),
                );
                ui.add_space(theme::SPACING_XXL);
            }
        });
    });
}

fn render_video_table(ui: &mut egui::Ui, result: &AnalysisResult) {
    use egui_extras::{Column, TableBuilder};

    theme::card_frame()
        .inner_margin(egui::Margin::same(0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            egui::Frame::new()
                .inner_margin(egui::Margin::symmetric(theme::SPACING_XXL as i8, theme::SPACING_XL as i8))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("Video Analysis Results")
                            .size(theme::FONT_HEADING)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                });
            ui.separator();

            if result.videos.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(theme::SPACING_XXL);
                    ui.label(
                        egui::RichText::new("No videos returned for this query")
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_MUTED),
                    );
                    ui.add_space(theme::SPACING_XXL);
                });
                return;
            }

            let available_width = ui.available_width() - theme::SPACING_XXL * 2.0;
            let part = available_width / 10.0;

            egui::Frame::new()
                .inner_margin(egui::Margin::symmetric(theme::SPACING_XL as i8, theme::SPACING_SM as i8))
                .show(ui, |ui| {
                    TableBuilder::new(ui)
                        .striped(false)
                        .resizable(false)
                        .vscroll(false)
                        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                        .column(Column::exact(part * 3.5).clip(true)) // Video details
                        .column(Column::exact(part * 2.0).clip(true)) // Channel
                        .column(Column::exact(part * 1.8)) // Metrics
                        .column(Column::exact(part * 1.2)) // Brand mention
                        .column(Column::remainder()) // Sentiment
                        .header(theme::TABLE_HEADER_HEIGHT, |mut header| {
                            for name in ["VIDEO DETAILS", "CHANNEL", "METRICS", "BRAND MENTION", "SENTIMENT"] {
                                header.col(|ui| {
                                    ui.label(
                                        egui::RichText::new(name)
                                            .size(theme::FONT_SMALL)
                                            .strong()
                                            .color(theme::TEXT_DIM),
                                    );
                                });
                            }
                        })
                        .body(|body| {
                            body.rows(theme::TABLE_ROW_HEIGHT, result.videos.len(), |mut row| {
                                let video = &result.videos[row.index()];
                                row.col(|ui| {
                                    ui.add(
                                        egui::Label::new(
                                            egui::RichText::new(&video.title)
                                                .size(theme::FONT_LABEL)
                                                .strong()
                                                .color(theme::TEXT_PRIMARY),
                                        )
                                        .truncate(),
                                    )
                                    .on_hover_text(video.title.as_str());
                                });
                                row.col(|ui| {
                                    ui.add(
                                        egui::Label::new(
                                            egui::RichText::new(&video.channel)
                                                .size(theme::FONT_LABEL)
                                                .color(theme::TEXT_SECONDARY),
                                        )
                                        .truncate(),
                                    );
                                });
                                row.col(|ui| {
                                    ui.label(
                                        egui::RichText::new(format!(
                                            "{} {}   {} {}",
                                            icons::EYE,
                                            format_count(video.views),
                                            icons::THUMBS_UP,
                                            format_count(video.likes)
                                        ))
                                        .size(theme::FONT_LABEL)
                                        .color(theme::TEXT_MUTED),
                                    );
                                });
                                row.col(|ui| {
                                    mention_badge(ui, video.mentions_brand);
                                });
                                row.col(|ui| {
                                    ui.vertical(|ui| {
                                        ui.add_space(theme::SPACING_SM);
                                        sentiment_badge(ui, video.sentiment);
                                        ui.label(
                                            egui::RichText::new(format!("Score: {:.3}", video.sentiment))
                                                .size(theme::FONT_SMALL)
                                                .color(theme::TEXT_DIM),
                                        );
                                    });
                                });
                            });
                        });
                });
        });
}
