//! Centralized theme constants for the dashboard
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_INPUT: Color32 = Color32::from_rgb(0x14, 0x14, 0x18); // input field background
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BG_HOVER: Color32 = Color32::from_rgb(0x14, 0x1a, 0x2e); // subtle blue hover

// =============================================================================
// COLORS - Accents (blue -> purple)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6); // blue-500
pub const ACCENT_ALT: Color32 = Color32::from_rgb(0xa8, 0x55, 0xf7); // purple-500
pub const ACCENT_EXPORT: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e); // green-500

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99); // emerald-400
pub const STATUS_WARNING: Color32 = Color32::from_rgb(0xfb, 0xbf, 0x24); // amber-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700
pub const BTN_ACCENT: Color32 = Color32::from_rgb(0x25, 0x63, 0xeb); // blue-600
pub const BTN_DISABLED: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800

/// (bg ~8% alpha, text) pair for badges and icon tiles
pub fn tinted(color: Color32) -> (Color32, Color32) {
    (
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 20),
        color,
    )
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_DISPLAY: f32 = 28.0;
pub const FONT_TITLE: f32 = 20.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const HEADER_HEIGHT: f32 = 76.0;
pub const CONTENT_MAX_WIDTH: f32 = 1200.0;
pub const LOGO_SIZE: f32 = 40.0;
pub const ICON_TILE_SIZE: f32 = 44.0;
pub const BADGE_HEIGHT: f32 = 20.0;
pub const BUTTON_HEIGHT_LARGE: f32 = 36.0;
pub const TABLE_ROW_HEIGHT: f32 = 52.0;
pub const TABLE_HEADER_HEIGHT: f32 = 32.0;
pub const STAT_CARD_HEIGHT: f32 = 72.0;
pub const CHART_MAX_HEIGHT: f32 = 360.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;
pub const RADIUS_CARD: f32 = 12.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;
pub const SPACING_XXL: f32 = 24.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================

/// One widget state: fills, border stroke, text stroke
fn widget_state(
    bg: Color32,
    weak_bg: Color32,
    border: egui::Stroke,
    fg: egui::Stroke,
    expansion: f32,
) -> egui::style::WidgetVisuals {
    egui::style::WidgetVisuals {
        bg_fill: bg,
        weak_bg_fill: weak_bg,
        bg_stroke: border,
        fg_stroke: fg,
        corner_radius: RADIUS_DEFAULT.into(),
        expansion,
    }
}

pub fn apply_visuals(ctx: &egui::Context) {
    let thin = |c: Color32| egui::Stroke::new(STROKE_DEFAULT, c);
    let pressed = Color32::from_rgb(0x2e, 0x2e, 0x33);

    let widgets = egui::style::Widgets {
        noninteractive: widget_state(BG_ELEVATED, BG_SURFACE, thin(BORDER_SUBTLE), thin(TEXT_PRIMARY), 0.0),
        inactive: widget_state(BG_INPUT, BG_ELEVATED, thin(BORDER_DEFAULT), thin(TEXT_SECONDARY), 0.0),
        hovered: widget_state(
            BG_HOVER,
            Color32::from_rgb(0x30, 0x30, 0x35),
            thin(ACCENT),
            egui::Stroke::new(STROKE_MEDIUM, TEXT_PRIMARY),
            0.0,
        ),
        active: widget_state(pressed, pressed, thin(ACCENT), thin(TEXT_PRIMARY), -1.0),
        open: widget_state(BG_SURFACE, BG_ELEVATED, thin(BORDER_SUBTLE), thin(TEXT_PRIMARY), 0.0),
    };

    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_BASE;
    visuals.window_fill = Color32::from_rgb(0x1a, 0x1a, 0x1e);
    visuals.extreme_bg_color = BG_INPUT;
    visuals.faint_bg_color = BG_ELEVATED;
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = Color32::from_rgb(0x1e, 0x3a, 0x8a); // blue-900
    visuals.selection.stroke = thin(ACCENT);
    visuals.widgets = widgets;
    visuals.striped = false;
    visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);
    visuals.popup_shadow = egui::epaint::Shadow {
        offset: [0, 4],
        blur: 12,
        spread: 0,
        color: Color32::from_black_alpha(80),
    };
    visuals.window_stroke = thin(Color32::from_rgb(0x2a, 0x2a, 0x2e));
    visuals.window_corner_radius = egui::CornerRadius::same(RADIUS_CARD as u8);
    visuals.menu_corner_radius = egui::CornerRadius::same(RADIUS_LARGE as u8);
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, 6.0);
        style.spacing.button_padding = egui::vec2(SPACING_LG, 6.0);
        style.spacing.interact_size.y = 28.0;
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Card frame
// =============================================================================
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_CARD)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

// =============================================================================
// HELPER - Header bar frame
// =============================================================================
pub fn header_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .inner_margin(egui::Margin::symmetric(SPACING_XXL as i8, SPACING_LG as i8))
}

// =============================================================================
// HELPER - Modal frame
// =============================================================================
pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgb(0x12, 0x12, 0x14))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_XL)
}

// =============================================================================
// HELPER - Error banner frame
// =============================================================================
pub fn error_frame() -> egui::Frame {
    let (bg, fg) = tinted(STATUS_ERROR);
    egui::Frame::new()
        .fill(bg)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, fg.gamma_multiply(0.4)))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Default gray button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Accent blue button (primary action: Analyze)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_PRIMARY).strong())
        .fill(BTN_ACCENT)
        .corner_radius(RADIUS_LARGE)
}

/// Fill and rect for a custom-painted button given its interaction state
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (lighten(base_fill, 0.06), rect.shrink(1.5))
    } else if response.hovered() {
        (lighten(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgba_unmultiplied(r, g, b, c.a())
}
