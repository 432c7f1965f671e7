use super::palette::{self, Palette};
use eframe::egui;

// ============================================================================
// BUTTONS
// ============================================================================

#[derive(PartialEq, Clone, Copy)]
pub enum ButtonVariant {
    Primary,
    Success,
    Secondary,
}

impl ButtonVariant {
    /// (fill, hover fill, text)
    fn get_colors(&self, colors: &Palette) -> (egui::Color32, egui::Color32, egui::Color32) {
        match self {
            ButtonVariant::Primary => (colors.accent, palette::ACCENT_HOVER, egui::Color32::WHITE),
            ButtonVariant::Success => (
                palette::SUCCESS,
                palette::SUCCESS_HOVER,
                egui::Color32::WHITE,
            ),
            ButtonVariant::Secondary => (colors.bg_footer, colors.border, colors.text_strong),
        }
    }
}

/// Flat, borderless button that darkens on hover.
pub fn styled_button(
    ui: &mut egui::Ui,
    text: &str,
    variant: ButtonVariant,
    min_size: egui::Vec2,
    font_size: f32,
) -> egui::Response {
    let colors = palette::get_colors(ui.visuals().dark_mode);
    let (fill, hover, fg) = variant.get_colors(&colors);

    ui.scope(|ui| {
        let w = &mut ui.visuals_mut().widgets;
        for state in [&mut w.inactive, &mut w.hovered, &mut w.active] {
            state.rounding = 6.0.into();
            state.bg_stroke = egui::Stroke::NONE;
            state.expansion = 0.0;
        }
        w.inactive.weak_bg_fill = fill;
        w.hovered.weak_bg_fill = hover;
        w.active.weak_bg_fill = hover;

        ui.add(
            egui::Button::new(egui::RichText::new(text).color(fg).strong().size(font_size))
                .min_size(min_size),
        )
        .on_hover_cursor(egui::CursorIcon::PointingHand)
    })
    .inner
}

// ============================================================================
// CARD COMPONENT
// ============================================================================

/// White rounded panel with a thin border.
pub fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    let colors = palette::get_colors(ui.visuals().dark_mode);

    egui::Frame::none()
        .fill(colors.bg_card)
        .rounding(8.0)
        .stroke(egui::Stroke::new(1.0, colors.border))
        .inner_margin(egui::Margin::symmetric(20.0, 16.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

// ============================================================================
// COMBO BOX
// ============================================================================

pub fn combo_box(
    ui: &mut egui::Ui,
    id: &str,
    selected_text: &str,
    width: f32,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    let colors = palette::get_colors(ui.visuals().dark_mode);

    ui.scope(|ui| {
        ui.spacing_mut().button_padding = egui::vec2(10.0, 7.0);
        let v = ui.visuals_mut();

        v.widgets.inactive.rounding = 4.0.into();
        v.widgets.inactive.weak_bg_fill = colors.bg_card;
        v.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, colors.border);
        v.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, colors.text_strong);

        v.widgets.hovered = v.widgets.inactive;
        v.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, colors.accent);

        v.widgets.open = v.widgets.inactive;
        v.widgets.open.bg_stroke = egui::Stroke::new(1.5, colors.accent);

        egui::ComboBox::from_id_source(id)
            .selected_text(selected_text)
            .width(width)
            .show_ui(ui, |ui| {
                ui.spacing_mut().button_padding = egui::vec2(10.0, 8.0);

                let lv = ui.visuals_mut();
                lv.widgets.active.rounding = 4.0.into();
                lv.widgets.active.weak_bg_fill = colors.accent;
                lv.widgets.active.bg_fill = colors.accent;
                lv.widgets.active.fg_stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);

                lv.widgets.hovered.rounding = 4.0.into();
                lv.widgets.hovered.weak_bg_fill = colors.overlay_hover;
                lv.widgets.hovered.bg_stroke = egui::Stroke::NONE;
                lv.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, colors.text_strong);

                lv.widgets.inactive.weak_bg_fill = egui::Color32::TRANSPARENT;
                lv.widgets.inactive.bg_stroke = egui::Stroke::NONE;
                lv.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, colors.text_strong);

                add_contents(ui);
            });
    });
}

// ============================================================================
// MARQUEE
// ============================================================================

/// Indeterminate progress strip: a block sliding left to right forever.
pub fn marquee_bar(ui: &mut egui::Ui, height: f32) {
    let colors = palette::get_colors(ui.visuals().dark_mode);
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), height), egui::Sense::hover());
    let rounding = height / 2.0;

    ui.painter().rect_filled(rect, rounding, colors.border);

    let block = rect.width() * 0.25;
    let period = 1.6;
    let phase = (ui.input(|i| i.time) % period) as f32 / period as f32;
    let left = rect.left() - block + (rect.width() + block) * phase;
    let fill = egui::Rect::from_min_max(
        egui::pos2(left.max(rect.left()), rect.top()),
        egui::pos2((left + block).min(rect.right()), rect.bottom()),
    );
    if fill.width() > 0.0 {
        ui.painter().rect_filled(fill, rounding, colors.accent);
    }
}
