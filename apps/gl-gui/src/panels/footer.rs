use crate::{app::GovApp, theme};
use eframe::egui;

pub fn show(app: &mut GovApp, ctx: &egui::Context) {
    let colors = theme::get_colors(ctx.style().visuals.dark_mode);
    let panel_frame = egui::Frame::none()
        .fill(colors.bg_footer)
        .inner_margin(egui::Margin::symmetric(30.0, 10.0));

    egui::TopBottomPanel::bottom("footer")
        .exact_height(60.0)
        .resizable(false)
        .frame(panel_frame)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                theme::combo_box(ui, "theme_select", app.theme_preference.label(), 110.0, |ui| {
                    for choice in [theme::Theme::Light, theme::Theme::Dark, theme::Theme::System] {
                        ui.selectable_value(&mut app.theme_preference, choice, choice.label());
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let enabled = app.orchestrator.open_enabled();
                    let clicked = ui
                        .add_enabled_ui(enabled, |ui| {
                            theme::styled_button(
                                ui,
                                "📊  Open Power BI Governance Model",
                                theme::ButtonVariant::Success,
                                egui::vec2(300.0, 40.0),
                                14.0,
                            )
                            .clicked()
                        })
                        .inner;
                    if clicked {
                        app.open_model();
                    }
                });
            });
        });
}
