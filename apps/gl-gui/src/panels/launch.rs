use crate::{app::GovApp, theme};
use eframe::egui;
use gl_core::Environment;

/// Environment picker, start button and the status line under it.
pub fn show(app: &mut GovApp, ui: &mut egui::Ui) {
    let controls = app.orchestrator.controls_enabled();

    // CARD: ENVIRONMENT
    theme::card(ui, |ui| {
        ui.spacing_mut().item_spacing.y = 8.0;
        ui.label(egui::RichText::new("Power BI Environment:").strong());

        let selected = Environment::from_index(app.selected_env).label();
        ui.add_enabled_ui(controls, |ui| {
            theme::combo_box(ui, "environment_picker", selected, 320.0, |ui| {
                for env in Environment::ALL {
                    ui.selectable_value(&mut app.selected_env, env.index(), env.label());
                }
            });
        });
    });

    ui.add_space(12.0);

    // START
    let start_size = egui::vec2(ui.available_width(), 55.0);
    let clicked = ui
        .add_enabled_ui(controls, |ui| {
            theme::styled_button(
                ui,
                "▶  START GOVERNANCE PROCESS",
                theme::ButtonVariant::Primary,
                start_size,
                16.0,
            )
            .clicked()
        })
        .inner;
    if clicked {
        app.start();
    }

    // STATUS + PROGRESS
    ui.add_space(6.0);
    let colors = theme::get_colors(ui.visuals().dark_mode);
    ui.label(
        egui::RichText::new(app.orchestrator.status())
            .small()
            .color(colors.text_weak),
    );
    if app.orchestrator.progress_visible() {
        theme::marquee_bar(ui, 8.0);
    } else {
        ui.add_space(8.0);
    }
}
