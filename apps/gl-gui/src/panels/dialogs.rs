use crate::{app::GovApp, theme};
use eframe::egui;
use gl_factory::orchestrator::NoticeLevel;

pub fn show(app: &mut GovApp, ctx: &egui::Context) {
    if app.confirm_exit {
        confirm_exit(app, ctx);
    } else if app.notice.is_some() {
        notice(app, ctx);
    }
}

fn notice(app: &mut GovApp, ctx: &egui::Context) {
    let Some(current) = &app.notice else {
        return;
    };
    let icon = match current.level() {
        NoticeLevel::Info => "ℹ",
        NoticeLevel::Warning => "⚠",
        NoticeLevel::Error => "❌",
    };
    let title = current.title();
    let message = current.message();

    let mut dismissed = false;
    modal(ctx, title, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(icon).size(24.0));
            ui.label(message);
        });
        ui.add_space(8.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if theme::styled_button(ui, "OK", theme::ButtonVariant::Primary, egui::vec2(80.0, 30.0), 14.0)
                .clicked()
            {
                dismissed = true;
            }
        });
    });

    if dismissed {
        app.notice = None;
    }
}

fn confirm_exit(app: &mut GovApp, ctx: &egui::Context) {
    let mut answer = None;
    modal(ctx, "Confirm Exit", |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("⚠").size(24.0));
            ui.label("A process is still running. Are you sure you want to exit?");
        });
        ui.add_space(8.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let size = egui::vec2(80.0, 30.0);
            if theme::styled_button(ui, "No", theme::ButtonVariant::Secondary, size, 14.0).clicked() {
                answer = Some(false);
            }
            if theme::styled_button(ui, "Yes", theme::ButtonVariant::Primary, size, 14.0).clicked() {
                answer = Some(true);
            }
        });
    });

    match answer {
        Some(true) => app.exit_now(ctx),
        Some(false) => app.confirm_exit = false,
        None => {}
    }
}

/// Centered, fixed window. Drawn after every panel so it stays on top.
fn modal(ctx: &egui::Context, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .min_width(360.0)
        .show(ctx, add_contents);
}
