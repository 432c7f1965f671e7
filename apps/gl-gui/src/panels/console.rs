use crate::{app::GovApp, theme};
use eframe::egui;
use gl_core::{LogEntry, Severity};

const LOG_FONT_SIZE: f32 = 12.0;

pub fn show(app: &mut GovApp, ui: &mut egui::Ui) {
    let colors = theme::get_colors(ui.visuals().dark_mode);

    theme::card(ui, |ui| {
        egui::Frame::none()
            .fill(colors.bg_console)
            .rounding(4.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                log_rows(ui, app.orchestrator.log().entries(), &colors);
            });
    });
}

/// Lays out only the rows inside the viewport. Returns how many were drawn.
fn log_rows(ui: &mut egui::Ui, entries: &[LogEntry], colors: &theme::palette::Palette) -> usize {
    let font = egui::FontId::monospace(LOG_FONT_SIZE);
    let row_height = ui.fonts(|f| f.row_height(&font));
    ui.spacing_mut().item_spacing.y = 2.0;

    egui::ScrollArea::vertical()
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .show_rows(ui, row_height, entries.len(), |ui, rows| {
            let drawn = rows.len();
            for entry in &entries[rows] {
                let color = match entry.severity {
                    Severity::Error => colors.log_error,
                    Severity::Success => colors.log_success,
                    Severity::Info => colors.text_strong,
                };
                // One row per entry keeps the fixed row height honest.
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(entry.to_string())
                            .font(font.clone())
                            .color(color),
                    )
                    .truncate(true),
                );
            }
            drawn
        })
        .inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn entries(count: usize) -> Vec<LogEntry> {
        (0..count)
            .map(|i| LogEntry {
                timestamp: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
                text: format!("line {i}"),
                severity: Severity::Info,
            })
            .collect()
    }

    fn drawn_rows(count: usize) -> usize {
        let ctx = egui::Context::default();
        let log = entries(count);
        let mut drawn = 0;
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(840.0, 250.0),
            )),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                drawn = log_rows(ui, &log, &theme::get_colors(false));
            });
        });
        drawn
    }

    #[test]
    fn long_logs_only_lay_out_visible_rows() {
        let drawn = drawn_rows(10_000);
        assert!(drawn > 0);
        assert!(drawn < 100, "laid out {drawn} rows");
    }

    #[test]
    fn short_logs_are_drawn_in_full() {
        assert_eq!(drawn_rows(3), 3);
    }
}
