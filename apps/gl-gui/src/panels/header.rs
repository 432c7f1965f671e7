use crate::theme;
use eframe::egui::{self, epaint::Mesh};

const HEIGHT: f32 = 120.0;

/// Blue banner with a left-to-right gradient.
pub fn show(ctx: &egui::Context) {
    egui::TopBottomPanel::top("header")
        .exact_height(HEIGHT)
        .resizable(false)
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            ui.painter().add(horizontal_gradient(rect, theme::ACCENT, theme::ACCENT_DARK));

            let text_rect = rect.shrink2(egui::vec2(20.0, 20.0));
            ui.allocate_ui_at_rect(text_rect, |ui| {
                ui.spacing_mut().item_spacing.y = 6.0;
                ui.label(
                    egui::RichText::new("Power BI Governance & Impact Analysis")
                        .size(26.0)
                        .strong()
                        .color(egui::Color32::WHITE),
                );
                ui.label(
                    egui::RichText::new("Automated backup, impact analysis, and governance solution")
                        .size(13.0)
                        .color(theme::HEADER_SUBTITLE),
                );
            });
        });
}

fn horizontal_gradient(rect: egui::Rect, left: egui::Color32, right: egui::Color32) -> egui::Shape {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), left);
    mesh.colored_vertex(rect.right_top(), right);
    mesh.colored_vertex(rect.right_bottom(), right);
    mesh.colored_vertex(rect.left_bottom(), left);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    egui::Shape::mesh(mesh)
}
