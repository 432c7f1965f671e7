use crate::{panels, theme};
use eframe::egui;
use gl_core::Environment;
use gl_factory::orchestrator::{Notice, Orchestrator, ShutdownDecision};

pub struct GovApp {
    pub orchestrator: Orchestrator,
    pub theme_preference: theme::Theme,

    // Picker
    pub selected_env: usize,

    // Dialogs
    pub notice: Option<Notice>,
    pub confirm_exit: bool,
    pub exit_confirmed: bool,
}

impl GovApp {
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator,
            theme_preference: theme::Theme::default(),
            selected_env: Environment::DEFAULT.index(),
            notice: None,
            confirm_exit: false,
            exit_confirmed: false,
        }
    }

    pub fn start(&mut self) {
        // Rejections come back as a notice.
        if let Err(e) = self.orchestrator.start(self.selected_env) {
            tracing::warn!(error = %e, "run not started");
        }
    }

    pub fn open_model(&mut self) {
        let _ = self.orchestrator.open_result();
    }

    pub fn exit_now(&mut self, ctx: &egui::Context) {
        self.confirm_exit = false;
        self.exit_confirmed = true;
        self.orchestrator.force_shutdown();
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.viewport().close_requested()) || self.exit_confirmed {
            return;
        }
        match self.orchestrator.request_close() {
            ShutdownDecision::Proceed => {}
            ShutdownDecision::NeedsConfirmation => {
                ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
                self.confirm_exit = true;
            }
        }
    }
}

impl eframe::App for GovApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // 1. Theme
        let is_dark = match self.theme_preference {
            theme::Theme::Dark => true,
            theme::Theme::Light => false,
            theme::Theme::System => matches!(frame.info().system_theme, Some(eframe::Theme::Dark)),
        };
        theme::apply_settings(ctx, is_dark);

        // 2. Drain background messages on this thread
        self.orchestrator.poll();
        if self.notice.is_none() {
            self.notice = self.orchestrator.take_notice();
        }
        self.handle_close_request(ctx);

        // 3. Layout: Top -> Bottom -> Central (fill)
        panels::header::show(ctx);
        panels::footer::show(self, ctx);
        let body = egui::Frame::none()
            .fill(ctx.style().visuals.panel_fill)
            .inner_margin(egui::Margin::symmetric(30.0, 20.0));
        egui::CentralPanel::default()
            .frame(body)
            .show(ctx, |ui| {
                panels::launch::show(self, ui);
                ui.add_space(12.0);
                panels::console::show(self, ui);
            });

        // 4. Modals
        panels::dialogs::show(self, ctx);

        if self.orchestrator.is_busy() {
            ctx.request_repaint();
        }
    }
}
