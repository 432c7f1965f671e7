#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use gl_factory::{extractor::Bundle, orchestrator::Orchestrator, LauncherConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;
mod panels;
mod theme;

const TITLE: &str = "Power BI Governance Solution";

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gl_gui=info,gl_factory=info,gl::console=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = LauncherConfig::from_env();
    tracing::info!(base_dir = %config.base_dir().display(), "starting launcher window");
    let orchestrator = Orchestrator::new(config, Bundle::embedded());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_resizable(false)
            .with_maximize_button(false)
            .with_title(TITLE),
        centered: true,
        ..Default::default()
    };
    eframe::run_native(
        TITLE,
        options,
        Box::new(|_cc| Box::new(app::GovApp::new(orchestrator))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to open the launcher window: {e}"))
}
