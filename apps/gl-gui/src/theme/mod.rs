pub mod palette;
pub mod style;
pub mod widgets;

pub use palette::{get_colors, ACCENT, ACCENT_DARK, HEADER_SUBTITLE};
pub use style::apply_settings;
pub use widgets::{card, combo_box, marquee_bar, styled_button, ButtonVariant};

#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub enum Theme {
    Dark,
    #[default]
    Light,
    System,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "☀ Light",
            Theme::Dark => "🌙 Dark",
            Theme::System => "💻 System",
        }
    }
}
