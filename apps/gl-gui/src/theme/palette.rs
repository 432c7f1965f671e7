use eframe::egui::Color32;

// --- BRAND ---
pub const ACCENT: Color32 = Color32::from_rgb(0, 120, 212);
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0, 100, 192);
pub const ACCENT_DARK: Color32 = Color32::from_rgb(0, 90, 158);
pub const SUCCESS: Color32 = Color32::from_rgb(16, 124, 16);
pub const SUCCESS_HOVER: Color32 = Color32::from_rgb(13, 100, 13);
pub const HEADER_SUBTITLE: Color32 = Color32::from_gray(240);

// --- DARK MODE CONSTANTS ---
pub const DARK_BG_WINDOW: Color32 = Color32::from_rgb(28, 28, 32);
pub const DARK_BG_CARD: Color32 = Color32::from_rgb(38, 38, 43);
pub const DARK_BG_CONSOLE: Color32 = Color32::from_rgb(24, 24, 27);
pub const DARK_BG_FOOTER: Color32 = Color32::from_rgb(20, 20, 23);
pub const DARK_BORDER: Color32 = Color32::from_gray(60);
pub const DARK_TEXT_STRONG: Color32 = Color32::from_gray(235);
pub const DARK_TEXT_WEAK: Color32 = Color32::from_gray(150);
pub const DARK_LOG_ERROR: Color32 = Color32::from_rgb(255, 110, 110);
pub const DARK_LOG_SUCCESS: Color32 = Color32::from_rgb(110, 200, 110);
pub const DARK_OVERLAY_HOVER: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 85);

// --- LIGHT MODE CONSTANTS ---
pub const LIGHT_BG_WINDOW: Color32 = Color32::from_rgb(245, 245, 250);
pub const LIGHT_BG_CARD: Color32 = Color32::WHITE;
pub const LIGHT_BG_CONSOLE: Color32 = Color32::from_gray(250);
pub const LIGHT_BG_FOOTER: Color32 = Color32::from_rgb(240, 240, 245);
pub const LIGHT_BORDER: Color32 = Color32::from_gray(220);
pub const LIGHT_TEXT_STRONG: Color32 = Color32::from_gray(20);
pub const LIGHT_TEXT_WEAK: Color32 = Color32::from_gray(100);
pub const LIGHT_LOG_ERROR: Color32 = Color32::from_rgb(220, 0, 0);
pub const LIGHT_LOG_SUCCESS: Color32 = SUCCESS;
pub const LIGHT_OVERLAY_HOVER: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 15);

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_window: Color32,
    pub bg_card: Color32,
    pub bg_console: Color32,
    pub bg_footer: Color32,
    pub border: Color32,

    pub text_strong: Color32,
    pub text_weak: Color32,
    pub accent: Color32,

    pub log_error: Color32,
    pub log_success: Color32,

    // Dropdown items
    pub overlay_hover: Color32,
}

pub fn get_colors(is_dark: bool) -> Palette {
    if is_dark {
        Palette {
            bg_window: DARK_BG_WINDOW,
            bg_card: DARK_BG_CARD,
            bg_console: DARK_BG_CONSOLE,
            bg_footer: DARK_BG_FOOTER,
            border: DARK_BORDER,
            text_strong: DARK_TEXT_STRONG,
            text_weak: DARK_TEXT_WEAK,
            accent: ACCENT,
            log_error: DARK_LOG_ERROR,
            log_success: DARK_LOG_SUCCESS,
            overlay_hover: DARK_OVERLAY_HOVER,
        }
    } else {
        Palette {
            bg_window: LIGHT_BG_WINDOW,
            bg_card: LIGHT_BG_CARD,
            bg_console: LIGHT_BG_CONSOLE,
            bg_footer: LIGHT_BG_FOOTER,
            border: LIGHT_BORDER,
            text_strong: LIGHT_TEXT_STRONG,
            text_weak: LIGHT_TEXT_WEAK,
            accent: ACCENT,
            log_error: LIGHT_LOG_ERROR,
            log_success: LIGHT_LOG_SUCCESS,
            overlay_hover: LIGHT_OVERLAY_HOVER,
        }
    }
}
