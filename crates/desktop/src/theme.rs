//! Shared colors and text sizes for the desktop shell.

use eframe::egui::Color32;

/// Window and panel background.
pub const PALE_BLUE: Color32 = Color32::from_rgb(220, 230, 255);

/// Headings, labels and button text.
pub const DARK_BLUE: Color32 = Color32::from_rgb(0, 0, 102);

pub const HEADING_SIZE: f32 = 28.0;
pub const SUBHEADING_SIZE: f32 = 20.0;
pub const BODY_SIZE: f32 = 16.0;
pub const MENU_BUTTON_SIZE: f32 = 18.0;
