//! Colors and styles.

use ratatui::style::{Color, Modifier, Style};

pub const PRIMARY: Color = Color::Rgb(0x7D, 0xCF, 0xFF);
pub const SECONDARY: Color = Color::Rgb(0xBB, 0x9A, 0xF7);
pub const SUCCESS: Color = Color::Rgb(0x9E, 0xCE, 0x6A);
pub const WARNING: Color = Color::Rgb(0xE0, 0xAF, 0x68);
pub const DANGER: Color = Color::Rgb(0xF7, 0x76, 0x8E);
pub const INFO: Color = Color::Rgb(0x7A, 0xA2, 0xF7);
pub const ACCENT: Color = Color::Rgb(0x73, 0xDA, 0xCA);
pub const MUTED: Color = Color::Rgb(0x56, 0x5F, 0x89);
pub const TEXT: Color = Color::Rgb(0xC0, 0xCA, 0xF5);
pub const BACKGROUND: Color = Color::Rgb(0x1A, 0x1B, 0x26);
pub const BORDER: Color = Color::Rgb(0x41, 0x48, 0x68);
pub const HIGHLIGHT: Color = Color::Rgb(0x29, 0x2E, 0x42);

pub fn banner() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn header() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn live_badge() -> Style {
    Style::default()
        .fg(BACKGROUND)
        .bg(SUCCESS)
        .add_modifier(Modifier::BOLD)
}

pub fn selected() -> Style {
    Style::default()
        .fg(SECONDARY)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

pub fn normal() -> Style {
    Style::default().fg(TEXT)
}

pub fn key() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn sub_key() -> Style {
    Style::default().fg(INFO)
}

pub fn value() -> Style {
    Style::default().fg(SUCCESS)
}

pub fn tree() -> Style {
    Style::default().fg(BORDER)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}
