//! Theme configuration

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Theme};

/// Dark theme colors
pub struct DarkTheme;

impl DarkTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.09, 0.09, 0.11);
    pub const SURFACE: Color = Color::from_rgb(0.12, 0.12, 0.14);
    pub const SURFACE_HIGHLIGHT: Color = Color::from_rgb(0.18, 0.18, 0.22);
    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.28);
    pub const PRIMARY: Color = Color::from_rgb(0.4, 0.55, 1.0);
    pub const TEXT: Color = Color::from_rgb(0.95, 0.95, 0.95);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.55, 0.55, 0.6);
    pub const TEXT_PLACEHOLDER: Color = Color::from_rgb(0.4, 0.4, 0.45);
    pub const PRICE: Color = Color::from_rgb(0.45, 0.85, 0.55);
}

pub fn search_input(_theme: &Theme, _status: text_input::Status) -> text_input::Style {
    text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border::default(),
        icon: DarkTheme::TEXT_MUTED,
        placeholder: DarkTheme::TEXT_PLACEHOLDER,
        value: DarkTheme::TEXT,
        selection: DarkTheme::PRIMARY,
    }
}

pub fn surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(DarkTheme::SURFACE)),
        border: Border {
            color: DarkTheme::BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

pub fn window(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(DarkTheme::BACKGROUND)),
        ..Default::default()
    }
}

pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(DarkTheme::SURFACE_HIGHLIGHT)),
        border: Border::default().rounded(8),
        ..Default::default()
    }
}

pub fn action_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Disabled => DarkTheme::SURFACE_HIGHLIGHT,
        button::Status::Hovered | button::Status::Pressed => DarkTheme::PRIMARY,
        button::Status::Active => DarkTheme::SURFACE_HIGHLIGHT,
    };
    let text_color = match status {
        button::Status::Disabled => DarkTheme::TEXT_PLACEHOLDER,
        _ => DarkTheme::TEXT,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: DarkTheme::BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}
