//! Askama templates for the outgoing emails.
//!
//! One notification template and one acknowledgment template, each
//! parameterized by a [`Palette`] so dark/light is the only presentation
//! axis.

use askama::Template;
use chrono::{Datelike, Utc};

use crate::config::FirmConfig;

/// Presentation variant for the rendered emails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    /// Only the literal request value "dark" selects the dark variant;
    /// anything else (including absence) resolves to light.
    pub fn from_param(theme: Option<&str>) -> Self {
        match theme {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Dark => &DARK,
            Self::Light => &LIGHT,
        }
    }
}

/// Per-theme color set for the inline-styled markup.
pub struct Palette {
    pub page_bg: &'static str,
    pub page_fg: &'static str,
    pub card_bg: &'static str,
    pub card_shadow: &'static str,
    pub header_bg: &'static str,
    pub heading_fg: &'static str,
    pub label_fg: &'static str,
    pub quote_bg: &'static str,
    pub quote_border: &'static str,
    pub quote_fg: &'static str,
    pub message_fg: &'static str,
    pub footer_fg: &'static str,
}

pub static DARK: Palette = Palette {
    page_bg: "#222222",
    page_fg: "#f5f5f5",
    card_bg: "#2c2f36",
    card_shadow: "rgba(0, 0, 0, 0.3)",
    header_bg: "#1a1c20",
    heading_fg: "#e0e0e0",
    label_fg: "#d0d3d8",
    quote_bg: "#343a40",
    quote_border: "#555555",
    quote_fg: "#c8c8c8",
    message_fg: "#f5f5f5",
    footer_fg: "#9e9e9e",
};

pub static LIGHT: Palette = Palette {
    page_bg: "#ffffff",
    page_fg: "#333333",
    card_bg: "#f8f9fa",
    card_shadow: "rgba(0, 0, 0, 0.1)",
    header_bg: "#555555",
    heading_fg: "#e0e0e0",
    label_fg: "#555555",
    quote_bg: "#f1f3f5",
    quote_border: "#888888",
    quote_fg: "#333333",
    message_fg: "#333333",
    footer_fg: "#888888",
};

/// Contact form notification sent to the operator mailbox.
///
/// Submitted values are interpolated verbatim (no HTML escaping), matching
/// the behavior of the form this service has always fronted.
#[derive(Template)]
#[template(path = "emails/notification.html")]
struct NotificationEmail<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
    firm_name: &'a str,
    year: i32,
    palette: &'a Palette,
}

/// Auto-reply sent back to the submitter. Embeds only the name; the logo
/// swaps with the theme.
#[derive(Template)]
#[template(path = "emails/acknowledgment.html")]
struct AcknowledgmentEmail<'a> {
    name: &'a str,
    firm_name: &'a str,
    year: i32,
    palette: &'a Palette,
    logo_url: &'a str,
}

pub fn render_notification(
    theme: Theme,
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
    firm: &FirmConfig,
) -> askama::Result<String> {
    NotificationEmail {
        name,
        email,
        subject,
        message,
        firm_name: &firm.name,
        year: Utc::now().year(),
        palette: theme.palette(),
    }
    .render()
}

pub fn render_acknowledgment(theme: Theme, name: &str, firm: &FirmConfig) -> askama::Result<String> {
    let logo_url = match theme {
        Theme::Dark => &firm.logo_dark_url,
        Theme::Light => &firm.logo_light_url,
    };

    AcknowledgmentEmail {
        name,
        firm_name: &firm.name,
        year: Utc::now().year(),
        palette: theme.palette(),
        logo_url,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_param() {
        assert_eq!(Theme::from_param(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_param(Some("light")), Theme::Light);
        assert_eq!(Theme::from_param(Some("DARK")), Theme::Light);
        assert_eq!(Theme::from_param(Some("")), Theme::Light);
        assert_eq!(Theme::from_param(None), Theme::Light);
    }

    #[test]
    fn test_notification_uses_theme_palette() {
        let firm = FirmConfig::default();

        let dark =
            render_notification(Theme::Dark, "Jane", "jane@example.com", "Hi", "Hello", &firm)
                .unwrap();
        assert!(dark.contains(DARK.header_bg));
        assert!(dark.contains(DARK.page_bg));

        let light =
            render_notification(Theme::Light, "Jane", "jane@example.com", "Hi", "Hello", &firm)
                .unwrap();
        assert!(light.contains(LIGHT.header_bg));
        assert!(light.contains(LIGHT.card_bg));
        assert!(!light.contains(DARK.header_bg));
    }

    #[test]
    fn test_notification_embeds_fields_verbatim() {
        let firm = FirmConfig::default();
        let html = render_notification(
            Theme::Light,
            "Jane <strong>Doe</strong> & Co",
            "jane@example.com",
            "A & B",
            "Hello <em>there</em>",
            &firm,
        )
        .unwrap();

        assert!(html.contains("Jane <strong>Doe</strong> & Co"));
        assert!(html.contains("jane@example.com"));
        assert!(html.contains("A & B"));
        assert!(html.contains("Hello <em>there</em>"));
        assert!(html.contains("Sifrani Law contact form"));
    }

    #[test]
    fn test_acknowledgment_swaps_logo_with_theme() {
        let firm = FirmConfig::default();

        let dark = render_acknowledgment(Theme::Dark, "Jane", &firm).unwrap();
        assert!(dark.contains(&firm.logo_dark_url));

        let light = render_acknowledgment(Theme::Light, "Jane", &firm).unwrap();
        assert!(light.contains(&firm.logo_light_url));
    }

    #[test]
    fn test_acknowledgment_embeds_name_verbatim() {
        let firm = FirmConfig::default();
        let html = render_acknowledgment(Theme::Light, "Jane & Co", &firm).unwrap();

        assert!(html.contains("Dear Jane & Co"));
        assert!(html.contains("Thank you for contacting Sifrani Law"));
    }
}
