//! Theme scope - which color theme the document renders with.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Color themes understood by the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the active theme is exposed on the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAttribute {
    /// `class="light"`
    Class,
    /// `data-theme="light"`
    DataTheme,
}

/// Static theme configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSettings {
    pub attribute: ThemeAttribute,
    pub default_theme: Theme,
    /// Follow the visitor's OS preference instead of `default_theme`
    pub enable_system: bool,
    /// Suppress CSS transitions while the theme switches
    pub disable_transition_on_change: bool,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            attribute: ThemeAttribute::Class,
            default_theme: Theme::Light,
            enable_system: false,
            disable_transition_on_change: true,
        }
    }
}

/// Capability giving rendered content access to the active theme.
pub trait ThemeScope: Send + Sync + fmt::Debug {
    /// Theme the current render uses.
    fn current_theme(&self) -> Theme;

    /// Attributes placed on the `<html>` element.
    fn root_attributes(&self) -> String;

    /// Wraps `children` in the theme scope.
    fn wrap(&self, children: &str) -> String;
}

/// Theme scope driven by `ThemeSettings`.
///
/// Rendering happens on the server, so there is no visitor preference to
/// detect; the default theme is always the current one.
#[derive(Debug, Clone, Default)]
pub struct ThemeProvider {
    settings: ThemeSettings,
}

impl ThemeProvider {
    pub fn new(settings: ThemeSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ThemeSettings {
        &self.settings
    }
}

impl ThemeScope for ThemeProvider {
    fn current_theme(&self) -> Theme {
        self.settings.default_theme
    }

    fn root_attributes(&self) -> String {
        let theme = self.current_theme();
        let selector = match self.settings.attribute {
            ThemeAttribute::Class => format!(r#"class="{theme}""#),
            ThemeAttribute::DataTheme => format!(r#"data-theme="{theme}""#),
        };
        format!(r#"{selector} style="color-scheme: {theme}""#)
    }

    fn wrap(&self, children: &str) -> String {
        format!(
            r#"<div data-scope="theme" data-theme="{theme}" data-enable-system="{system}" data-disable-transition-on-change="{transitions}">{children}</div>"#,
            theme = self.current_theme(),
            system = self.settings.enable_system,
            transitions = self.settings.disable_transition_on_change,
        )
    }
}
