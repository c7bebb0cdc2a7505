use crate::risk::{DisplayToken, TokenColor};
use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }

    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("NO_COLOR").ok().as_deref(),
            env::var("CLICOLOR").ok().as_deref(),
            env::var("CLICOLOR_FORCE").ok().as_deref(),
        )
    }

    /// Pure resolution of the colour env vars (no-color.org, CLICOLOR).
    pub fn from_vars(
        no_color: Option<&str>,
        clicolor: Option<&str>,
        clicolor_force: Option<&str>,
    ) -> Self {
        let mut config = Self::default();

        if no_color.is_some() {
            config.color = ColorMode::Never;
        }
        if clicolor == Some("0") {
            config.color = ColorMode::Never;
        }
        if clicolor_force == Some("1") {
            config.color = ColorMode::Always;
        }

        config
    }

    /// Apply the mode to the `colored` crate globally.
    pub fn apply(&self) -> bool {
        let enabled = self.color.should_use_color();
        colored::control::set_override(enabled);
        enabled
    }
}

/// Render a token label, coloured when enabled.
pub fn paint_token(token: DisplayToken, use_color: bool) -> String {
    let label = token.label();
    if !use_color {
        return label.to_string();
    }
    match token.color() {
        TokenColor::Green => label.green().to_string(),
        TokenColor::Yellow => label.yellow().to_string(),
        TokenColor::Red => label.red().bold().to_string(),
        TokenColor::Magenta => label.magenta().bold().to_string(),
        TokenColor::Grey => label.dimmed().to_string(),
    }
}
