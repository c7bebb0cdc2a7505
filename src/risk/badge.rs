//! Risk level to display token mapping.
//!
//! This is the one lookup table every view uses. A missing rating maps to
//! [`DisplayToken::RiskUnknown`], never to the low-risk token.

use crate::core::RiskRating;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DisplayToken {
    #[serde(rename = "risk-low")]
    RiskLow,
    #[serde(rename = "risk-medium")]
    RiskMedium,
    #[serde(rename = "risk-high")]
    RiskHigh,
    #[serde(rename = "risk-critical")]
    RiskCritical,
    #[serde(rename = "risk-unknown")]
    RiskUnknown,
}

/// Terminal colour for a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenColor {
    Green,
    Yellow,
    Red,
    Magenta,
    Grey,
}

struct TokenStyle {
    token: DisplayToken,
    class: &'static str,
    label: &'static str,
    color: TokenColor,
}

const UNKNOWN_STYLE: TokenStyle = TokenStyle {
    token: DisplayToken::RiskUnknown,
    class: "risk-unknown",
    label: "UNCLASSIFIED",
    color: TokenColor::Grey,
};

/// Indexed by `RiskRating as usize`.
const RATING_STYLES: [TokenStyle; 4] = [
    TokenStyle {
        token: DisplayToken::RiskLow,
        class: "risk-low",
        label: "LOW",
        color: TokenColor::Green,
    },
    TokenStyle {
        token: DisplayToken::RiskMedium,
        class: "risk-medium",
        label: "MEDIUM",
        color: TokenColor::Yellow,
    },
    TokenStyle {
        token: DisplayToken::RiskHigh,
        class: "risk-high",
        label: "HIGH",
        color: TokenColor::Red,
    },
    TokenStyle {
        token: DisplayToken::RiskCritical,
        class: "risk-critical",
        label: "CRITICAL",
        color: TokenColor::Magenta,
    },
];

fn style_for(level: Option<RiskRating>) -> &'static TokenStyle {
    match level {
        Some(rating) => &RATING_STYLES[rating as usize],
        None => &UNKNOWN_STYLE,
    }
}

fn style_for_token(token: DisplayToken) -> &'static TokenStyle {
    RATING_STYLES
        .iter()
        .find(|style| style.token == token)
        .unwrap_or(&UNKNOWN_STYLE)
}

pub fn to_display_token(level: Option<RiskRating>) -> DisplayToken {
    style_for(level).token
}

impl DisplayToken {
    /// Style class consumed by the rendering layer.
    pub fn as_str(&self) -> &'static str {
        style_for_token(*self).class
    }

    pub fn label(&self) -> &'static str {
        style_for_token(*self).label
    }

    pub fn color(&self) -> TokenColor {
        style_for_token(*self).color
    }
}

impl From<Option<RiskRating>> for DisplayToken {
    fn from(level: Option<RiskRating>) -> Self {
        to_display_token(level)
    }
}

impl From<RiskRating> for DisplayToken {
    fn from(level: RiskRating) -> Self {
        to_display_token(Some(level))
    }
}

impl fmt::Display for DisplayToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
