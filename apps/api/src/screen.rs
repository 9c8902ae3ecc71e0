//! Chrome shared by both dashboards: theme and score badges.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Badge style a score renders with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTier {
    Default,
    Secondary,
    Outline,
}

/// Candidate screen: a match of 80% or better is highlighted.
pub fn candidate_badge(score: u8) -> BadgeTier {
    if score >= 80 {
        BadgeTier::Default
    } else {
        BadgeTier::Secondary
    }
}

/// Recruiter screen uses three tiers.
pub fn recruiter_badge(score: u8) -> BadgeTier {
    match score {
        85.. => BadgeTier::Default,
        70..=84 => BadgeTier::Secondary,
        _ => BadgeTier::Outline,
    }
}

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}
