//! Hall presets and show metadata
//!
//! The picker page's form state, minus the DOM: the hall-size selector and
//! the movie fields a purchase stamps onto its tickets.

use serde::{Deserialize, Serialize};

use crate::hall::HallConfig;

/// Hall-size presets offered by the size selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HallPreset {
    /// 100 seats
    Small,
    /// 200 seats
    #[default]
    Medium,
    /// 300 seats
    Large,
}

impl HallPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            HallPreset::Small => "Small",
            HallPreset::Medium => "Medium",
            HallPreset::Large => "Large",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "small" | "100" => Some(HallPreset::Small),
            "medium" | "med" | "200" => Some(HallPreset::Medium),
            "large" | "300" => Some(HallPreset::Large),
            _ => None,
        }
    }

    /// Preset matching a seat-count selector value
    pub fn from_seat_count(total: u32) -> Option<Self> {
        match total {
            100 => Some(HallPreset::Small),
            200 => Some(HallPreset::Medium),
            300 => Some(HallPreset::Large),
            _ => None,
        }
    }

    pub fn config(&self) -> HallConfig {
        match self {
            HallPreset::Small => HallConfig::new(10, 10),
            HallPreset::Medium => HallConfig::new(10, 20),
            HallPreset::Large => HallConfig::new(10, 30),
        }
    }

    pub fn total_seats(&self) -> u32 {
        self.config().total_seats()
    }
}

/// The show a purchase is for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowInfo {
    pub movie_name: String,
    /// `YYYY-MM-DD HH:MM`
    pub show_time: String,
}

impl Default for ShowInfo {
    fn default() -> Self {
        Self {
            movie_name: "Feature Presentation".to_string(),
            show_time: "2026-01-01 19:30".to_string(),
        }
    }
}
