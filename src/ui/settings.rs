use serde::{Deserialize, Serialize};
use egui::Color32;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::engine::engine::DEFAULT_TOP_N;
use crate::engine::interpret::Band;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiSettings {
    pub ui_scale: f32,

    /// Overrides the default leaderboard location when set.
    pub leaderboard_path: Option<PathBuf>,

    pub default_top_n: usize,

    // Band -> color mapping
    pub band_colors: HashMap<String, [u8; 4]>,
}

impl Default for UiSettings {
    fn default() -> Self {
        let mut band_colors = HashMap::new();

        band_colors.insert(Band::Negative.key().into(), [170, 50, 50, 255]);
        band_colors.insert(Band::Neutral.key().into(), [120, 120, 120, 255]);
        band_colors.insert(Band::Positive.key().into(), [40, 130, 70, 255]);

        Self {
            ui_scale: 1.0,
            leaderboard_path: None,
            default_top_n: DEFAULT_TOP_N,
            band_colors,
        }
    }
}

impl UiSettings {
    /// Keeps the last Top N picked on the leaderboard page. Returns whether it changed.
    pub fn remember_top_n(&mut self, n: usize) -> bool {
        if n == 0 || n == self.default_top_n {
            return false;
        }
        self.default_top_n = n;
        true
    }

    pub fn color(&self, band: Band) -> Color32 {
        self.band_colors
            .get(band.key())
            .map(|c| Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]))
            .unwrap_or(Color32::GRAY)
    }

    pub fn set_color(&mut self, band: Band, color: Color32) {
        self.band_colors.insert(
            band.key().to_string(),
            [color.r(), color.g(), color.b(), color.a()],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let s: UiSettings = serde_json::from_str(r#"{ "ui_scale": 1.5 }"#).unwrap();
        assert_eq!(s.ui_scale, 1.5);
        assert_eq!(s.default_top_n, DEFAULT_TOP_N);
        assert!(s.leaderboard_path.is_none());
        assert_eq!(s.color(Band::Positive), Color32::from_rgb(40, 130, 70));
    }

    #[test]
    fn remember_top_n_only_reports_real_changes() {
        let mut s = UiSettings::default();
        assert!(!s.remember_top_n(DEFAULT_TOP_N));
        assert!(!s.remember_top_n(0));
        assert!(s.remember_top_n(12));
        assert_eq!(s.default_top_n, 12);

        let json = serde_json::to_string(&s).unwrap();
        let back: UiSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.default_top_n, 12);
    }

    #[test]
    fn set_color_round_trips() {
        let mut s = UiSettings::default();
        s.set_color(Band::Neutral, Color32::from_rgb(1, 2, 3));
        assert_eq!(s.color(Band::Neutral), Color32::from_rgb(1, 2, 3));
    }
}
