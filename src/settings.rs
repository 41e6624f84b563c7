//! Game settings and preferences
//!
//! Read once at startup and never written back. In the browser the JSON comes
//! from the `data-settings` attribute on the play area; natively from the
//! `CATCH_BALL_SETTINGS` environment variable.

use serde::{Deserialize, Serialize};

use crate::tuning::Ruleset;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Which rule variant to play
    pub ruleset: Ruleset,

    // === Audio ===
    /// Play catch/miss sounds
    pub sound: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,

    // === Accessibility ===
    /// Suppress catch/miss flashes
    pub reduced_motion: bool,

    /// Fixed run seed (random when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ruleset: Ruleset::Classic,
            sound: true,
            master_volume: 0.8,
            reduced_motion: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    /// Parse, falling back to defaults with a warning on bad input
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        let Some(json) = json.filter(|j| !j.trim().is_empty()) else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings (ruleset: {})", settings.ruleset.as_str());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                Self::default()
            }
        }
    }

    /// Effective flashes (respects reduced_motion)
    pub fn effective_flashes(&self) -> bool {
        !self.reduced_motion
    }

    /// Effective sound volume, 0.0 when muted
    pub fn effective_volume(&self) -> f32 {
        if self.sound { self.master_volume } else { 0.0 }
    }

    /// Environment variable read by the native build
    pub const ENV_VAR: &'static str = "CATCH_BALL_SETTINGS";

    /// Attribute on `#gameArea` read by the browser build
    pub const DATA_ATTRIBUTE: &'static str = "data-settings";

    /// Load settings from the play area element (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("gameArea"))
            .and_then(|el| el.get_attribute(Self::DATA_ATTRIBUTE));
        Self::from_json_or_default(json.as_deref())
    }

    /// Load settings from the environment (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let json = std::env::var(Self::ENV_VAR).ok();
        Self::from_json_or_default(json.as_deref())
    }
}
