//! Game settings and preferences
//!
//! Persisted as JSON next to the high score file. Missing or corrupt files
//! fall back to defaults; the engine never refuses to start over a bad
//! settings file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,

    // === Visual Effects ===
    /// Particle effects (explosion bursts)
    pub particles: bool,

    // === Accessibility ===
    /// Reduced motion (minimize bursts and flashes)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            particles: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Whether explosion particles should be shown at all
    pub fn particles_enabled(&self) -> bool {
        self.particles && !self.reduced_motion
    }

    /// Effective music volume after the master fader
    pub fn effective_music_volume(&self) -> f32 {
        (self.master_volume * self.music_volume).clamp(0.0, 1.0)
    }

    /// Effective sound effect volume after the master fader
    pub fn effective_sfx_volume(&self) -> f32 {
        (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
    }

    /// Load settings from a JSON file, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("corrupt settings file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("using default settings");
                Self::default()
            }
            Err(err) => {
                log::warn!("could not read {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as JSON.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_motion_disables_particles() {
        let settings = Settings { reduced_motion: true, ..Settings::default() };
        assert!(settings.particles);
        assert!(!settings.particles_enabled());
    }

    #[test]
    fn test_effective_volumes_scale_by_master() {
        let settings = Settings {
            master_volume: 0.5,
            sfx_volume: 1.0,
            music_volume: 0.8,
            ..Settings::default()
        };
        assert!((settings.effective_sfx_volume() - 0.5).abs() < f32::EPSILON);
        assert!((settings.effective_music_volume() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let path = std::env::temp_dir().join("techno-runner-settings-test-missing.json");
        let settings = Settings::load_from(&path);
        assert!(settings.particles);
    }

    #[test]
    fn test_save_load_round_trip() {
        let path = std::env::temp_dir()
            .join(format!("techno-runner-settings-test-{}.json", std::process::id()));
        let settings = Settings { master_volume: 0.25, particles: false, ..Settings::default() };
        settings.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path);
        assert!((loaded.master_volume - 0.25).abs() < f32::EPSILON);
        assert!(!loaded.particles);
        std::fs::remove_file(&path).unwrap();
    }
}
