use serde::{Deserialize, Serialize};

use crate::tile_core::error::GenError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    pub seed: i64,
    pub build_count: u32,
    pub hex_radius: f32,
    pub hex_thickness: f32,
    pub variations: Vec<VariationSpec>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            build_count: 3,
            hex_radius: 0.5,
            hex_thickness: 0.08,
            variations: predefined_variations().to_vec(),
        }
    }
}

impl GenConfig {
    pub fn load() -> Self {
        let path = std::path::Path::new("config.json");
        if !path.exists() {
            log::info!("no config.json found, using defaults");
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("loaded config.json");
                    config
                }
                Err(e) => {
                    log::warn!("failed to parse config.json: {e}, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("failed to read config.json: {e}, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), GenError> {
        if self.hex_radius <= 0.0 || self.hex_thickness <= 0.0 {
            return Err(GenError::InvalidParameter(format!(
                "hex dimensions must be positive, got {} x {}",
                self.hex_radius, self.hex_thickness
            )));
        }
        if self.variations.is_empty() {
            return Err(GenError::InvalidParameter(
                "at least one variation is required".to_string(),
            ));
        }
        for spec in &self.variations {
            spec.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VariationSpec {
    pub tuft_count: u32,
    pub rock_count: u32,
    pub rock_scale_mult: f32,
    pub tree_probability: f32,
    pub height_amplitude: f32,
    pub noise_scale: f32,
    pub trunk_height: f32,
    pub crown_radius: f32,
}

impl Default for VariationSpec {
    fn default() -> Self {
        Self {
            tuft_count: 18,
            rock_count: 3,
            rock_scale_mult: 1.0,
            tree_probability: 0.35,
            height_amplitude: 0.06,
            noise_scale: 1.5,
            trunk_height: 0.18,
            crown_radius: 0.16,
        }
    }
}

impl VariationSpec {
    pub fn validate(&self) -> Result<(), GenError> {
        if !(0.0..=1.0).contains(&self.tree_probability) {
            return Err(GenError::InvalidParameter(format!(
                "tree_probability must be in [0, 1], got {}",
                self.tree_probability
            )));
        }
        if self.rock_scale_mult <= 0.0 {
            return Err(GenError::InvalidParameter(format!(
                "rock_scale_mult must be positive, got {}",
                self.rock_scale_mult
            )));
        }
        if self.height_amplitude < 0.0 {
            return Err(GenError::InvalidParameter(format!(
                "height_amplitude must not be negative, got {}",
                self.height_amplitude
            )));
        }
        if self.noise_scale <= 0.0 {
            return Err(GenError::InvalidParameter(format!(
                "noise_scale must be positive, got {}",
                self.noise_scale
            )));
        }
        if self.trunk_height <= 0.0 || self.crown_radius <= 0.0 {
            return Err(GenError::InvalidParameter(format!(
                "tree dimensions must be positive, got trunk {} / crown {}",
                self.trunk_height, self.crown_radius
            )));
        }
        Ok(())
    }
}

/// The three hand-authored grassland variants.
pub fn predefined_variations() -> [VariationSpec; 3] {
    [
        VariationSpec {
            tuft_count: 22,
            rock_count: 2,
            tree_probability: 0.45,
            height_amplitude: 0.06,
            ..Default::default()
        },
        VariationSpec {
            tuft_count: 12,
            rock_count: 5,
            rock_scale_mult: 1.6,
            tree_probability: 0.25,
            height_amplitude: 0.05,
            ..Default::default()
        },
        VariationSpec {
            tuft_count: 14,
            rock_count: 3,
            tree_probability: 0.6,
            trunk_height: 0.2,
            crown_radius: 0.18,
            height_amplitude: 0.07,
            ..Default::default()
        },
    ]
}
