use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::tile_core::config::{GenConfig, VariationSpec};
use crate::tile_core::decor::{ScatterInput, ScatterLayer};
use crate::tile_core::displace::displace_top_surface;
use crate::tile_core::error::GenError;
use crate::tile_core::layer::Layer;
use crate::tile_core::materials::{MaterialCache, GRASS_BASE_COLOR};
use crate::tile_core::noise_field::NoiseField;
use crate::tile_core::primitives::hex_prism;
use crate::tile_core::tile::Tile;

pub const GRASS_MATERIAL: &str = "Grass_Mat";

/// Seed offset the variation front door applies to every tile, so the
/// predefined set is decorrelated from ad-hoc `build_tile` calls.
const VARIATION_SEED_OFFSET: i64 = 100;

pub struct TileBuilder {
    noise: NoiseField,
    scatter: ScatterLayer,
    base_seed: i64,
    hex_radius: f32,
    hex_thickness: f32,
}

impl TileBuilder {
    pub fn new(base_seed: i64, hex_radius: f32, hex_thickness: f32) -> Result<Self, GenError> {
        if hex_radius <= 0.0 || hex_thickness <= 0.0 {
            return Err(GenError::InvalidParameter(format!(
                "hex dimensions must be positive, got {hex_radius} x {hex_thickness}"
            )));
        }
        Ok(Self {
            noise: NoiseField::new(),
            scatter: ScatterLayer::new(),
            base_seed,
            hex_radius,
            hex_thickness,
        })
    }

    pub fn from_config(config: &GenConfig) -> Result<Self, GenError> {
        config.validate()?;
        Self::new(config.seed, config.hex_radius, config.hex_thickness)
    }

    /// Build one tile from a single stream seeded with
    /// `base_seed + seed_offset + index`. Stream draw order: base
    /// rotation, per-rock draws, per-tuft draws, tree Bernoulli.
    pub fn build_tile(
        &self,
        index: u32,
        seed_offset: i64,
        spec: &VariationSpec,
        materials: &mut MaterialCache,
    ) -> Result<Tile, GenError> {
        spec.validate()?;

        let combined_seed = self.base_seed + seed_offset + index as i64;
        let mut rng = StdRng::seed_from_u64(combined_seed as u64);

        let mut base = hex_prism(self.hex_radius, self.hex_thickness)?;
        materials.get_or_create(GRASS_MATERIAL, GRASS_BASE_COLOR, 0.0, 0.9);

        let base_rotation = rng.random_range(0.0..TAU);
        displace_top_surface(
            &mut base,
            &self.noise,
            spec.height_amplitude,
            spec.noise_scale,
            (self.base_seed + index as i64 + seed_offset) as f64,
        );
        base.shade_smooth();

        let decorations = self.scatter.generate(ScatterInput {
            tile_index: index,
            base_seed: self.base_seed,
            spec,
            hex_radius: self.hex_radius,
            hex_thickness: self.hex_thickness,
            rng: &mut rng,
            materials,
        })?;

        Ok(Tile {
            index,
            base,
            base_rotation,
            decorations,
            material: GRASS_MATERIAL.to_string(),
            seed: combined_seed,
        })
    }

    /// Front door for the predefined set: build tile `i` from variant
    /// `i`, then swap its base material to the per-tile jittered grass
    /// variant. `count` is clamped to the variant list.
    pub fn build_variations(
        &self,
        variations: &[VariationSpec],
        count: u32,
        materials: &mut MaterialCache,
    ) -> Result<Vec<Tile>, GenError> {
        if variations.is_empty() {
            return Err(GenError::InvalidParameter(
                "at least one variation is required".to_string(),
            ));
        }
        let count = count.clamp(1, variations.len() as u32) as usize;

        let mut tiles = Vec::with_capacity(count);
        for (index, spec) in variations.iter().take(count).enumerate() {
            let index = index as u32;
            let mut tile = self.build_tile(index, VARIATION_SEED_OFFSET, spec, materials)?;
            let variant = materials.get_grass_variant_for_tile(index);
            tile.material = variant.borrow().name.clone();
            log::info!(
                "built tile {index}: {} decorations, material {}",
                tile.decorations.len(),
                tile.material
            );
            tiles.push(tile);
        }
        Ok(tiles)
    }
}
