mod rock;
mod tree;
mod tuft;

pub use self::rock::{RockInput, RockLayer, ROCK_MATERIAL};
pub use self::tree::{TreeInput, TreeLayer, LEAF_MATERIAL, TRUNK_MATERIAL};
pub use self::tuft::{TuftInput, TuftLayer, TUFT_MATERIAL};

use glam::Vec3;
use rand::rngs::StdRng;
use rand::Rng;

use crate::tile_core::config::VariationSpec;
use crate::tile_core::error::GenError;
use crate::tile_core::hex_sampler;
use crate::tile_core::layer::Layer;
use crate::tile_core::materials::MaterialCache;
use crate::tile_core::tile::Decoration;

pub struct ScatterInput<'a> {
    pub tile_index: u32,
    pub base_seed: i64,
    pub spec: &'a VariationSpec,
    pub hex_radius: f32,
    pub hex_thickness: f32,
    pub rng: &'a mut StdRng,
    pub materials: &'a mut MaterialCache,
}

/// Scatter pass over one tile: rocks, then tufts, then at most one tree.
/// The draw order on the shared stream (per-rock point and size, per-tuft
/// point, size and bend, tree Bernoulli and point) is part of the
/// determinism contract; reordering changes every downstream value.
pub struct ScatterLayer {
    rocks: RockLayer,
    tufts: TuftLayer,
    trees: TreeLayer,
}

impl ScatterLayer {
    pub fn new() -> Self {
        Self {
            rocks: RockLayer::new(),
            tufts: TuftLayer::new(),
            trees: TreeLayer::new(),
        }
    }
}

impl Default for ScatterLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Layer<ScatterInput<'a>, Result<Vec<Decoration>, GenError>> for ScatterLayer {
    fn generate(&self, input: ScatterInput<'a>) -> Result<Vec<Decoration>, GenError> {
        let ScatterInput {
            tile_index,
            base_seed,
            spec,
            hex_radius,
            hex_thickness,
            rng,
            materials,
        } = input;

        let mut decorations =
            Vec::with_capacity(spec.rock_count as usize + spec.tuft_count as usize + 1);

        for i in 0..spec.rock_count {
            let (x, y) = hex_sampler::sample_point(rng, hex_radius * 0.7, 0.02);
            let z = hex_thickness / 2.0 + 0.01;
            let scale: f32 = rng.random_range(0.045..0.12) * spec.rock_scale_mult;
            decorations.push(self.rocks.generate(RockInput {
                position: Vec3::new(x, y, z),
                scale,
                seed: (base_seed + i as i64 + tile_index as i64) as f64,
                materials: &mut *materials,
            })?);
        }

        for _ in 0..spec.tuft_count {
            let (x, y) = hex_sampler::sample_point(rng, hex_radius * 0.92, 0.02);
            let z = hex_thickness / 2.0 + 0.002;
            let scale: f32 = rng.random_range(0.04..0.09);
            decorations.push(self.tufts.generate(TuftInput {
                position: Vec3::new(x, y, z),
                scale,
                rng: &mut *rng,
                materials: &mut *materials,
            })?);
        }

        if rng.random::<f32>() < spec.tree_probability {
            let (x, y) = hex_sampler::sample_point(rng, hex_radius * 0.6, 0.05);
            decorations.push(self.trees.generate(TreeInput {
                position: Vec3::new(x, y, hex_thickness / 2.0),
                trunk_height: spec.trunk_height,
                crown_radius: spec.crown_radius,
                // every crown samples one shared displacement field
                seed: 0.0,
                materials: &mut *materials,
            })?);
        }

        Ok(decorations)
    }
}
