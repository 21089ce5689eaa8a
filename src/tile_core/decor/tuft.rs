use std::f32::consts::FRAC_PI_2;

use glam::{Mat3, Vec3};
use rand::rngs::StdRng;
use rand::Rng;

use crate::tile_core::error::GenError;
use crate::tile_core::layer::Layer;
use crate::tile_core::materials::MaterialCache;
use crate::tile_core::primitives::quad;
use crate::tile_core::tile::{Decoration, DecorationKind, DecorationPart};

pub const TUFT_MATERIAL: &str = "Tuft_Mat";
const TUFT_COLOR: [f32; 4] = [0.16, 0.6, 0.12, 1.0];

pub struct TuftInput<'a> {
    pub position: Vec3,
    pub scale: f32,
    pub rng: &'a mut StdRng,
    pub materials: &'a mut MaterialCache,
}

/// Grass tuft: a unit quad whose top edge is bent forward, then scaled
/// thin and rotated upright.
pub struct TuftLayer;

impl TuftLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TuftLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Layer<TuftInput<'a>, Result<Decoration, GenError>> for TuftLayer {
    fn generate(&self, input: TuftInput<'a>) -> Result<Decoration, GenError> {
        let TuftInput {
            position,
            scale,
            rng,
            materials,
        } = input;

        let mut mesh = quad(1.0)?;

        // Bend happens in the blade's pre-transform frame: the quad's two
        // y > 0 vertices lean forward in x and lift in z. Two draws per
        // vertex (x before z) are part of the tile's draw-order contract.
        for v in &mut mesh.positions {
            if v.y > 0.0 {
                v.x += (rng.random_range(-0.02..0.02) + 0.02) * scale;
                v.z += rng.random_range(0.01..0.03) * scale;
            }
        }

        // Bake the blade transform: non-uniform scale, then stand the
        // blade upright with a quarter turn about x.
        let upright = Mat3::from_rotation_x(FRAC_PI_2);
        let blade_scale = Vec3::new(0.25 * scale, 0.02 * scale, scale);
        for v in &mut mesh.positions {
            *v = upright * (*v * blade_scale);
        }
        mesh.shade_smooth();

        materials.get_or_create(TUFT_MATERIAL, TUFT_COLOR, 0.0, 0.9);

        Ok(Decoration {
            kind: DecorationKind::Tuft,
            position,
            parts: vec![DecorationPart {
                mesh,
                material: TUFT_MATERIAL.to_string(),
            }],
        })
    }
}
