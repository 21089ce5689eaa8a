use glam::Vec3;

use crate::tile_core::displace::displace_radial;
use crate::tile_core::error::GenError;
use crate::tile_core::layer::Layer;
use crate::tile_core::materials::MaterialCache;
use crate::tile_core::noise_field::NoiseField;
use crate::tile_core::primitives::low_poly_sphere;
use crate::tile_core::tile::{Decoration, DecorationKind, DecorationPart};

pub const ROCK_MATERIAL: &str = "Rock_Mat";
const ROCK_COLOR: [f32; 4] = [0.45, 0.45, 0.48, 1.0];

pub struct RockInput<'a> {
    pub position: Vec3,
    pub scale: f32,
    pub seed: f64,
    pub materials: &'a mut MaterialCache,
}

/// Low-poly rock: an icosphere roughened by radial noise.
pub struct RockLayer {
    noise: NoiseField,
}

impl RockLayer {
    pub fn new() -> Self {
        Self {
            noise: NoiseField::new(),
        }
    }
}

impl Default for RockLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Layer<RockInput<'a>, Result<Decoration, GenError>> for RockLayer {
    fn generate(&self, input: RockInput<'a>) -> Result<Decoration, GenError> {
        let mut mesh = low_poly_sphere(input.scale, 2)?;
        displace_radial(&mut mesh, &self.noise, input.scale * 0.35, input.seed);
        mesh.shade_smooth();

        input
            .materials
            .get_or_create(ROCK_MATERIAL, ROCK_COLOR, 0.0, 0.8);

        Ok(Decoration {
            kind: DecorationKind::Rock,
            position: input.position,
            parts: vec![DecorationPart {
                mesh,
                material: ROCK_MATERIAL.to_string(),
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{RockInput, RockLayer, ROCK_MATERIAL};
    use crate::tile_core::layer::Layer;
    use crate::tile_core::materials::MaterialCache;
    use crate::tile_core::tile::DecorationKind;
    use glam::Vec3;

    #[test]
    fn rock_is_a_single_smooth_part_with_its_material_registered() {
        let mut materials = MaterialCache::new(1);
        let rock = RockLayer::new()
            .generate(RockInput {
                position: Vec3::new(0.1, -0.05, 0.05),
                scale: 0.07,
                seed: 45.0,
                materials: &mut materials,
            })
            .unwrap();

        assert_eq!(rock.kind, DecorationKind::Rock);
        assert_eq!(rock.parts.len(), 1);
        assert_eq!(rock.parts[0].material, ROCK_MATERIAL);
        assert_eq!(rock.parts[0].mesh.face_count(), 80);
        assert!(rock.parts[0].mesh.faces.iter().all(|f| f.smooth));
        assert!(materials.get(ROCK_MATERIAL).is_some());
    }

    #[test]
    fn zero_scale_is_rejected_before_any_construction() {
        let mut materials = MaterialCache::new(1);
        let result = RockLayer::new().generate(RockInput {
            position: Vec3::ZERO,
            scale: 0.0,
            seed: 0.0,
            materials: &mut materials,
        });
        assert!(result.is_err());
        assert!(materials.is_empty());
    }
}
