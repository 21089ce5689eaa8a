use glam::Vec3;

use crate::tile_core::displace::displace_radial;
use crate::tile_core::error::GenError;
use crate::tile_core::layer::Layer;
use crate::tile_core::materials::MaterialCache;
use crate::tile_core::noise_field::NoiseField;
use crate::tile_core::primitives::{cylinder, low_poly_sphere};
use crate::tile_core::tile::{Decoration, DecorationKind, DecorationPart};

pub const TRUNK_MATERIAL: &str = "Trunk_Mat";
pub const LEAF_MATERIAL: &str = "Leaf_Mat";
const TRUNK_COLOR: [f32; 4] = [0.35, 0.2, 0.08, 1.0];
const LEAF_COLOR: [f32; 4] = [0.12, 0.5, 0.14, 1.0];

const TRUNK_SIDES: u32 = 8;

pub struct TreeInput<'a> {
    pub position: Vec3,
    pub trunk_height: f32,
    pub crown_radius: f32,
    pub seed: f64,
    pub materials: &'a mut MaterialCache,
}

/// Low-poly tree: cylinder trunk plus a noise-roughened icosphere crown,
/// returned as two independently tagged parts.
pub struct TreeLayer {
    noise: NoiseField,
}

impl TreeLayer {
    pub fn new() -> Self {
        Self {
            noise: NoiseField::new(),
        }
    }
}

impl Default for TreeLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Layer<TreeInput<'a>, Result<Decoration, GenError>> for TreeLayer {
    fn generate(&self, input: TreeInput<'a>) -> Result<Decoration, GenError> {
        let TreeInput {
            position,
            trunk_height,
            crown_radius,
            seed,
            materials,
        } = input;

        let mut trunk = cylinder(trunk_height * 0.12, trunk_height, TRUNK_SIDES)?;
        // base of the trunk sits on the placement point
        trunk.translate(Vec3::new(0.0, 0.0, trunk_height / 2.0));
        trunk.shade_smooth();

        let mut crown = low_poly_sphere(crown_radius, 2)?;
        displace_radial(&mut crown, &self.noise, crown_radius * 0.12, seed);
        crown.translate(Vec3::new(0.0, 0.0, trunk_height + crown_radius * 0.6));
        crown.shade_smooth();

        materials.get_or_create(TRUNK_MATERIAL, TRUNK_COLOR, 0.0, 0.9);
        materials.get_or_create(LEAF_MATERIAL, LEAF_COLOR, 0.0, 0.8);

        Ok(Decoration {
            kind: DecorationKind::Tree,
            position,
            parts: vec![
                DecorationPart {
                    mesh: trunk,
                    material: TRUNK_MATERIAL.to_string(),
                },
                DecorationPart {
                    mesh: crown,
                    material: LEAF_MATERIAL.to_string(),
                },
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{TreeInput, TreeLayer, LEAF_MATERIAL, TRUNK_MATERIAL};
    use crate::tile_core::layer::Layer;
    use crate::tile_core::materials::MaterialCache;
    use crate::tile_core::tile::DecorationKind;
    use glam::Vec3;

    #[test]
    fn tree_has_trunk_and_crown_parts() {
        let mut materials = MaterialCache::new(1);
        let tree = TreeLayer::new()
            .generate(TreeInput {
                position: Vec3::new(0.0, 0.1, 0.04),
                trunk_height: 0.18,
                crown_radius: 0.16,
                seed: 0.0,
                materials: &mut materials,
            })
            .unwrap();

        assert_eq!(tree.kind, DecorationKind::Tree);
        assert_eq!(tree.parts.len(), 2);
        assert_eq!(tree.parts[0].material, TRUNK_MATERIAL);
        assert_eq!(tree.parts[1].material, LEAF_MATERIAL);

        // trunk spans [0, trunk_height] above the placement point
        let trunk = &tree.parts[0].mesh;
        let min_z = trunk.positions.iter().map(|p| p.z).fold(f32::MAX, f32::min);
        let max_z = trunk.positions.iter().map(|p| p.z).fold(f32::MIN, f32::max);
        assert!((min_z - 0.0).abs() < 1e-6);
        assert!((max_z - 0.18).abs() < 1e-6);

        // crown is centered well above the trunk top
        let crown = &tree.parts[1].mesh;
        let center_z = crown.positions.iter().map(|p| p.z).sum::<f32>()
            / crown.positions.len() as f32;
        assert!(center_z > 0.18);

        assert!(materials.get(TRUNK_MATERIAL).is_some());
        assert!(materials.get(LEAF_MATERIAL).is_some());
    }

    #[test]
    fn bad_tree_dimensions_fail_fast() {
        let mut materials = MaterialCache::new(1);
        let result = TreeLayer::new().generate(TreeInput {
            position: Vec3::ZERO,
            trunk_height: -0.1,
            crown_radius: 0.16,
            seed: 0.0,
            materials: &mut materials,
        });
        assert!(result.is_err());
        assert!(materials.is_empty());
    }
}
