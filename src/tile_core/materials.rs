use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const GRASS_BASE_COLOR: [f32; 4] = [0.22, 0.55, 0.18, 1.0];

#[derive(Clone, Debug, PartialEq)]
pub struct MaterialVariant {
    pub name: String,
    pub base_color: [f32; 4],
    pub metallic: f32,
    pub roughness: f32,
}

pub type SharedMaterial = Rc<RefCell<MaterialVariant>>;

/// Name-keyed material store: at most one variant per name for the
/// lifetime of the cache. A lookup that passes new shading parameters
/// updates the existing entry in place and returns the same identity.
/// `Rc` keeps the cache single-threaded by construction; callers needing
/// isolation create independent caches.
pub struct MaterialCache {
    variants: HashMap<String, SharedMaterial>,
    seed: u64,
}

impl MaterialCache {
    pub fn new(seed: u64) -> Self {
        Self {
            variants: HashMap::new(),
            seed,
        }
    }

    pub fn get_or_create(
        &mut self,
        name: &str,
        base_color: [f32; 4],
        metallic: f32,
        roughness: f32,
    ) -> SharedMaterial {
        if let Some(existing) = self.variants.get(name) {
            let mut variant = existing.borrow_mut();
            variant.base_color = base_color;
            variant.metallic = metallic;
            variant.roughness = roughness;
            drop(variant);
            return Rc::clone(existing);
        }

        let variant = Rc::new(RefCell::new(MaterialVariant {
            name: name.to_string(),
            base_color,
            metallic,
            roughness,
        }));
        self.variants.insert(name.to_string(), Rc::clone(&variant));
        variant
    }

    /// Per-tile grass variant `Grass_v{index}`. Color and roughness are
    /// jittered exactly once, on first creation, from a stream derived
    /// from (cache seed, index), so the variant survives process restarts
    /// unchanged. Cache hits return the existing variant untouched.
    pub fn get_grass_variant_for_tile(&mut self, index: u32) -> SharedMaterial {
        let name = format!("Grass_v{index}");
        if let Some(existing) = self.variants.get(&name) {
            return Rc::clone(existing);
        }

        let mut rng =
            StdRng::seed_from_u64(self.seed.wrapping_add(1701).wrapping_add(index as u64));
        let mut color = GRASS_BASE_COLOR;
        for channel in color.iter_mut().take(3) {
            *channel = (*channel + rng.random_range(-0.03..0.03)).clamp(0.0, 1.0);
        }
        let roughness: f32 = (0.85f32 + rng.random_range(-0.12..0.12)).clamp(0.2, 1.0);
        self.get_or_create(&name, color, 0.0, roughness)
    }

    pub fn get(&self, name: &str) -> Option<SharedMaterial> {
        self.variants.get(name).map(Rc::clone)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
