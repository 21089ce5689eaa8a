use glam::{DVec3, Vec3};

use crate::tile_core::mesh::Mesh;
use crate::tile_core::noise_field::NoiseField;

/// Noise-displace every vertex with local z >= 0 upward and slightly
/// outward; vertices below the z = 0 plane are untouched. Not idempotent:
/// displaced positions feed back into the noise coordinates, so applying
/// it twice is not the same as applying it once.
pub fn displace_top_surface(
    mesh: &mut Mesh,
    noise: &NoiseField,
    amplitude: f32,
    scale: f32,
    seed: f64,
) {
    for v in &mut mesh.positions {
        if v.z >= 0.0 {
            let n = noise.sample(DVec3::new(
                v.x as f64 * scale as f64 + seed,
                v.y as f64 * scale as f64 + seed,
                seed,
            )) as f32;
            let disp = n * amplitude;
            let lateral = Vec3::new(v.x, v.y, 0.0).normalize_or_zero();
            *v += lateral * (disp * 0.15) + Vec3::new(0.0, 0.0, disp);
        }
    }
}

/// Push every vertex outward along its own direction from the origin by
/// `n * intensity`. A vertex at the origin has no direction and stays
/// put. Not idempotent, same as `displace_top_surface`.
pub fn displace_radial(mesh: &mut Mesh, noise: &NoiseField, intensity: f32, seed: f64) {
    for v in &mut mesh.positions {
        let n = noise.sample(DVec3::new(
            v.x as f64 * 3.0 + seed,
            v.y as f64 * 3.0 + seed,
            v.z as f64 * 3.0 + seed,
        )) as f32;
        let dir = v.normalize_or_zero();
        *v += dir * (n * intensity);
    }
}
