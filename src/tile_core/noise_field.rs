use glam::DVec3;
use noise::{NoiseFn, OpenSimplex};

/// Stateless coherent-noise field. Callers express distinct seeds by
/// offsetting the sample coordinates, so a single fixed lattice serves
/// every generator in the process.
#[derive(Clone)]
pub struct NoiseField {
    simplex: OpenSimplex,
}

impl NoiseField {
    pub fn new() -> Self {
        Self {
            simplex: OpenSimplex::new(0),
        }
    }

    /// Sample the field at `p`; the result is bounded to [-1, 1].
    pub fn sample(&self, p: DVec3) -> f64 {
        self.simplex.get([p.x, p.y, p.z]).clamp(-1.0, 1.0)
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new()
    }
}
