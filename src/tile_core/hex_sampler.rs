use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::Rng;

const MAX_ATTEMPTS: u32 = 50;

/// Uniform point strictly inside the flat-top hexagon of `radius` shrunk
/// by `margin`: candidates are drawn density-correct inside the circle of
/// radius `radius - margin` and rejected by the axial test. After
/// `MAX_ATTEMPTS` failures the last candidate is pulled halfway toward
/// the center and returned without re-testing containment, so termination
/// is guaranteed but the fallback point is only approximately inside.
pub fn sample_point(rng: &mut StdRng, radius: f32, margin: f32) -> (f32, f32) {
    let mut attempts = 0;
    loop {
        attempts += 1;
        let r = rng.random::<f32>().sqrt() * (radius - margin);
        let theta = rng.random::<f32>() * TAU;
        let x = r * theta.cos();
        let y = r * theta.sin();
        if contains(radius, x, y) {
            return (x, y);
        }
        if attempts > MAX_ATTEMPTS {
            return (x * 0.5, y * 0.5);
        }
    }
}

/// Axial-coordinate containment test for a flat-top hexagon.
pub fn contains(radius: f32, x: f32, y: f32) -> bool {
    let q = (2.0 / 3.0) * x / radius;
    let r_ax = (-1.0 / 3.0) * x / radius + (2.0_f32.sqrt() / 3.0) * y / radius;
    q.abs() <= 1.0 && r_ax.abs() <= 1.0
}

#[cfg(test)]
mod tests {
    use super::{contains, sample_point};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn nearly_all_samples_pass_the_containment_test() {
        let mut rng = StdRng::seed_from_u64(7);
        let radius = 0.35;
        let margin = 0.02;

        let total = 10_000;
        let mut inside = 0;
        for _ in 0..total {
            let (x, y) = sample_point(&mut rng, radius, margin);
            if contains(radius, x, y) {
                inside += 1;
            }
        }
        // the bounded fallback path may leak a few points
        assert!(inside * 100 >= total * 98, "only {inside}/{total} inside");
    }

    #[test]
    fn samples_stay_within_the_candidate_circle() {
        let mut rng = StdRng::seed_from_u64(11);
        let radius = 0.46;
        let margin = 0.02;
        let limit = (radius - margin) * (radius - margin) + 1e-6;
        for _ in 0..2_000 {
            let (x, y) = sample_point(&mut rng, radius, margin);
            assert!(x * x + y * y <= limit);
        }
    }

    #[test]
    fn sampling_is_deterministic_for_a_fixed_stream() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(
                sample_point(&mut a, 0.35, 0.02),
                sample_point(&mut b, 0.35, 0.02)
            );
        }
    }
}
