use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `n` uniformly random RGB colors.
///
/// A seed makes the palette reproducible across runs; without one the
/// thread-local generator is used.
pub fn random_colors(n: usize, seed: Option<u64>) -> Vec<[u8; 3]> {
    match seed {
        Some(seed) => fill_colors(&mut StdRng::seed_from_u64(seed), n),
        None => fill_colors(&mut rand::rng(), n),
    }
}

fn fill_colors<R: Rng>(rng: &mut R, n: usize) -> Vec<[u8; 3]> {
    (0..n)
        .map(|_| [rng.random(), rng.random(), rng.random()])
        .collect()
}

/// Degree triple from a config file to radians.
pub fn degrees_to_radians(angles: [f32; 3]) -> Vector3<f32> {
    Vector3::from(angles).map(f32::to_radians)
}
