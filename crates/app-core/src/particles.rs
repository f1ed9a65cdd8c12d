use crate::constants::PARTICLE_SPREAD;
use glam::Vec3;
use rand::prelude::*;

/// Scatter `count` points through the scrollable column of sections.
///
/// X and Z cover a `PARTICLE_SPREAD`-wide box around the origin. Y starts half a
/// section above the first object and runs down past the last one, so the field
/// stays visible for the whole scroll range.
pub fn scatter(count: usize, objects_distance: f32, section_count: usize, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    let half = PARTICLE_SPREAD * 0.5;
    let column = objects_distance * section_count as f32;
    (0..count)
        .map(|_| {
            let x = rng.gen::<f32>() * PARTICLE_SPREAD - half;
            let y = objects_distance * 0.5 - rng.gen::<f32>() * column;
            let z = rng.gen::<f32>() * PARTICLE_SPREAD - half;
            Vec3::new(x, y, z)
        })
        .collect()
}
