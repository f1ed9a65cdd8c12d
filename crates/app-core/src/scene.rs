use crate::constants::*;
use crate::geometry::{self, Mesh};
use crate::particles;
use crate::state::{ObjectKind, TrackedObject};
use glam::Vec3;

impl ObjectKind {
    /// Build the mesh for this section shape.
    pub fn mesh(self) -> Mesh {
        match self {
            ObjectKind::Torus => {
                let (r, tube, radial, tubular) = TORUS;
                geometry::torus(r, tube, radial, tubular)
            }
            ObjectKind::Cone => {
                let (r, h, radial) = CONE;
                geometry::cone(r, h, radial)
            }
            ObjectKind::TorusKnot => {
                let (r, tube, tubular, radial, p, q) = TORUS_KNOT;
                geometry::torus_knot(r, tube, tubular, radial, p, q)
            }
        }
    }
}

/// World position of the object for section `index`.
#[inline]
pub fn section_position(index: usize, objects_distance: f32) -> Vec3 {
    Vec3::new(0.0, -objects_distance * index as f32, 0.0)
}

/// One tracked object per section, stacked downward.
pub fn build_objects(objects_distance: f32) -> Vec<TrackedObject> {
    ObjectKind::SECTIONS
        .iter()
        .enumerate()
        .map(|(i, &kind)| TrackedObject::new(kind, section_position(i, objects_distance)))
        .collect()
}

/// Re-stack existing objects after a spacing change, keeping their rotations.
pub fn relayout(objects: &mut [TrackedObject], objects_distance: f32) {
    for (i, obj) in objects.iter_mut().enumerate() {
        obj.position = section_position(i, objects_distance);
    }
}

pub fn build_particles(count: usize, objects_distance: f32, section_count: usize) -> Vec<Vec3> {
    particles::scatter(count, objects_distance, section_count, PARTICLE_SEED)
}
