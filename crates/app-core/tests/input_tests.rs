// Host-side tests for pointer normalization and geometry/particle builders.

use app_core::input::{cursor_offset, parallax_target};
use app_core::scene::{build_objects, build_particles};
use app_core::*;
use glam::Vec2;

#[test]
fn cursor_offset_corners_and_center() {
    assert_eq!(cursor_offset(0.0, 0.0, 1200.0, 800.0), Vec2::new(-0.5, -0.5));
    assert_eq!(cursor_offset(1200.0, 800.0, 1200.0, 800.0), Vec2::new(0.5, 0.5));
    assert_eq!(cursor_offset(600.0, 400.0, 1200.0, 800.0), Vec2::ZERO);
    assert_eq!(cursor_offset(10.0, 10.0, 0.0, 800.0), Vec2::ZERO);
}

#[test]
fn parallax_flips_vertical() {
    assert_eq!(parallax_target(Vec2::new(0.2, 0.3)), Vec2::new(0.2, -0.3));
}

#[test]
fn objects_stack_downward() {
    let objs = build_objects(4.0);
    let kinds: Vec<_> = objs.iter().map(|o| o.kind).collect();
    assert_eq!(kinds, ObjectKind::SECTIONS.to_vec());
    for (i, o) in objs.iter().enumerate() {
        assert_eq!(o.position.y, -4.0 * i as f32);
        assert_eq!(o.position.x, 0.0);
    }
}

#[test]
fn particles_deterministic_and_bounded() {
    let a = build_particles(200, 4.0, 3);
    let b = build_particles(200, 4.0, 3);
    assert_eq!(a, b);
    assert_eq!(a.len(), 200);
    for p in &a {
        assert!((-5.0..5.0).contains(&p.x));
        assert!((-5.0..5.0).contains(&p.z));
        assert!(p.y <= 2.0 && p.y > 2.0 - 12.0);
    }
}

#[test]
fn section_meshes_are_closed_index_sets() {
    for kind in ObjectKind::SECTIONS {
        let mesh = kind.mesh();
        assert!(mesh.triangle_count() > 0, "{kind:?} empty");
        assert_eq!(mesh.indices.len() % 3, 0);
        assert!(mesh
            .indices
            .iter()
            .all(|&i| (i as usize) < mesh.vertices.len()));
    }
}
