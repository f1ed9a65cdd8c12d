//! Indexed triangle meshes for the three section objects.
//!
//! Vertex layouts and winding follow the usual parametric constructions so the
//! toon shader sees outward normals on every surface.

use glam::Vec3;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    #[inline]
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Torus in the XY plane around the Z axis.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Mesh {
    let mut mesh = Mesh::default();
    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let p = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.vertices.push(Vertex::new(p, p - center));
        }
    }
    let row = tubular_segments + 1;
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

/// Closed cone with its apex at `+height/2` on the Y axis.
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> Mesh {
    let mut mesh = Mesh::default();
    let half = height * 0.5;
    let slope = radius / height;

    // Side: apex ring (radius 0) then base ring.
    for (ring_radius, y) in [(0.0, half), (radius, -half)] {
        for x in 0..=radial_segments {
            let theta = x as f32 / radial_segments as f32 * TAU;
            let (s, c) = theta.sin_cos();
            mesh.vertices.push(Vertex::new(
                Vec3::new(ring_radius * s, y, ring_radius * c),
                Vec3::new(s, slope, c),
            ));
        }
    }
    let row = radial_segments + 1;
    for x in 0..radial_segments {
        let b = row + x;
        let c = row + x + 1;
        let d = x + 1;
        mesh.indices.extend_from_slice(&[b, c, d]);
    }

    // Base cap: one center vertex per segment so each triangle gets its own.
    let center_start = mesh.vertices.len() as u32;
    for _ in 0..radial_segments {
        mesh.vertices
            .push(Vertex::new(Vec3::new(0.0, -half, 0.0), Vec3::NEG_Y));
    }
    let rim_start = mesh.vertices.len() as u32;
    for x in 0..=radial_segments {
        let theta = x as f32 / radial_segments as f32 * TAU;
        let (s, c) = theta.sin_cos();
        mesh.vertices
            .push(Vertex::new(Vec3::new(radius * s, -half, radius * c), Vec3::NEG_Y));
    }
    for x in 0..radial_segments {
        let c = center_start + x;
        let i = rim_start + x;
        mesh.indices.extend_from_slice(&[i + 1, i, c]);
    }
    mesh
}

/// (p, q) torus knot swept with a circular tube.
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> Mesh {
    let mut mesh = Mesh::default();
    let curve = |u: f32| {
        let q_over_p = q as f32 / p as f32 * u;
        let cs = q_over_p.cos();
        Vec3::new(
            radius * (2.0 + cs) * 0.5 * u.cos(),
            radius * (2.0 + cs) * 0.5 * u.sin(),
            radius * q_over_p.sin() * 0.5,
        )
    };

    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * p as f32 * TAU;
        let p1 = curve(u);
        let p2 = curve(u + 0.01);
        let t = p2 - p1;
        let n = p2 + p1;
        let bi = t.cross(n).normalize_or_zero();
        let n = bi.cross(t).normalize_or_zero();
        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let pos = p1 + n * cx + bi * cy;
            mesh.vertices.push(Vertex::new(pos, pos - p1));
        }
    }
    let row = radial_segments + 1;
    for j in 1..=tubular_segments {
        for i in 1..=radial_segments {
            let a = row * (j - 1) + (i - 1);
            let b = row * j + (i - 1);
            let c = row * j + i;
            let d = row * (j - 1) + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unit_normals(mesh: &Mesh) {
        for v in &mesh.vertices {
            let len = Vec3::from(v.normal).length();
            assert!((len - 1.0).abs() < 1e-3, "normal length {len}");
        }
    }

    #[test]
    fn torus_counts() {
        let m = torus(1.0, 0.4, 16, 60);
        assert_eq!(m.vertices.len(), 17 * 61);
        assert_eq!(m.indices.len(), 16 * 60 * 6);
        assert_unit_normals(&m);
    }

    #[test]
    fn cone_counts_and_bounds() {
        let m = cone(1.0, 2.0, 32);
        assert_eq!(m.vertices.len(), 2 * 33 + 32 + 33);
        assert_eq!(m.triangle_count(), 64);
        for v in &m.vertices {
            assert!(v.position[1] >= -1.0 - 1e-6 && v.position[1] <= 1.0 + 1e-6);
        }
        assert_unit_normals(&m);
    }

    #[test]
    fn knot_indices_in_range() {
        let m = torus_knot(0.8, 0.35, 20, 8, 2, 3);
        assert_eq!(m.vertices.len(), 21 * 9);
        let max = *m.indices.iter().max().unwrap() as usize;
        assert!(max < m.vertices.len());
        assert_unit_normals(&m);
    }
}
