//! Scene geometry and per-frame animation state.

use super::constants::*;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use rand::prelude::*;
use std::f32::consts::{PI, TAU};

/// Interleaved vertex shared by every mesh and the starfield.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// UV sphere centred on the origin, poles on the Y axis.
///
/// Produces `(w + 1) * (h + 1)` vertices; the degenerate triangles at each
/// pole are skipped.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let mut vertices = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let normal = Vec3::new(
                -(u * TAU).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * TAU).sin() * (v * PI).sin(),
            );
            vertices.push(Vertex {
                position: (normal * radius).to_array(),
                normal: normal.normalize_or_zero().to_array(),
                uv: [u, 1.0 - v],
            });
        }
    }

    let row = w + 1;
    let mut indices = Vec::new();
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    Mesh { vertices, indices }
}

/// Flat annulus in the XY plane facing +Z.
pub fn ring(inner: f32, outer: f32, theta_segments: u32, phi_segments: u32) -> Mesh {
    let ts = theta_segments.max(3);
    let ps = phi_segments.max(1);
    let step = (outer - inner) / ps as f32;
    let mut vertices = Vec::with_capacity(((ts + 1) * (ps + 1)) as usize);
    let mut radius = inner;
    for _ in 0..=ps {
        for i in 0..=ts {
            let segment = i as f32 / ts as f32 * TAU;
            let x = radius * segment.cos();
            let y = radius * segment.sin();
            vertices.push(Vertex {
                position: [x, y, 0.0],
                normal: [0.0, 0.0, 1.0],
                uv: [(x / outer + 1.0) / 2.0, (y / outer + 1.0) / 2.0],
            });
        }
        radius += step;
    }

    let row = ts + 1;
    let mut indices = Vec::with_capacity((ts * ps * 6) as usize);
    for j in 0..ps {
        for i in 0..ts {
            let a = j * row + i;
            let b = a + row;
            let c = b + 1;
            let d = a + 1;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    Mesh { vertices, indices }
}

/// Points scattered uniformly inside a cube of edge `extent`.
pub fn starfield(count: usize, extent: f32, seed: u64) -> Vec<Vertex> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Vertex {
            position: [
                (rng.gen::<f32>() - 0.5) * extent,
                (rng.gen::<f32>() - 0.5) * extent,
                (rng.gen::<f32>() - 0.5) * extent,
            ],
            ..Vertex::default()
        })
        .collect()
}

/// Tilted accretion disk spun about its own axis.
#[inline]
pub fn disk_model(spin: f32) -> Mat4 {
    Mat4::from_rotation_x(DISK_TILT_X) * Mat4::from_rotation_z(spin)
}

/// Model matrix for a shell at `center` whose +Z axis faces `eye`.
pub fn facing_model(center: Vec3, eye: Vec3) -> Mat4 {
    let z = (eye - center).normalize_or_zero();
    if z == Vec3::ZERO {
        return Mat4::from_translation(center);
    }
    let mut x = Vec3::Y.cross(z);
    if x.length_squared() < 1e-8 {
        // eye straight above or below: any perpendicular axis works
        x = Vec3::X;
    }
    let x = x.normalize();
    let y = z.cross(x);
    Mat4::from_cols(
        x.extend(0.0),
        y.extend(0.0),
        z.extend(0.0),
        center.extend(1.0),
    )
}

/// Animation state for the scene objects.
#[derive(Clone, Debug, Default)]
pub struct SceneState {
    pub disk_spin: f32,
    /// Shader clock in seconds.
    pub time: f32,
}

impl SceneState {
    /// Scroll overrides whatever spin has accumulated.
    pub fn on_scroll(&mut self, disk_rotation: f32) {
        self.disk_spin = disk_rotation;
    }

    /// One frame forward; `elapsed_sec` is time since start.
    pub fn advance(&mut self, elapsed_sec: f32) {
        self.time = elapsed_sec.max(0.0);
        self.disk_spin += DISK_SPIN_PER_FRAME;
    }

    pub fn disk_model(&self) -> Mat4 {
        disk_model(self.disk_spin)
    }
}
