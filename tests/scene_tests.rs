// Host-side tests for scene geometry and animation state.

use blackhole_web::core::*;
use glam::{Vec3, Vec4Swizzles};
use std::f32::consts::TAU;

#[test]
fn sphere_counts_skip_pole_triangles() {
    let mesh = uv_sphere(1.0, 16, 8);
    assert_eq!(mesh.vertices.len(), 17 * 9);
    assert_eq!(mesh.indices.len(), 16 * (2 * 8 - 2) * 3);
    let n = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < n));
}

#[test]
fn sphere_vertices_sit_on_the_radius() {
    let mesh = uv_sphere(HORIZON_RADIUS * 4.0, 24, 12);
    for v in &mesh.vertices {
        let p = Vec3::from_array(v.position);
        assert!((p.length() - 4.0).abs() < 1e-4, "{:?}", p);
        let n = Vec3::from_array(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn ring_spans_inner_to_outer_radius() {
    let mesh = ring(DISK_INNER_RADIUS, DISK_OUTER_RADIUS, 32, 4);
    assert_eq!(mesh.vertices.len(), 33 * 5);
    assert_eq!(mesh.indices.len(), 32 * 4 * 6);

    let radii: Vec<f32> = mesh
        .vertices
        .iter()
        .map(|v| Vec3::from_array(v.position).length())
        .collect();
    let min = radii.iter().cloned().fold(f32::MAX, f32::min);
    let max = radii.iter().cloned().fold(0.0, f32::max);
    assert!((min - DISK_INNER_RADIUS).abs() < 1e-4);
    assert!((max - DISK_OUTER_RADIUS).abs() < 1e-3);
    assert!(mesh.vertices.iter().all(|v| v.position[2] == 0.0));
    assert!(mesh
        .vertices
        .iter()
        .all(|v| v.uv.iter().all(|c| (0.0..=1.0).contains(c))));
}

#[test]
fn starfield_is_seeded_and_bounded() {
    let a = starfield(500, STARFIELD_EXTENT, STARFIELD_SEED);
    let b = starfield(500, STARFIELD_EXTENT, STARFIELD_SEED);
    let c = starfield(500, STARFIELD_EXTENT, STARFIELD_SEED + 1);
    assert_eq!(a.len(), 500);
    assert_eq!(a, b);
    assert_ne!(a, c);

    let half = STARFIELD_EXTENT / 2.0;
    for v in &a {
        assert!(v.position.iter().all(|c| c.abs() <= half));
    }
}

#[test]
fn starfield_fills_the_cube() {
    let stars = starfield(2000, 100.0, 7);
    let mean = stars
        .iter()
        .map(|v| Vec3::from_array(v.position))
        .sum::<Vec3>()
        / stars.len() as f32;
    assert!(mean.length() < 5.0, "{:?}", mean);
    let spread = stars
        .iter()
        .map(|v| v.position[0].abs())
        .fold(0.0_f32, f32::max);
    assert!(spread > 40.0);
}

#[test]
fn disk_model_tilts_the_disk_normal() {
    let normal = disk_model(0.0) * Vec3::Z.extend(0.0);
    let expected = Vec3::new(0.0, -DISK_TILT_X.sin(), DISK_TILT_X.cos());
    assert!((normal.xyz() - expected).length() < 1e-5, "{:?}", normal);

    // spin turns around the disk's own axis, leaving the normal alone
    let spun = disk_model(1.3) * Vec3::Z.extend(0.0);
    assert!((spun.xyz() - expected).length() < 1e-5);
}

#[test]
fn facing_model_points_plus_z_at_the_eye() {
    let eye = Vec3::new(3.0, 4.0, 5.0);
    let m = facing_model(Vec3::ZERO, eye);
    let z = (m * Vec3::Z.extend(0.0)).xyz();
    assert!((z - eye.normalize()).length() < 1e-5);
    // orthonormal
    assert!((m.x_axis.xyz().length() - 1.0).abs() < 1e-5);
    assert!(m.x_axis.xyz().dot(z).abs() < 1e-5);

    let overhead = facing_model(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0));
    assert!(overhead.is_finite());
    assert!(((overhead * Vec3::Z.extend(0.0)).xyz() - Vec3::Y).length() < 1e-5);
}

#[test]
fn scene_state_spins_and_scroll_overrides() {
    let mut scene = SceneState::default();
    scene.advance(0.5);
    scene.advance(1.0);
    assert!((scene.disk_spin - 2.0 * DISK_SPIN_PER_FRAME).abs() < 1e-7);
    assert_eq!(scene.time, 1.0);

    scene.on_scroll(0.5 * TAU);
    assert_eq!(scene.disk_spin, 0.5 * TAU);
    scene.advance(1.1);
    assert!((scene.disk_spin - (0.5 * TAU + DISK_SPIN_PER_FRAME)).abs() < 1e-6);
    assert_eq!(scene.disk_model(), disk_model(scene.disk_spin));
}
