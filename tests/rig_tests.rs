// Host-side tests for the camera projection and orbit controls.

use blackhole_web::core::*;
use glam::Vec3;

fn camera_at(eye: Vec3) -> Camera {
    Camera::new(eye, Vec3::ZERO, 1.0)
}

#[test]
fn rig_starts_at_the_opening_pose() {
    let rig = Rig::new(16.0 / 9.0);
    assert_eq!(rig.position(), START_POSE.position);
    assert_eq!(rig.camera.look_at, START_POSE.target);
    assert_eq!(rig.orbit_target(), START_POSE.target);
    assert!(rig.orbit_enabled());
    assert!((rig.camera.fovy_radians - CAMERA_FOVY_DEG.to_radians()).abs() < 1e-6);
}

#[test]
fn look_at_point_projects_to_screen_centre() {
    let cam = camera_at(Vec3::new(0.0, 3.0, 10.0));
    let ndc = cam.project(Vec3::ZERO).expect("origin is in front");
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn point_behind_camera_has_no_projection() {
    let cam = Camera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, 20.0), 1.0);
    assert!(cam.project(Vec3::ZERO).is_none());
}

#[test]
fn point_beyond_far_plane_projects_past_unit_depth() {
    let cam = camera_at(Vec3::new(0.0, 0.0, 10.0));
    let ndc = cam.project(Vec3::new(0.0, 0.0, -5000.0)).expect("in front");
    assert!(ndc.z > 1.0);
}

#[test]
fn update_clamps_distance_to_limits() {
    let mut controls = OrbitControls::default();
    let mut far = camera_at(Vec3::new(0.0, 0.0, 50.0));
    assert!(controls.update(&mut far));
    assert!((far.eye.length() - ORBIT_MAX_DISTANCE).abs() < 1e-4, "{:?}", far.eye);

    let mut near = camera_at(Vec3::new(0.0, 0.0, 0.5));
    controls.update(&mut near);
    assert!((near.eye.length() - ORBIT_MIN_DISTANCE).abs() < 1e-4, "{:?}", near.eye);
}

#[test]
fn zoom_in_shrinks_radius_by_one_step() {
    let mut controls = OrbitControls::default();
    let mut cam = camera_at(Vec3::new(0.0, 0.0, 10.0));
    controls.zoom(-100.0);
    assert!(controls.has_pending_motion());
    controls.update(&mut cam);
    assert!((cam.eye.length() - 10.0 * ORBIT_ZOOM_STEP).abs() < 1e-4);
    assert!(!controls.has_pending_motion());
}

#[test]
fn rotation_is_damped_and_keeps_radius() {
    let mut controls = OrbitControls::default();
    let mut cam = camera_at(Vec3::new(0.0, 0.0, 10.0));
    controls.rotate(-100.0, 0.0, 600.0);
    controls.update(&mut cam);

    let total = std::f32::consts::TAU * 100.0 / 600.0;
    let applied = cam.eye.x.atan2(cam.eye.z);
    assert!((applied - total * ORBIT_DAMPING).abs() < 1e-4, "{}", applied);
    assert!((cam.eye.length() - 10.0).abs() < 1e-4);
    assert_eq!(cam.look_at, Vec3::ZERO);

    // the rest keeps coasting on later frames
    assert!(controls.has_pending_motion());
    controls.update(&mut cam);
    assert!(cam.eye.x.atan2(cam.eye.z) > applied);
}

#[test]
fn polar_angle_never_flips_over_the_pole() {
    let mut controls = OrbitControls::default();
    let mut cam = camera_at(Vec3::new(0.0, 0.0, 10.0));
    for _ in 0..200 {
        controls.rotate(0.0, 10_000.0, 600.0);
        controls.update(&mut cam);
    }
    assert!(cam.eye.y.is_finite());
    assert!((cam.eye.length() - 10.0).abs() < 1e-3);
}

#[test]
fn disabled_controls_leave_camera_alone() {
    let mut rig = Rig::new(1.0);
    rig.controls.zoom(-100.0);
    rig.set_orbit_enabled(false);
    let before = rig.camera.eye;

    assert!(!rig.update_controls());
    assert_eq!(rig.camera.eye, before);

    // input arriving while disabled is ignored
    rig.controls.rotate(300.0, 0.0, 600.0);
    rig.controls.zoom(50.0);
    assert!(!rig.controls.has_pending_motion());

    // and nothing queued earlier leaks out once re-enabled
    rig.set_orbit_enabled(true);
    rig.update_controls();
    assert!((rig.camera.eye - before).length() < 1e-4);
}

#[test]
fn orbit_follows_moved_target() {
    let mut rig = Rig::new(1.0);
    let target = Vec3::new(1.0, 0.0, 0.0);
    rig.set_orbit_target(target);
    rig.set_position(Vec3::new(1.0, 0.0, 5.0));
    rig.update_controls();
    assert_eq!(rig.camera.look_at, target);
    assert!(((rig.camera.eye - target).length() - 5.0).abs() < 1e-4);
}
