//! Camera and orbit controls.
//!
//! These types avoid platform-specific APIs so the choreography code can be
//! driven on the host in tests. The web frontend reads the camera to build
//! view/projection matrices and feeds pointer input into the controls.

use super::constants::*;
use glam::{Mat4, Vec3, Vec4};
use std::f32::consts::{PI, TAU};

/// Right-handed perspective camera that looks at a point.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(eye: Vec3, look_at: Vec3, aspect: f32) -> Self {
        Self {
            eye,
            look_at,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect.max(1e-6), self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.look_at, self.up)
    }
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world-space point to normalized device coordinates.
    ///
    /// Returns `None` when the point sits on or behind the eye plane. Depth is
    /// in \[0, 1\] for points between the near and far planes.
    pub fn project(&self, world: Vec3) -> Option<Vec3> {
        let clip = self.view_projection() * Vec4::new(world.x, world.y, world.z, 1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }
}

/// Free user-driven orbit around a target point.
///
/// Input only accumulates deltas; `update` applies a damped share of them to
/// the camera once per frame.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enabled: bool,
    pub damping: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    theta_delta: f32,
    phi_delta: f32,
    zoom_scale: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            enabled: true,
            damping: ORBIT_DAMPING,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            theta_delta: 0.0,
            phi_delta: 0.0,
            zoom_scale: 1.0,
        }
    }
}

impl OrbitControls {
    /// Queue a rotation from a pointer drag of `(dx, dy)` pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if !self.enabled {
            return;
        }
        let h = viewport_height.max(1.0);
        self.theta_delta -= TAU * dx / h * self.rotate_speed;
        self.phi_delta -= TAU * dy / h * self.rotate_speed;
    }

    /// Queue a dolly step from a wheel event; positive `delta_y` zooms out.
    pub fn zoom(&mut self, delta_y: f32) {
        if !self.enabled || delta_y == 0.0 {
            return;
        }
        let step = ORBIT_ZOOM_STEP.powf(self.zoom_speed);
        if delta_y < 0.0 {
            self.zoom_scale *= step;
        } else {
            self.zoom_scale /= step;
        }
    }

    pub fn has_pending_motion(&self) -> bool {
        self.theta_delta.abs() > 1e-6 || self.phi_delta.abs() > 1e-6 || self.zoom_scale != 1.0
    }

    /// Apply pending input to `camera`. Returns `false` when disabled, in
    /// which case pending input is dropped and the camera is left alone.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        if !self.enabled {
            self.theta_delta = 0.0;
            self.phi_delta = 0.0;
            self.zoom_scale = 1.0;
            return false;
        }
        let offset = camera.eye - self.target;
        let mut radius = offset.length();
        let (mut theta, mut phi) = if radius > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, PI / 2.0)
        };

        theta += self.theta_delta * self.damping;
        phi += self.phi_delta * self.damping;
        phi = phi.clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);

        radius = (radius * self.zoom_scale).clamp(self.min_distance, self.max_distance);

        let sin_phi = phi.sin();
        let offset = Vec3::new(
            radius * sin_phi * theta.sin(),
            radius * phi.cos(),
            radius * sin_phi * theta.cos(),
        );
        camera.eye = self.target + offset;
        camera.look_at = self.target;

        self.theta_delta *= 1.0 - self.damping;
        self.phi_delta *= 1.0 - self.damping;
        self.zoom_scale = 1.0;
        true
    }
}

/// The camera surface the choreography units read and write.
pub trait CameraRig {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    /// Aim the camera at `target` without moving it.
    fn look_at(&mut self, target: Vec3);
    fn orbit_target(&self) -> Vec3;
    fn set_orbit_target(&mut self, target: Vec3);
    fn orbit_enabled(&self) -> bool;
    fn set_orbit_enabled(&mut self, enabled: bool);
}

/// Camera plus the orbit controls attached to it.
#[derive(Clone, Debug)]
pub struct Rig {
    pub camera: Camera,
    pub controls: OrbitControls,
}

impl Rig {
    pub fn new(aspect: f32) -> Self {
        Self {
            camera: Camera::new(START_POSE.position, START_POSE.target, aspect),
            controls: OrbitControls {
                target: START_POSE.target,
                ..OrbitControls::default()
            },
        }
    }

    /// Let the orbit controls move the camera for this frame.
    pub fn update_controls(&mut self) -> bool {
        self.controls.update(&mut self.camera)
    }
}

impl CameraRig for Rig {
    fn position(&self) -> Vec3 {
        self.camera.eye
    }
    fn set_position(&mut self, position: Vec3) {
        self.camera.eye = position;
    }
    fn look_at(&mut self, target: Vec3) {
        self.camera.look_at = target;
    }
    fn orbit_target(&self) -> Vec3 {
        self.controls.target
    }
    fn set_orbit_target(&mut self, target: Vec3) {
        self.controls.target = target;
    }
    fn orbit_enabled(&self) -> bool {
        self.controls.enabled
    }
    fn set_orbit_enabled(&mut self, enabled: bool) {
        self.controls.enabled = enabled;
    }
}
