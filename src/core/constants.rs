use super::pose::Pose;
use glam::Vec3;
use std::time::Duration;

// Shared scene/choreography tuning constants used by the web frontend.

// Scroll phases: (name, threshold, camera position, label element id).
// Every phase looks at the origin.
pub const START_POSE: Pose = Pose::new(Vec3::new(0.0, 3.0, 10.0), Vec3::ZERO);
pub const PHASE_TABLE: [(&str, f32, Vec3, &str); 4] = [
    ("eventHorizon", 0.2, Vec3::new(0.0, 2.0, 6.0), "label-event-horizon"),
    ("accretion", 0.4, Vec3::new(2.0, 2.0, 5.0), "label-accretion"),
    ("lensing", 0.6, Vec3::new(-2.0, 1.0, 4.0), "label-lensing"),
    ("photon", 0.8, Vec3::new(0.0, 0.0, 3.0), "label-photon"),
];

// Focus fly-to
pub const FOCUS_DURATION: Duration = Duration::from_millis(1000);
pub const RESET_COMPONENT_ID: &str = "default"; // reserved id: back to DEFAULT_POSE
pub const DEFAULT_POSE: Pose = START_POSE;
pub const FOCUS_TARGETS: [(&str, Pose); 3] = [
    (
        "event-horizon",
        Pose::new(Vec3::new(0.0, 0.5, 2.5), Vec3::ZERO),
    ),
    (
        "accretion-disk",
        Pose::new(Vec3::new(2.0, 2.0, 4.0), Vec3::ZERO),
    ),
    (
        "gravitational-lensing",
        Pose::new(Vec3::new(-2.0, 1.0, 4.0), Vec3::ZERO),
    ),
];

// Anchored connector labels (id matches the element's data-target)
pub const ANCHOR_LABELS: [(&str, Vec3); 4] = [
    ("event-horizon", Vec3::new(0.0, 0.0, 1.0)),
    ("accretion-disk", Vec3::new(3.0, 1.0, 0.0)),
    ("lensing", Vec3::new(-2.0, 2.0, 2.0)),
    ("photon-sphere", Vec3::new(1.0, -2.0, 1.0)),
];

// Camera lens
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 2000.0; // starfield corners stay inside from any orbit distance

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05; // fraction of pending rotation applied per update
pub const ORBIT_MIN_DISTANCE: f32 = 2.0;
pub const ORBIT_MAX_DISTANCE: f32 = 20.0;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // per wheel notch, raised to ORBIT_ZOOM_SPEED
pub const ORBIT_POLAR_EPSILON: f32 = 1e-6;

// Black hole geometry
pub const HORIZON_RADIUS: f32 = 1.0;
pub const LENSING_RADIUS: f32 = 4.0;
pub const SPHERE_SEGMENTS: u32 = 128;

// Accretion disk
pub const DISK_INNER_RADIUS: f32 = 2.0;
pub const DISK_OUTER_RADIUS: f32 = 8.0;
pub const DISK_THETA_SEGMENTS: u32 = 128;
pub const DISK_PHI_SEGMENTS: u32 = 64;
pub const DISK_TILT_X: f32 = std::f32::consts::FRAC_PI_3;
pub const DISK_SPIN_PER_FRAME: f32 = 0.001; // radians

// Starfield
pub const STAR_COUNT: usize = 10_000;
pub const STARFIELD_EXTENT: f32 = 2000.0; // edge length of the cube centred on the origin
pub const STARFIELD_SEED: u64 = 42;
