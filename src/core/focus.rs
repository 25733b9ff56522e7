//! Click-to-focus camera fly-to.
//!
//! A selection starts a timed run that owns the camera until it completes.
//! Orbit control is disabled for the whole run and re-enabled on the tick
//! that reaches full progress. Requests that arrive mid-run are rejected.

use super::constants::{DEFAULT_POSE, FOCUS_DURATION, FOCUS_TARGETS, RESET_COMPONENT_ID};
use super::ease::ease_in_out_cubic;
use super::pose::Pose;
use super::rig::CameraRig;
use fnv::FnvHashMap;
use instant::Instant;
use std::time::Duration;
use thiserror::Error;

/// A user request for the focus controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Component(String),
    Reset,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FocusError {
    #[error("unknown component `{0}`")]
    UnknownComponent(String),
    #[error("camera transition already in flight")]
    Busy,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationRun {
    pub start: Pose,
    pub end: Pose,
    pub started_at: Instant,
    pub duration: Duration,
    pub component: String,
}

impl AnimationRun {
    /// Elapsed fraction of the run in \[0, 1\].
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        if now <= self.started_at {
            return 0.0;
        }
        let elapsed = now.duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_reset(&self) -> bool {
        self.component == RESET_COMPONENT_ID
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FocusState {
    Idle,
    Animating(AnimationRun),
}

/// What a single tick did.
#[derive(Clone, Debug, PartialEq)]
pub enum FocusTick {
    Idle,
    Moving { progress: f32 },
    /// The run reached its pose; carries the component now highlighted.
    Finished { highlighted: Option<String> },
}

#[derive(Clone, Debug)]
pub struct FocusController {
    targets: FnvHashMap<String, Pose>,
    default_pose: Pose,
    duration: Duration,
    state: FocusState,
    highlighted: Option<String>,
}

impl FocusController {
    pub fn new<'a>(
        targets: impl IntoIterator<Item = (&'a str, Pose)>,
        default_pose: Pose,
        duration: Duration,
    ) -> Self {
        Self {
            targets: targets
                .into_iter()
                .map(|(id, pose)| (id.to_string(), pose))
                .collect(),
            default_pose,
            duration,
            state: FocusState::Idle,
            highlighted: None,
        }
    }

    /// Event horizon, accretion disk, and lensing views with a one-second
    /// fly-to.
    pub fn standard() -> Self {
        Self::new(FOCUS_TARGETS, DEFAULT_POSE, FOCUS_DURATION)
    }

    pub fn state(&self) -> &FocusState {
        &self.state
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, FocusState::Animating(_))
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    pub fn knows(&self, component: &str) -> bool {
        component == RESET_COMPONENT_ID || self.targets.contains_key(component)
    }

    pub fn select<R: CameraRig + ?Sized>(
        &mut self,
        selection: &Selection,
        now: Instant,
        rig: &mut R,
    ) -> Result<(), FocusError> {
        match selection {
            Selection::Component(id) => self.trigger(id, now, rig),
            Selection::Reset => self.reset(now, rig),
        }
    }

    /// Start flying to `component`'s pose.
    pub fn trigger<R: CameraRig + ?Sized>(
        &mut self,
        component: &str,
        now: Instant,
        rig: &mut R,
    ) -> Result<(), FocusError> {
        if self.is_animating() {
            return Err(FocusError::Busy);
        }
        let end = if component == RESET_COMPONENT_ID {
            self.default_pose
        } else {
            *self
                .targets
                .get(component)
                .ok_or_else(|| FocusError::UnknownComponent(component.to_string()))?
        };

        let start = Pose::new(rig.position(), rig.orbit_target());
        rig.set_orbit_enabled(false);
        if component == RESET_COMPONENT_ID {
            self.highlighted = None;
        }
        log::info!("[focus] flying to {} over {:?}", component, self.duration);
        self.state = FocusState::Animating(AnimationRun {
            start,
            end,
            started_at: now,
            duration: self.duration,
            component: component.to_string(),
        });
        Ok(())
    }

    /// Fly back to the default pose and clear highlighting.
    pub fn reset<R: CameraRig + ?Sized>(&mut self, now: Instant, rig: &mut R) -> Result<(), FocusError> {
        self.trigger(RESET_COMPONENT_ID, now, rig)
    }

    /// Advance the active run to `now`.
    ///
    /// Each tick moves the camera an eased fraction of the *remaining*
    /// distance, so the path approaches the end pose rather than following a
    /// straight start-to-end blend.
    pub fn tick<R: CameraRig + ?Sized>(&mut self, now: Instant, rig: &mut R) -> FocusTick {
        let FocusState::Animating(run) = &self.state else {
            return FocusTick::Idle;
        };
        let progress = run.progress(now);
        let eased = ease_in_out_cubic(progress);

        let position = rig.position().lerp(run.end.position, eased);
        let target = rig.orbit_target().lerp(run.end.target, eased);
        rig.set_position(position);
        rig.set_orbit_target(target);
        rig.look_at(target);

        if progress < 1.0 {
            return FocusTick::Moving { progress };
        }

        self.highlighted = if run.is_reset() {
            None
        } else {
            Some(run.component.clone())
        };
        log::info!("[focus] arrived at {}", run.component);
        self.state = FocusState::Idle;
        rig.set_orbit_enabled(true);
        FocusTick::Finished {
            highlighted: self.highlighted.clone(),
        }
    }
}
