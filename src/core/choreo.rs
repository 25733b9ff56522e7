//! Scroll choreography: scroll progress to camera pose and phase label.
//!
//! The scroll range is split into phases by ascending thresholds. Inside a
//! phase the camera is blended from the previous phase's pose to this
//! phase's pose with a cubic ease, and only this phase's label shows.

use super::constants::{PHASE_TABLE, START_POSE};
use super::ease::{ease_in_out_cubic, local_progress};
use super::labels::{Label, LabelRegistry};
use super::pose::Pose;
use super::rig::CameraRig;
use std::f32::consts::TAU;
use thiserror::Error;

/// Convert a raw scroll offset into progress in \[0, 1\].
///
/// A zero, negative, or non-finite scrollable range yields 0.
#[inline]
pub fn scroll_progress(offset: f32, range: f32) -> f32 {
    if !offset.is_finite() || !range.is_finite() || range <= 0.0 {
        return 0.0;
    }
    (offset / range).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phase {
    pub name: &'static str,
    pub threshold: f32,
    pub pose: Pose,
    pub label: &'static str,
}

#[derive(Debug, Error, PartialEq)]
pub enum PhaseError {
    #[error("phase table is empty")]
    Empty,
    #[error("phase `{name}` threshold {threshold} is outside (0, 1]")]
    OutOfRange { name: &'static str, threshold: f32 },
    #[error("phase `{name}` threshold does not increase on the previous phase")]
    Unordered { name: &'static str },
}

/// Result of evaluating one progress value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub progress: f32,
    /// Index of the phase whose label shows, `None` at the very start.
    pub phase: Option<usize>,
    pub local: f32,
    pub eased: f32,
    pub pose: Pose,
}

#[derive(Clone, Debug)]
pub struct ScrollChoreographer {
    start: Pose,
    phases: Vec<Phase>,
    labels: LabelRegistry,
    progress: f32,
}

impl ScrollChoreographer {
    pub fn new(start: Pose, phases: Vec<Phase>) -> Result<Self, PhaseError> {
        if phases.is_empty() {
            return Err(PhaseError::Empty);
        }
        let mut prev = 0.0_f32;
        for phase in &phases {
            if !(phase.threshold > 0.0 && phase.threshold <= 1.0) {
                return Err(PhaseError::OutOfRange {
                    name: phase.name,
                    threshold: phase.threshold,
                });
            }
            if phase.threshold <= prev {
                return Err(PhaseError::Unordered { name: phase.name });
            }
            prev = phase.threshold;
        }
        let labels = LabelRegistry::new(
            phases
                .iter()
                .enumerate()
                .map(|(i, phase)| Label::phase(phase.label, i)),
        );
        Ok(Self {
            start,
            phases,
            labels,
            progress: 0.0,
        })
    }

    /// The event horizon → accretion → lensing → photon sequence.
    pub fn standard() -> Result<Self, PhaseError> {
        Self::new(START_POSE, standard_phases())
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn labels(&self) -> &LabelRegistry {
        &self.labels
    }

    /// Progress of the last applied sample.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Disk spin implied by the last applied sample: one full turn over the
    /// whole scroll range.
    pub fn disk_rotation(&self) -> f32 {
        self.progress * TAU
    }

    /// Evaluate `progress` without touching any state.
    pub fn sample(&self, progress: f32) -> ScrollSample {
        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        if p <= 0.0 {
            return ScrollSample {
                progress: 0.0,
                phase: None,
                local: 0.0,
                eased: 0.0,
                pose: self.start,
            };
        }

        let last = self.phases.len() - 1;
        let i = self
            .phases
            .iter()
            .position(|phase| p <= phase.threshold)
            .unwrap_or(last);
        let (from_threshold, from_pose) = match i.checked_sub(1) {
            Some(prev) => (self.phases[prev].threshold, self.phases[prev].pose),
            None => (0.0, self.start),
        };
        let to = &self.phases[i];
        let local = local_progress(p, from_threshold, to.threshold);
        let eased = ease_in_out_cubic(local);

        ScrollSample {
            progress: p,
            phase: Some(i),
            local,
            eased,
            pose: from_pose.lerp(to.pose, eased),
        }
    }

    /// Evaluate `progress`, move the camera, and update label opacities.
    pub fn apply<R: CameraRig + ?Sized>(&mut self, progress: f32, rig: &mut R) -> ScrollSample {
        let sample = self.sample(progress);
        self.progress = sample.progress;
        rig.set_position(sample.pose.position);
        rig.look_at(sample.pose.target);
        rig.set_orbit_target(sample.pose.target);
        self.labels.set_phase_opacity(sample.phase, sample.eased);
        sample
    }
}

pub fn standard_phases() -> Vec<Phase> {
    PHASE_TABLE
        .iter()
        .map(|&(name, threshold, position, label)| Phase {
            name,
            threshold,
            pose: Pose::new(position, START_POSE.target),
            label,
        })
        .collect()
}
