//! Phase labels and anchored connector labels.

use super::constants::ANCHOR_LABELS;
use super::rig::Camera;
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

/// What a label follows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LabelBinding {
    /// Index into the scroll phase table.
    Phase(usize),
    /// Fixed world-space point.
    Anchor(Vec3),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub id: &'static str,
    pub binding: LabelBinding,
    pub opacity: f32,
    pub visible: bool,
    /// Projected pixel position, for anchored labels in front of the camera.
    pub screen: Option<Vec2>,
}

impl Label {
    pub fn phase(id: &'static str, phase_index: usize) -> Self {
        Self {
            id,
            binding: LabelBinding::Phase(phase_index),
            opacity: 0.0,
            visible: false,
            screen: None,
        }
    }

    pub fn anchor(id: &'static str, position: Vec3) -> Self {
        Self {
            id,
            binding: LabelBinding::Anchor(position),
            opacity: 0.0,
            visible: false,
            screen: None,
        }
    }

    /// World-space position, if the label is anchored.
    pub fn position(&self) -> Option<Vec3> {
        match self.binding {
            LabelBinding::Anchor(p) => Some(p),
            LabelBinding::Phase(_) => None,
        }
    }
}

/// Fixed set of labels created at setup.
#[derive(Clone, Debug, Default)]
pub struct LabelRegistry {
    labels: SmallVec<[Label; 4]>,
}

impl LabelRegistry {
    pub fn new(labels: impl IntoIterator<Item = Label>) -> Self {
        Self {
            labels: labels.into_iter().collect(),
        }
    }

    /// Connector labels at their standard anchor points.
    pub fn standard_anchors() -> Self {
        Self::new(ANCHOR_LABELS.iter().map(|(id, p)| Label::anchor(id, *p)))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Label> {
        self.labels.iter().find(|l| l.id == id)
    }

    /// Show the label bound to `active` at `opacity` and zero every other
    /// phase label. The active label never drops to zero, even when the
    /// eased value underflows.
    pub fn set_phase_opacity(&mut self, active: Option<usize>, opacity: f32) {
        for label in self.labels.iter_mut() {
            if let LabelBinding::Phase(i) = label.binding {
                label.opacity = if Some(i) == active {
                    opacity.clamp(f32::MIN_POSITIVE, 1.0)
                } else {
                    0.0
                };
                label.visible = label.opacity > 0.0;
            }
        }
    }

    /// Labels with nonzero opacity.
    pub fn visible_ids(&self) -> SmallVec<[&'static str; 4]> {
        self.labels
            .iter()
            .filter(|l| l.opacity > 0.0)
            .map(|l| l.id)
            .collect()
    }
}

/// Project every anchored label through `camera` into a `viewport`-sized
/// pixel space.
///
/// Returns the indices of labels whose visibility flipped this call.
pub fn project_anchors(
    registry: &mut LabelRegistry,
    camera: &Camera,
    viewport: Vec2,
) -> SmallVec<[usize; 4]> {
    let mut flipped = SmallVec::new();
    for (i, label) in registry.labels.iter_mut().enumerate() {
        let LabelBinding::Anchor(anchor) = label.binding else {
            continue;
        };
        let ndc = camera.project(anchor).filter(|ndc| ndc.z < 1.0);
        let now_visible = ndc.is_some();
        label.screen = ndc.map(|ndc| {
            Vec2::new(
                (ndc.x * 0.5 + 0.5) * viewport.x,
                (-ndc.y * 0.5 + 0.5) * viewport.y,
            )
        });
        label.opacity = if now_visible { 1.0 } else { 0.0 };
        if now_visible != label.visible {
            label.visible = now_visible;
            flipped.push(i);
        }
    }
    flipped
}
