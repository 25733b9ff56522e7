// Host-side tests for the click-to-focus controller, driven with virtual time.

use blackhole_web::core::*;
use glam::Vec3;
use instant::Instant;
use std::time::Duration;

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn target(id: &str) -> Pose {
    FOCUS_TARGETS
        .iter()
        .find(|(name, _)| *name == id)
        .map(|(_, pose)| *pose)
        .expect("known focus target")
}

#[test]
fn unknown_component_is_rejected_without_side_effects() {
    let mut focus = FocusController::standard();
    let mut rig = Rig::new(1.0);
    let t0 = Instant::now();
    let before = rig.position();

    let err = focus.trigger("white-hole", t0, &mut rig).unwrap_err();
    assert_eq!(err, FocusError::UnknownComponent("white-hole".into()));
    assert_eq!(*focus.state(), FocusState::Idle);
    assert!(rig.orbit_enabled());
    assert_eq!(rig.position(), before);
    assert_eq!(focus.tick(t0 + ms(500), &mut rig), FocusTick::Idle);
    assert_eq!(rig.position(), before);
}

#[test]
fn trigger_starts_run_from_current_pose_and_disables_orbit() {
    let mut focus = FocusController::standard();
    let mut rig = Rig::new(1.0);
    rig.set_position(Vec3::new(1.0, 2.0, 3.0));
    let t0 = Instant::now();

    focus.trigger("accretion-disk", t0, &mut rig).unwrap();
    assert!(!rig.orbit_enabled());
    match focus.state() {
        FocusState::Animating(run) => {
            assert_eq!(run.start.position, Vec3::new(1.0, 2.0, 3.0));
            assert_eq!(run.start.target, Vec3::ZERO);
            assert_eq!(run.end, target("accretion-disk"));
            assert_eq!(run.duration, FOCUS_DURATION);
            assert_eq!(run.component, "accretion-disk");
        }
        other => panic!("expected a run, got {:?}", other),
    }
}

#[test]
fn second_trigger_while_running_is_busy_and_keeps_the_run() {
    let mut focus = FocusController::standard();
    let mut rig = Rig::new(1.0);
    let t0 = Instant::now();

    focus.trigger("event-horizon", t0, &mut rig).unwrap();
    let first = focus.state().clone();
    assert_eq!(
        focus.trigger("accretion-disk", t0 + ms(100), &mut rig),
        Err(FocusError::Busy)
    );
    assert_eq!(
        focus.select(&Selection::Reset, t0 + ms(200), &mut rig),
        Err(FocusError::Busy)
    );
    assert_eq!(*focus.state(), first);
}

#[test]
fn zero_elapsed_tick_leaves_camera_in_place() {
    let mut focus = FocusController::standard();
    let mut rig = Rig::new(1.0);
    let t0 = Instant::now();
    let before = rig.position();

    focus.trigger("event-horizon", t0, &mut rig).unwrap();
    assert_eq!(
        focus.tick(t0, &mut rig),
        FocusTick::Moving { progress: 0.0 }
    );
    assert!(approx_vec(rig.position(), before));
    assert!(!rig.orbit_enabled());
}

#[test]
fn full_duration_lands_on_target_and_highlights() {
    let mut focus = FocusController::standard();
    let mut rig = Rig::new(1.0);
    let t0 = Instant::now();

    focus.trigger("gravitational-lensing", t0, &mut rig).unwrap();
    let tick = focus.tick(t0 + FOCUS_DURATION, &mut rig);
    assert_eq!(
        tick,
        FocusTick::Finished {
            highlighted: Some("gravitational-lensing".into())
        }
    );
    let end = target("gravitational-lensing");
    assert!(approx_vec(rig.position(), end.position));
    assert!(approx_vec(rig.orbit_target(), end.target));
    assert!(approx_vec(rig.camera.look_at, end.target));
    assert!(rig.orbit_enabled());
    assert!(!focus.is_animating());
    assert_eq!(focus.highlighted(), Some("gravitational-lensing"));
}

#[test]
fn ticks_approach_target_from_the_current_pose() {
    let mut focus = FocusController::standard();
    let mut rig = Rig::new(1.0);
    let t0 = Instant::now();
    let start = rig.position();
    let end = target("event-horizon").position;

    focus.trigger("event-horizon", t0, &mut rig).unwrap();

    // halfway: eased 0.5 of the way from the start
    focus.tick(t0 + ms(500), &mut rig);
    let mid = start.lerp(end, 0.5);
    assert!(approx_vec(rig.position(), mid), "{:?}", rig.position());

    // next tick blends from where the camera is now, not from the start
    focus.tick(t0 + ms(750), &mut rig);
    let eased = ease_in_out_cubic(0.75);
    assert!(approx_vec(rig.position(), mid.lerp(end, eased)));
    assert!(!approx_vec(rig.position(), start.lerp(end, eased)));

    // still owned by the run until full progress
    assert!(!rig.orbit_enabled());
    assert!(focus.highlighted().is_none());
}

#[test]
fn late_tick_clamps_to_completion() {
    let mut focus = FocusController::standard();
    let mut rig = Rig::new(1.0);
    let t0 = Instant::now();

    focus.trigger("accretion-disk", t0, &mut rig).unwrap();
    let tick = focus.tick(t0 + ms(60_000), &mut rig);
    assert!(matches!(tick, FocusTick::Finished { .. }));
    assert!(approx_vec(rig.position(), target("accretion-disk").position));
}

#[test]
fn reset_returns_to_default_and_clears_highlight() {
    let mut focus = FocusController::standard();
    let mut rig = Rig::new(1.0);
    let t0 = Instant::now();

    focus.trigger("event-horizon", t0, &mut rig).unwrap();
    focus.tick(t0 + FOCUS_DURATION, &mut rig);
    assert_eq!(focus.highlighted(), Some("event-horizon"));

    let t1 = t0 + ms(2000);
    focus.select(&Selection::Reset, t1, &mut rig).unwrap();
    assert_eq!(focus.highlighted(), None);
    assert!(!rig.orbit_enabled());

    let tick = focus.tick(t1 + FOCUS_DURATION, &mut rig);
    assert_eq!(tick, FocusTick::Finished { highlighted: None });
    assert!(approx_vec(rig.position(), DEFAULT_POSE.position));
    assert!(rig.orbit_enabled());
}

#[test]
fn knows_every_focus_target_and_nothing_else() {
    let focus = FocusController::standard();
    for (id, _) in FOCUS_TARGETS {
        assert!(focus.knows(id), "{}", id);
    }
    assert!(!focus.knows("photon-sphere"));
    assert!(!focus.knows(""));
}

#[test]
fn reserved_reset_id_is_accepted_as_a_component() {
    let mut focus = FocusController::standard();
    let mut rig = Rig::new(1.0);
    rig.set_position(Vec3::new(4.0, 4.0, 4.0));
    let t0 = Instant::now();

    assert!(focus.knows(RESET_COMPONENT_ID));
    focus
        .select(&Selection::Component(RESET_COMPONENT_ID.into()), t0, &mut rig)
        .unwrap();
    focus.tick(t0 + FOCUS_DURATION, &mut rig);
    assert!(approx_vec(rig.position(), DEFAULT_POSE.position));
    assert_eq!(focus.highlighted(), None);
}

#[test]
fn zero_duration_completes_on_first_tick() {
    let mut focus = FocusController::new(FOCUS_TARGETS, DEFAULT_POSE, Duration::ZERO);
    let mut rig = Rig::new(1.0);
    let t0 = Instant::now();

    focus.trigger("event-horizon", t0, &mut rig).unwrap();
    let tick = focus.tick(t0, &mut rig);
    assert!(matches!(tick, FocusTick::Finished { .. }));
    assert!(approx_vec(rig.position(), target("event-horizon").position));
}

#[test]
fn new_run_accepted_after_completion() {
    let mut focus = FocusController::standard();
    let mut rig = Rig::new(1.0);
    let t0 = Instant::now();

    focus.trigger("event-horizon", t0, &mut rig).unwrap();
    focus.tick(t0 + FOCUS_DURATION, &mut rig);
    let t1 = t0 + ms(1500);
    assert!(focus.trigger("accretion-disk", t1, &mut rig).is_ok());
    // highlight stays on the previous component until the new run lands
    assert_eq!(focus.highlighted(), Some("event-horizon"));
    focus.tick(t1 + FOCUS_DURATION, &mut rig);
    assert_eq!(focus.highlighted(), Some("accretion-disk"));
}

#[test]
fn run_progress_is_clamped() {
    let t0 = Instant::now();
    let run = AnimationRun {
        start: START_POSE,
        end: DEFAULT_POSE,
        started_at: t0 + ms(100),
        duration: ms(1000),
        component: "event-horizon".into(),
    };
    assert_eq!(run.progress(t0), 0.0);
    assert!((run.progress(t0 + ms(600)) - 0.5).abs() < 1e-4);
    assert_eq!(run.progress(t0 + ms(5000)), 1.0);
    assert!(!run.is_reset());
}
