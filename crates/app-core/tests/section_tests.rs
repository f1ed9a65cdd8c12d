// Host-side tests for section detection and the one-shot kick.

use app_core::*;

fn fresh() -> SceneState {
    SceneState::new(SceneParams::default(), Viewport::new(1200.0, 800.0), 0.0)
}

fn scroll(state: SceneState, t: f32, y: f32) -> SceneState {
    let mut events = EventBatch::new();
    events.push(InputEvent::Scroll { y });
    run(state, Tick::new(t, events))
}

#[test]
fn kick_fires_once_per_crossing() {
    let mut state = fresh();
    state = scroll(state, 0.01, 350.0);
    assert_eq!(state.kick_count(), 0);
    state = scroll(state, 0.02, 450.0);
    assert_eq!(state.kick_count(), 1);
    state = scroll(state, 0.03, 460.0);
    assert_eq!(state.kick_count(), 1, "re-fired within the same section");
    assert_eq!(state.current_section(), 1);
    assert_eq!(state.active_tweens().len(), 1);
    assert_eq!(state.active_tweens()[0].target, 1);
}

#[test]
fn scrolling_back_fires_again() {
    let mut state = fresh();
    state = scroll(state, 0.1, 450.0);
    state = scroll(state, 0.2, 100.0);
    assert_eq!(state.kick_count(), 2);
    assert_eq!(state.current_section(), 0);
}

#[test]
fn kick_adds_offset_to_current_rotation() {
    let mut state = fresh();
    state = scroll(state, 0.0, 800.0);
    let dt = 1.0 / 60.0;
    let mut t = 0.0;
    while t < 2.0 {
        t += dt;
        state = run(state, Tick::at(t));
    }
    assert!(state.active_tweens().is_empty());
    let kicked = &state.objects[1];
    let idle = &state.objects[0];
    assert!((kicked.rotation.x - idle.rotation.x - KICK_OFFSET[0]).abs() < 1e-3);
    assert!((kicked.rotation.y - idle.rotation.y - KICK_OFFSET[1]).abs() < 1e-3);
    assert!((kicked.rotation.z - KICK_OFFSET[2]).abs() < 1e-3);
    assert_eq!(idle.rotation.z, 0.0);
}

#[test]
fn overscroll_past_the_end_does_not_rekick() {
    let mut state = fresh();
    state = scroll(state, 0.1, 1600.0);
    assert_eq!(state.kick_count(), 1);
    assert_eq!(state.active_tweens()[0].target, 2);
    state = scroll(state, 0.2, 2500.0);
    state = scroll(state, 0.3, 1600.0);
    assert_eq!(state.current_section(), 2);
    assert_eq!(state.kick_count(), 1);
}

#[test]
fn far_overscroll_lands_on_last_object() {
    let mut state = fresh();
    state = scroll(state, 0.0, 800.0 * 9.0);
    assert_eq!(state.current_section(), 2);
    assert_eq!(state.active_tweens()[0].target, 2);
}

#[test]
fn top_bounce_fires_no_kick() {
    let mut state = fresh();
    state = scroll(state, 0.1, -500.0);
    state = scroll(state, 0.2, 0.0);
    assert_eq!(state.current_section(), 0);
    assert_eq!(state.kick_count(), 0);
}

#[test]
fn negative_overscroll_targets_first_object() {
    let mut state = fresh();
    state = scroll(state, 0.0, 1600.0);
    state = scroll(state, 0.1, -500.0);
    assert_eq!(state.current_section(), 0);
    assert_eq!(state.kick_count(), 2);
    assert_eq!(state.active_tweens().last().map(|t| t.target), Some(0));
}

#[test]
fn kick_after_stalled_frame_still_animates() {
    let mut state = fresh();
    state = run(state, Tick::at(0.1));
    // A five second stall delivers the scroll together with a huge delta.
    state = scroll(state, 5.1, 800.0);
    assert_eq!(state.active_tweens().len(), 1);
    assert_eq!(state.active_tweens()[0].progress(), 0.0);
    state = run(state, Tick::at(5.1 + 0.75));
    let p = state.active_tweens()[0].progress();
    assert!((p - 0.5).abs() < 1e-3, "progress {}", p);
}
