// Host-side tests for the frame step: spin, parallax, scroll mapping, resize.

use app_core::*;
use glam::Vec2;

fn fresh() -> SceneState {
    SceneState::new(SceneParams::default(), Viewport::new(1200.0, 800.0), 0.0)
}

fn tick_with(elapsed: f32, events: Vec<InputEvent>) -> Tick {
    Tick::new(elapsed, events.into_iter().collect())
}

#[test]
fn first_tick_delta_is_first_sample() {
    let state = run(fresh(), Tick::at(0.5));
    for obj in &state.objects {
        assert!((obj.rotation.x - 0.5 * SPIN_RATE_X).abs() < 1e-6);
        assert!((obj.rotation.y - 0.5 * SPIN_RATE_Y).abs() < 1e-6);
        assert_eq!(obj.rotation.z, 0.0);
    }
}

#[test]
fn spin_is_monotonic_over_ticks() {
    let mut state = fresh();
    let mut prev: Vec<_> = state.objects.iter().map(|o| o.rotation).collect();
    let mut t = 0.0;
    for i in 0..240 {
        // Irregular frame pacing, including a zero-length frame.
        t += if i % 7 == 0 { 0.0 } else { 1.0 / 60.0 + (i % 3) as f32 * 0.004 };
        state = run(state, Tick::at(t));
        for (obj, p) in state.objects.iter().zip(&prev) {
            assert!(obj.rotation.x >= p.x);
            assert!(obj.rotation.y >= p.y);
        }
        prev = state.objects.iter().map(|o| o.rotation).collect();
    }
}

#[test]
fn large_delta_is_not_clamped_by_default() {
    let state = run(fresh(), Tick::at(120.0));
    assert!((state.objects[0].rotation.x - 12.0).abs() < 1e-4);
}

#[test]
fn optional_delta_clamp() {
    let params = SceneParams {
        max_frame_delta: Some(0.1),
        ..SceneParams::default()
    };
    let state = SceneState::new(params, Viewport::new(1200.0, 800.0), 0.0);
    let state = run(state, Tick::at(120.0));
    assert!((state.objects[0].rotation.x - 0.1 * SPIN_RATE_X).abs() < 1e-6);
}

#[test]
fn rig_converges_without_overshoot() {
    let mut state = fresh();
    // Pointer at the bottom-right quarter point: cursor (0.25, 0.25).
    state = run(
        state,
        tick_with(0.0, vec![InputEvent::PointerMove { x: 900.0, y: 600.0 }]),
    );
    let target = Vec2::new(0.25, -0.25);
    let dt = 1.0 / 60.0;
    let mut prev_dist = (target - state.rig).length();
    for i in 1..=2000 {
        state = run(state, Tick::at(i as f32 * dt));
        let dist = (target - state.rig).length();
        assert!(dist <= prev_dist + 1e-7, "distance grew at step {i}");
        assert!(state.rig.x <= target.x + 1e-6);
        assert!(state.rig.y >= target.y - 1e-6);
        prev_dist = dist;
    }
    assert!(prev_dist < 1e-3, "rig still {prev_dist} away");
}

#[test]
fn long_frame_does_not_overshoot_rig() {
    let mut state = fresh();
    state.apply_event(&InputEvent::PointerMove { x: 1200.0, y: 0.0 });
    let state = run(state, Tick::at(10.0));
    assert!((state.rig - Vec2::new(0.5, 0.5)).length() < 1e-6);
}

#[test]
fn camera_y_is_history_free() {
    let mut a = fresh();
    let mut b = fresh();
    a = run(a, tick_with(0.1, vec![InputEvent::Scroll { y: 1600.0 }]));
    a = run(a, tick_with(0.2, vec![InputEvent::Scroll { y: 200.0 }]));
    a = run(a, tick_with(0.3, vec![InputEvent::Scroll { y: 1000.0 }]));
    b = run(b, tick_with(5.0, vec![InputEvent::Scroll { y: 1000.0 }]));
    assert_eq!(a.camera.position.y, b.camera.position.y);
    assert_eq!(a.camera.position.y, -1000.0 / 800.0 * DEFAULT_OBJECTS_DISTANCE);
}

#[test]
fn resize_updates_aspect_only() {
    let mut state = run(fresh(), Tick::at(1.0));
    let before: Vec<_> = state
        .objects
        .iter()
        .map(|o| (o.position, o.rotation))
        .collect();
    state.apply_event(&InputEvent::Resize {
        width: 1000.0,
        height: 500.0,
    });
    assert_eq!(state.camera.aspect, 2.0);
    assert_eq!(state.viewport, Viewport::new(1000.0, 500.0));
    let after: Vec<_> = state
        .objects
        .iter()
        .map(|o| (o.position, o.rotation))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn events_apply_in_queue_order() {
    let mut queue = EventQueue::new();
    queue.push(InputEvent::Scroll { y: 900.0 });
    queue.push(InputEvent::Resize {
        width: 1200.0,
        height: 400.0,
    });
    queue.push(InputEvent::Scroll { y: 900.0 });
    let state = run(fresh(), Tick::new(0.0, queue.drain()));
    // 900/800 -> section 1, then 900/400 -> section 2 after the resize.
    assert_eq!(state.current_section(), 2);
    assert_eq!(state.kick_count(), 2);
    assert!(queue.is_empty());
}

#[test]
fn queue_coalesces_pointer_but_not_scroll() {
    let mut queue = EventQueue::new();
    queue.push(InputEvent::PointerMove { x: 1.0, y: 1.0 });
    queue.push(InputEvent::PointerMove { x: 2.0, y: 2.0 });
    queue.push(InputEvent::Scroll { y: 10.0 });
    queue.push(InputEvent::Scroll { y: 20.0 });
    let batch = queue.drain();
    assert_eq!(batch.len(), 3);
    assert_eq!(batch[0], InputEvent::PointerMove { x: 2.0, y: 2.0 });
}

#[test]
fn param_edits_flow_into_render_frame() {
    let mut state = fresh();
    assert!(state.render_frame().layout_changed);
    assert!(!state.render_frame().layout_changed);

    let red = Color::from_hex("#ff0000").unwrap();
    state = run(
        state,
        tick_with(
            0.0,
            vec![
                InputEvent::Param(ParamEdit::MaterialColor(red)),
                InputEvent::Param(ParamEdit::ObjectsDistance(5.0)),
            ],
        ),
    );
    let frame = state.render_frame();
    assert_eq!(frame.material_color, [1.0, 0.0, 0.0]);
    assert!(frame.layout_changed);
    assert_eq!(frame.models.len(), 3);
    assert_eq!(state.objects[2].position.y, -10.0);
}
