//! Full gesture lifecycles through the robot: the reference scenario,
//! clamping, offset persistence, and the mouse-shaped path.

use slideaway_core::{GestureState, RevealOptions, StyleProperty};
use slideaway_testing::GestureRobot;

fn options(max_slide_distance: f32) -> RevealOptions {
    RevealOptions {
        max_slide_distance,
        ..RevealOptions::default()
    }
}

#[test]
fn reference_scenario_opens_fully() {
    let mut robot = GestureRobot::new(options(80.0));

    robot.touch_start(100.0, 50.0);

    // deltaX = -60, deltaY = 2: horizontal intent, lock engaged, clamp(-60).
    robot.touch_move(40.0, 52.0);
    assert_eq!(robot.body_position().as_deref(), Some("fixed"));
    assert!(robot.controller().gesture().scroll_locked);
    assert!(robot.controller().gesture().axis_resolved);
    assert_eq!(robot.sliding_transform().as_deref(), Some("translateX(-60px)"));
    assert_eq!(robot.transition_duration().as_deref(), Some("0ms"));

    // Incremental deltaX = -10: clamp(-70).
    robot.touch_move(30.0, 53.0);
    assert_eq!(robot.sliding_transform().as_deref(), Some("translateX(-70px)"));

    // |-70| >= 40 and the last delta was leftward: settles fully open.
    robot.touch_end();
    assert_eq!(robot.controller().offset_x(), -80.0);
    assert_eq!(robot.sliding_transform().as_deref(), Some("translateX(-80px)"));
    assert_eq!(robot.transition_duration().as_deref(), Some("300ms"));
    assert_eq!(robot.body_attr(), "");
    assert_eq!(*robot.controller().gesture(), GestureState::default());
}

#[test]
fn offset_stays_clamped_through_arbitrary_move_sequences() {
    let max = 50.0;
    let mut robot = GestureRobot::new(options(max));

    robot.touch_start(0.0, 0.0);
    for x in [-30.0, -100.0, -90.0, 40.0, 10.0, -200.0, -199.0, 300.0] {
        robot.touch_move(x, 0.0);
        let offset = robot.controller().offset_x();
        assert!(
            (-max..=0.0).contains(&offset),
            "offset {offset} escaped [-{max}, 0] at move x={x}"
        );
    }

    robot.touch_end();
    let offset = robot.controller().offset_x();
    assert!((-max..=0.0).contains(&offset));
}

#[test]
fn settled_offset_persists_into_the_next_gesture() {
    let mut robot = GestureRobot::new(options(80.0));

    robot.swipe((100.0, 0.0), (10.0, 0.0));
    assert_eq!(robot.controller().offset_x(), -80.0);

    // A short rightward drag from the open position crosses the half mark
    // (the panel is already fully open) and the positive delta closes it.
    robot.touch_start(10.0, 0.0);
    robot.touch_move(20.0, 0.0);
    assert_eq!(robot.controller().offset_x(), -70.0);
    robot.touch_end();
    assert_eq!(robot.controller().offset_x(), 0.0);
    assert_eq!(robot.sliding_transform().as_deref(), Some("translateX(0px)"));
}

#[test]
fn mouse_shaped_events_drive_the_same_machine() {
    let mut robot = GestureRobot::new(options(80.0));

    robot.mouse_start(100.0, 50.0);
    robot.mouse_move(40.0, 52.0);
    assert_eq!(robot.sliding_transform().as_deref(), Some("translateX(-60px)"));
    robot.mouse_end();
    assert_eq!(robot.controller().offset_x(), -80.0);
}

#[test]
fn second_pointer_start_overwrites_the_first() {
    let mut robot = GestureRobot::new(options(80.0));

    robot.touch_start(0.0, 0.0);
    robot.touch_start(100.0, 50.0);
    robot.touch_move(40.0, 52.0);
    assert_eq!(robot.controller().offset_x(), -60.0);
}

#[test]
fn move_rebases_start_so_deltas_stay_incremental() {
    let mut robot = GestureRobot::new(options(80.0));

    robot.touch_start(100.0, 0.0);
    robot.touch_move(90.0, 0.0);
    robot.touch_move(90.0, 0.0);
    // The repeated position contributes a zero delta, not a cumulative -10.
    assert_eq!(robot.controller().offset_x(), -10.0);
    assert_eq!(robot.controller().gesture().delta_x, 0.0);
}

#[test]
fn zero_max_slide_distance_stays_total() {
    let mut robot = GestureRobot::new(RevealOptions::default());

    robot.swipe((100.0, 0.0), (10.0, 0.0));
    // half = 0/2 = 0 is well-defined; the panel has nowhere to go.
    assert_eq!(robot.controller().offset_x(), 0.0);
    assert_eq!(
        robot.sliding_panel().style(StyleProperty::Position).as_deref(),
        Some("absolute")
    );
}
