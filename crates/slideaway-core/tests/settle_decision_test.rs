//! The pointer-end settle decision: half-distance boundary, tie-break toward
//! open, and the rightward-delta-closes priority.

use slideaway_core::RevealOptions;
use slideaway_testing::GestureRobot;

fn robot_with_max_100() -> GestureRobot {
    GestureRobot::new(RevealOptions {
        max_slide_distance: 100.0,
        ..RevealOptions::default()
    })
}

#[test]
fn exactly_half_with_leftward_delta_settles_open() {
    let mut robot = robot_with_max_100();

    robot.touch_start(200.0, 0.0);
    robot.touch_move(150.0, 0.0);
    assert_eq!(robot.controller().offset_x(), -50.0);

    robot.touch_end();
    assert_eq!(robot.controller().offset_x(), -100.0);
    assert_eq!(robot.sliding_transform().as_deref(), Some("translateX(-100px)"));
}

#[test]
fn one_short_of_half_settles_closed() {
    let mut robot = robot_with_max_100();

    robot.touch_start(200.0, 0.0);
    robot.touch_move(151.0, 0.0);
    assert_eq!(robot.controller().offset_x(), -49.0);

    robot.touch_end();
    assert_eq!(robot.controller().offset_x(), 0.0);
}

#[test]
fn exactly_half_with_rightward_delta_settles_closed() {
    let mut robot = robot_with_max_100();

    robot.touch_start(200.0, 0.0);
    robot.touch_move(140.0, 0.0);
    assert_eq!(robot.controller().offset_x(), -60.0);

    // Finish with a rightward move back to exactly the half mark.
    robot.touch_move(150.0, 0.0);
    assert_eq!(robot.controller().offset_x(), -50.0);

    robot.touch_end();
    assert_eq!(robot.controller().offset_x(), 0.0);
}

#[test]
fn rightward_final_delta_closes_even_past_the_threshold() {
    let mut robot = robot_with_max_100();

    robot.touch_start(300.0, 0.0);
    robot.touch_move(200.0, 0.0);
    assert_eq!(robot.controller().offset_x(), -100.0);

    // Still far past half, but the last delta points right.
    robot.touch_move(205.0, 0.0);
    assert_eq!(robot.controller().offset_x(), -95.0);

    robot.touch_end();
    assert_eq!(robot.controller().offset_x(), 0.0);
}

#[test]
fn below_half_always_closes() {
    let mut robot = robot_with_max_100();

    robot.touch_start(100.0, 0.0);
    robot.touch_move(70.0, 0.0);
    assert_eq!(robot.controller().offset_x(), -30.0);

    robot.touch_end();
    assert_eq!(robot.controller().offset_x(), 0.0);
}

#[test]
fn tap_on_an_open_panel_leaves_it_open() {
    let mut robot = robot_with_max_100();

    robot.swipe((300.0, 0.0), (150.0, 0.0));
    assert_eq!(robot.controller().offset_x(), -100.0);

    // Start and end with no move: the final delta is zero, not rightward.
    robot.touch_start(50.0, 0.0);
    robot.touch_end();
    assert_eq!(robot.controller().offset_x(), -100.0);
}

#[test]
fn settle_always_animates_with_the_configured_duration() {
    let mut robot = GestureRobot::new(RevealOptions {
        max_slide_distance: 100.0,
        animation_duration_ms: 150,
    });

    robot.swipe((200.0, 0.0), (120.0, 0.0));
    assert_eq!(robot.transition_duration().as_deref(), Some("150ms"));
}
