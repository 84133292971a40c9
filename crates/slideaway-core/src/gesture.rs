//! Per-gesture transient state.

/// The mutable record tracking one gesture from pointer-start to pointer-end.
///
/// Created with all-zero/false defaults, mutated in place across the
/// lifecycle, and reset to the defaults at the end of every pointer-end. One
/// record per controller; a second pointer-start before a pointer-end simply
/// overwrites the start coordinates.
///
/// Once the axis is resolved, exactly one of `scroll_locked` /
/// "drag permitted" (`!drag_suppressed`) holds; before resolution neither a
/// drag nor a lock toggle has been applied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureState {
    /// Where the gesture currently measures deltas from. Rebased to the
    /// latest position after every applied move, so deltas stay incremental.
    pub start_x: f32,
    pub start_y: f32,
    /// The most recent pointer position.
    pub current_x: f32,
    pub current_y: f32,
    /// Current minus start, per axis.
    pub delta_x: f32,
    pub delta_y: f32,
    /// True once this gesture committed to horizontal-drag vs vertical-scroll.
    pub axis_resolved: bool,
    /// True while page scrolling is suppressed.
    pub scroll_locked: bool,
    /// True once axis resolution chose the vertical branch; horizontal
    /// dragging is ignored for the remainder of the gesture.
    pub drag_suppressed: bool,
    /// Scroll offset captured when locking began, restored after the gesture
    /// when it was positive.
    pub locked_scroll_top: f32,
}

impl GestureState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_zero_false() {
        let state = GestureState::default();
        assert_eq!(state.start_x, 0.0);
        assert_eq!(state.delta_y, 0.0);
        assert!(!state.axis_resolved);
        assert!(!state.scroll_locked);
        assert!(!state.drag_suppressed);
        assert_eq!(state.locked_scroll_top, 0.0);
    }

    #[test]
    fn reset_clears_a_mid_gesture_record() {
        let mut state = GestureState {
            start_x: 40.0,
            delta_x: -60.0,
            axis_resolved: true,
            scroll_locked: true,
            locked_scroll_top: 120.0,
            ..GestureState::default()
        };
        state.reset();
        assert_eq!(state, GestureState::default());
    }
}
