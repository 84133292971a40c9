//! Robot-style driver for gesture tests.
//!
//! Wraps a controller built over the fake host so tests can write
//! interactions the way a user performs them:
//!
//! ```
//! use slideaway_core::RevealOptions;
//! use slideaway_testing::GestureRobot;
//!
//! let mut robot = GestureRobot::new(RevealOptions {
//!     max_slide_distance: 80.0,
//!     ..RevealOptions::default()
//! });
//! robot.touch_start(100.0, 50.0);
//! robot.touch_move(40.0, 52.0);
//! robot.touch_end();
//! assert_eq!(robot.controller().offset_x(), -80.0);
//! ```

use slideaway_core::{
    HostElement, PointerSample, RevealController, RevealOptions, StyleProperty,
};

use crate::fake_host::{FakeElement, FakePage};

/// Drives a `RevealController<FakeElement, FakePage>` with synthetic pointer
/// sequences.
pub struct GestureRobot {
    controller: RevealController<FakeElement, FakePage>,
    container: FakeElement,
    page: FakePage,
}

impl GestureRobot {
    /// A robot over a fresh two-child container and a touch-capable page.
    pub fn new(options: RevealOptions) -> Self {
        Self::with_page(FakePage::new(), options)
    }

    /// A robot over a caller-configured page (pre-scrolled, styled body,
    /// touch disabled, ...).
    pub fn with_page(page: FakePage, options: RevealOptions) -> Self {
        let container = FakeElement::with_children(2);
        let controller =
            RevealController::new(Some(container.clone()), page.clone(), options);
        Self {
            controller,
            container,
            page,
        }
    }

    pub fn controller(&self) -> &RevealController<FakeElement, FakePage> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut RevealController<FakeElement, FakePage> {
        &mut self.controller
    }

    pub fn container(&self) -> &FakeElement {
        &self.container
    }

    pub fn page(&self) -> &FakePage {
        &self.page
    }

    pub fn sliding_panel(&self) -> FakeElement {
        self.container
            .child(0)
            .expect("robot container has a sliding panel")
    }

    pub fn backing_panel(&self) -> FakeElement {
        self.container
            .child(1)
            .expect("robot container has a backing panel")
    }

    // Touch-shaped events (multi-point samples).

    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.controller
            .pointer_start(PointerSample::multi_point(x, y));
    }

    pub fn touch_move(&mut self, x: f32, y: f32) {
        self.controller
            .pointer_move(PointerSample::multi_point(x, y));
    }

    pub fn touch_end(&mut self) {
        self.controller.pointer_end();
    }

    // Mouse-shaped events (single-point samples).

    pub fn mouse_start(&mut self, x: f32, y: f32) {
        self.controller
            .pointer_start(PointerSample::single_point(x, y));
    }

    pub fn mouse_move(&mut self, x: f32, y: f32) {
        self.controller
            .pointer_move(PointerSample::single_point(x, y));
    }

    pub fn mouse_end(&mut self) {
        self.controller.pointer_end();
    }

    /// A complete start → move → end swipe.
    pub fn swipe(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.touch_start(from.0, from.1);
        self.touch_move(to.0, to.1);
        self.touch_end();
    }

    // Assertion accessors.

    /// The sliding panel's current `transform` value.
    pub fn sliding_transform(&self) -> Option<String> {
        self.sliding_panel().style(StyleProperty::Transform)
    }

    /// The sliding panel's current `transition-duration` value.
    pub fn transition_duration(&self) -> Option<String> {
        self.sliding_panel().style(StyleProperty::TransitionDuration)
    }

    /// The body's `position` declaration while the page is locked.
    pub fn body_position(&self) -> Option<String> {
        self.page.body_style(StyleProperty::Position)
    }

    /// The body's serialized inline style attribute.
    pub fn body_attr(&self) -> String {
        self.page.body_attr()
    }
}
