//! The reveal controller: the whole interaction lifecycle from pointer-down
//! through animated settling.

use smallvec::smallvec;

use crate::gesture::GestureState;
use crate::host::{HostElement, HostPage};
use crate::pointer::PointerSample;
use crate::style::{StyleDecl, StyleProperty, StyleSet};

/// Construction options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// How far left the sliding panel may travel, in page pixels.
    /// Non-negative by contract; the fully-open offset is the negation of
    /// this value.
    pub max_slide_distance: f32,
    /// Duration of the settle animation at gesture end, in milliseconds.
    pub animation_duration_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            max_slide_distance: 0.0,
            animation_duration_ms: 300,
        }
    }
}

/// Coordinates the swipe-to-reveal gesture over one container.
///
/// The container's first child is the sliding panel, its second the backing
/// panel. Construction with a missing container (or one without two element
/// children) logs an error and yields an inert instance: no panels resolved,
/// no styles applied, and every pointer entry point a no-op. Construction
/// never panics.
///
/// The settled offset lives in `offset_x` and persists between gestures:
/// `0.0` is closed, `-max_slide_distance` fully open.
pub struct RevealController<E: HostElement, P: HostPage> {
    container: Option<E>,
    sliding_panel: Option<E>,
    backing_panel: Option<E>,
    page: P,
    max_slide_distance: f32,
    animation_duration_ms: u32,
    offset_x: f32,
    saved_body_style: String,
    gesture: GestureState,
}

impl<E: HostElement, P: HostPage> RevealController<E, P> {
    pub fn new(container: Option<E>, page: P, options: RevealOptions) -> Self {
        let mut controller = Self {
            container: None,
            sliding_panel: None,
            backing_panel: None,
            page,
            max_slide_distance: options.max_slide_distance,
            animation_duration_ms: options.animation_duration_ms,
            offset_x: 0.0,
            saved_body_style: String::new(),
            gesture: GestureState::default(),
        };

        let Some(container) = container else {
            log::error!("reveal container must be an element");
            return controller;
        };
        let (Some(sliding_panel), Some(backing_panel)) = (container.child(0), container.child(1))
        else {
            log::error!("reveal container must have two element children");
            return controller;
        };

        controller.saved_body_style = controller.page.body_inline_style();
        controller.init_styles(&container, &sliding_panel, &backing_panel);
        controller.container = Some(container);
        controller.sliding_panel = Some(sliding_panel);
        controller.backing_panel = Some(backing_panel);
        controller
    }

    /// False when construction failed and the instance is inert.
    pub fn is_active(&self) -> bool {
        self.sliding_panel.is_some()
    }

    /// Whether an adapter should wire pointer listeners onto the sliding
    /// panel: active, and the host reports touch support.
    pub fn wants_listeners(&self) -> bool {
        self.is_active() && self.page.supports_touch()
    }

    pub fn container(&self) -> Option<&E> {
        self.container.as_ref()
    }

    pub fn sliding_panel(&self) -> Option<&E> {
        self.sliding_panel.as_ref()
    }

    pub fn backing_panel(&self) -> Option<&E> {
        self.backing_panel.as_ref()
    }

    /// The settled horizontal translation, in page pixels.
    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    pub fn max_slide_distance(&self) -> f32 {
        self.max_slide_distance
    }

    pub fn animation_duration_ms(&self) -> u32 {
        self.animation_duration_ms
    }

    /// The in-flight gesture record.
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Pointer-down: record the sample's page position as the gesture start.
    pub fn pointer_start(&mut self, sample: PointerSample) {
        if !self.is_active() {
            return;
        }
        let position = sample.page_position();
        self.gesture.start_x = position.x;
        self.gesture.start_y = position.y;
    }

    /// Pointer-move: resolve axis intent once, then translate the sliding
    /// panel by the incremental horizontal delta while the gesture stays
    /// horizontal.
    pub fn pointer_move(&mut self, sample: PointerSample) {
        if !self.is_active() || self.gesture.drag_suppressed {
            return;
        }

        let position = sample.page_position();
        self.gesture.current_x = position.x;
        self.gesture.current_y = position.y;
        self.gesture.delta_x = position.x - self.gesture.start_x;
        self.gesture.delta_y = position.y - self.gesture.start_y;

        if !self.gesture.axis_resolved && !self.resolve_axis() {
            return;
        }
        if self.gesture.drag_suppressed {
            return;
        }

        self.slide_by(self.gesture.delta_x);
        // Rebase so the next move computes a fresh incremental delta.
        self.gesture.start_x = position.x;
        self.gesture.start_y = position.y;
    }

    /// Pointer-up: snap to closed or fully open, release the page, reset the
    /// gesture record.
    pub fn pointer_end(&mut self) {
        if !self.is_active() {
            return;
        }

        let half_slide = self.max_slide_distance / 2.0;
        if self.offset_x.abs() >= half_slide {
            // Past the halfway mark. A rightward final delta still closes,
            // even when the drag distance itself cleared the threshold.
            self.offset_x = if self.gesture.delta_x > 0.0 {
                0.0
            } else {
                -self.max_slide_distance
            };
        } else {
            self.offset_x = 0.0;
        }
        self.translate(self.animation_duration_ms);
        self.reset_gesture();
    }

    /// One-shot axis commitment: `|delta_x| >= |delta_y|` means horizontal
    /// intent. Returns true when the gesture may drag.
    fn resolve_axis(&mut self) -> bool {
        self.gesture.axis_resolved = true;
        if self.gesture.delta_x.abs() >= self.gesture.delta_y.abs() {
            self.lock_scroll();
            true
        } else {
            self.unlock_scroll();
            false
        }
    }

    /// Suppress page scrolling: pin the body at the current scroll offset
    /// with fixed positioning. Dragging stays permitted.
    fn lock_scroll(&mut self) {
        self.gesture.scroll_locked = true;
        self.gesture.locked_scroll_top = self.page.scroll_offset();
        self.apply_body(smallvec![
            StyleDecl::new(StyleProperty::Position, "fixed"),
            StyleDecl::new(StyleProperty::Width, "100%"),
            StyleDecl::new(
                StyleProperty::Top,
                format!("-{}px", self.gesture.locked_scroll_top),
            ),
        ]);
        self.gesture.drag_suppressed = false;
    }

    /// Let the page scroll again and suppress horizontal dragging for the
    /// rest of the gesture.
    fn unlock_scroll(&mut self) {
        self.gesture.scroll_locked = false;
        self.page.set_body_inline_style(&self.saved_body_style);
        self.gesture.drag_suppressed = true;
    }

    /// Clamped slide update: the candidate offset never passes closed (0) on
    /// the right or fully open (-max_slide_distance) on the left. Applied as
    /// an immediate, zero-duration translation.
    fn slide_by(&mut self, delta: f32) {
        let candidate = self.offset_x + delta;
        self.offset_x = if candidate >= 0.0 {
            0.0
        } else if candidate.abs() >= self.max_slide_distance {
            -self.max_slide_distance
        } else {
            candidate
        };
        self.translate(0);
    }

    /// Write the current offset as a transform on the sliding panel.
    fn translate(&self, duration_ms: u32) {
        if let Some(panel) = &self.sliding_panel {
            Self::apply_element(
                panel,
                smallvec![
                    StyleDecl::new(
                        StyleProperty::TransitionDuration,
                        format!("{}ms", duration_ms),
                    ),
                    StyleDecl::new(
                        StyleProperty::Transform,
                        format!("translateX({}px)", self.offset_x),
                    ),
                ],
            );
        }
    }

    /// Restore the body snapshot and scroll position, then clear the record.
    /// The body restore is unconditional; the scroll restore only happens
    /// when a positive offset was captured at lock time.
    fn reset_gesture(&mut self) {
        self.page.set_body_inline_style(&self.saved_body_style);
        if self.gesture.locked_scroll_top > 0.0 {
            self.page.set_scroll_offset(self.gesture.locked_scroll_top);
        }
        self.gesture.reset();
    }

    fn init_styles(&self, container: &E, sliding_panel: &E, backing_panel: &E) {
        Self::apply_element(
            container,
            smallvec![
                StyleDecl::new(StyleProperty::Overflow, "hidden"),
                StyleDecl::new(StyleProperty::Position, "relative"),
            ],
        );
        Self::apply_element(
            sliding_panel,
            smallvec![
                StyleDecl::new(StyleProperty::Position, "absolute"),
                StyleDecl::new(StyleProperty::Transform, "translateX(0)"),
                StyleDecl::new(StyleProperty::ZIndex, "1"),
            ],
        );
        Self::apply_element(
            backing_panel,
            smallvec![
                StyleDecl::new(StyleProperty::Overflow, "hidden"),
                StyleDecl::new(StyleProperty::Position, "relative"),
            ],
        );
    }

    /// Style application primitive: empty sets are a no-op.
    fn apply_element(element: &E, styles: StyleSet) {
        if styles.is_empty() {
            return;
        }
        element.apply_styles(&styles);
    }

    fn apply_body(&self, styles: StyleSet) {
        if styles.is_empty() {
            return;
        }
        self.page.apply_body_styles(&styles);
    }
}
