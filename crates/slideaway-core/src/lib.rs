//! Core gesture-and-state coordinator for the slideaway swipe-to-reveal
//! control.
//!
//! A container with two children is choreographed so the first child (the
//! sliding panel) can be dragged left to reveal the second (the backing
//! panel), list-item swipe-to-delete style. The controller owns the whole
//! interaction lifecycle: pointer tracking, one-shot axis-intent resolution,
//! page scroll locking while a horizontal drag is live, clamped drag
//! translation, and the animated snap to closed or fully open at gesture end.
//!
//! The core never touches a real page. Everything host-specific — element
//! style mutation, the body's inline style, scroll offsets, the touch
//! capability signal — goes through the [`HostElement`] and [`HostPage`]
//! traits, so the state machine is fully exercisable from plain tests.
//! Platform crates (e.g. `slideaway-platform-web`) supply the real handles
//! and wire the pointer listeners.

pub mod controller;
pub mod gesture;
pub mod host;
pub mod pointer;
pub mod style;

pub use controller::{RevealController, RevealOptions};
pub use gesture::GestureState;
pub use host::{HostElement, HostPage};
pub use pointer::{PagePoint, PointerSample};
pub use style::{StyleDecl, StyleProperty, StyleSet};

pub mod prelude {
    pub use crate::controller::{RevealController, RevealOptions};
    pub use crate::gesture::GestureState;
    pub use crate::host::{HostElement, HostPage};
    pub use crate::pointer::{PagePoint, PointerSample};
    pub use crate::style::{StyleDecl, StyleProperty, StyleSet};
}
