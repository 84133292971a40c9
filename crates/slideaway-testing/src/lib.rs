//! Testing utilities and fake host environment for slideaway.
//!
//! [`FakeElement`] and [`FakePage`] stand in for a real page, recording every
//! style and scroll write, and [`GestureRobot`] drives a controller with
//! synthetic touch/mouse sequences so tests read like user interactions.

pub mod fake_host;
pub mod robot;

pub use fake_host::{FakeElement, FakePage};
pub use robot::GestureRobot;

pub mod prelude {
    pub use crate::fake_host::{FakeElement, FakePage};
    pub use crate::robot::GestureRobot;
}
