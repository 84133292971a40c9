//! Host environment traits.
//!
//! The controller holds non-owning handles to its container, its two panels,
//! and the page. Handles are cheap clones (a DOM reference on the web, an
//! `Rc`-shared fake in tests), and all mutation goes through `&self` — hosts
//! carry their own interior mutability, the way live DOM handles do.

use crate::style::StyleSet;

/// A host element the controller can style and walk.
pub trait HostElement: Clone {
    /// The element's n-th element child, if it exists.
    fn child(&self, index: usize) -> Option<Self>;

    /// Write each declaration onto the element's live inline style, in order.
    fn apply_styles(&self, styles: &StyleSet);
}

/// The host page: body style, scroll offsets, and the touch capability
/// signal.
///
/// Passed in explicitly at construction so the core never reaches for a
/// global document.
pub trait HostPage {
    /// The body's current inline style attribute, empty when unset.
    fn body_inline_style(&self) -> String;

    /// Replace the body's inline style attribute wholesale.
    fn set_body_inline_style(&self, style: &str);

    /// Merge declarations into the body's live inline style (used while
    /// scroll-locking; the attribute snapshot restore goes through
    /// [`Self::set_body_inline_style`]).
    fn apply_body_styles(&self, styles: &StyleSet);

    /// Current page scroll offset: the maximum of the document-root and body
    /// offsets, covering hosts that report it on either.
    fn scroll_offset(&self) -> f32;

    /// Write a scroll offset to both the document root and the body.
    fn set_scroll_offset(&self, offset: f32);

    /// Whether the runtime supports touch input. Adapters only wire pointer
    /// listeners when this reports true.
    fn supports_touch(&self) -> bool;
}
