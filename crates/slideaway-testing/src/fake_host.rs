//! In-memory stand-ins for the host page.
//!
//! Handles are `Rc`-shared so a test can keep its own clone of an element and
//! observe the writes the controller makes through the host traits.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use slideaway_core::{HostElement, HostPage, StyleDecl, StyleProperty, StyleSet};

#[derive(Default)]
struct FakeElementInner {
    children: Vec<FakeElement>,
    styles: HashMap<StyleProperty, String>,
    history: Vec<StyleDecl>,
}

/// A fake element recording every inline-style write.
#[derive(Clone, Default)]
pub struct FakeElement {
    inner: Rc<RefCell<FakeElementInner>>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// A container with `count` fresh element children.
    pub fn with_children(count: usize) -> Self {
        let element = Self::new();
        for _ in 0..count {
            element.append_child(Self::new());
        }
        element
    }

    pub fn append_child(&self, child: FakeElement) {
        self.inner.borrow_mut().children.push(child);
    }

    /// The latest value written for `property`, if any.
    pub fn style(&self, property: StyleProperty) -> Option<String> {
        self.inner.borrow().styles.get(&property).cloned()
    }

    /// Every declaration ever applied, in application order.
    pub fn style_history(&self) -> Vec<StyleDecl> {
        self.inner.borrow().history.clone()
    }

    pub fn style_write_count(&self) -> usize {
        self.inner.borrow().history.len()
    }
}

impl HostElement for FakeElement {
    fn child(&self, index: usize) -> Option<Self> {
        self.inner.borrow().children.get(index).cloned()
    }

    fn apply_styles(&self, styles: &StyleSet) {
        let mut inner = self.inner.borrow_mut();
        for decl in styles {
            inner.styles.insert(decl.property, decl.value.clone());
            inner.history.push(decl.clone());
        }
    }
}

struct FakePageInner {
    /// The inline style attribute the body would serialize to. Applying
    /// declarations rewrites it the way a live style object would; restoring
    /// replaces it wholesale.
    base_attr: String,
    applied: HashMap<StyleProperty, String>,
    applied_order: Vec<StyleProperty>,
    scroll_top: f32,
    scroll_writes: Vec<f32>,
    touch_supported: bool,
}

/// A fake page: body style, scroll offset, and the touch capability flag.
#[derive(Clone)]
pub struct FakePage {
    inner: Rc<RefCell<FakePageInner>>,
}

impl FakePage {
    /// A touch-capable page with an unscrolled body and no inline style.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(FakePageInner {
                base_attr: String::new(),
                applied: HashMap::new(),
                applied_order: Vec::new(),
                scroll_top: 0.0,
                scroll_writes: Vec::new(),
                touch_supported: true,
            })),
        }
    }

    pub fn with_body_style(style: &str) -> Self {
        let page = Self::new();
        page.inner.borrow_mut().base_attr = style.to_string();
        page
    }

    pub fn set_touch_supported(&self, supported: bool) {
        self.inner.borrow_mut().touch_supported = supported;
    }

    /// Simulate the page having been scrolled before the gesture.
    pub fn scroll_to(&self, offset: f32) {
        self.inner.borrow_mut().scroll_top = offset;
    }

    /// The body's inline style attribute as the page would serialize it.
    pub fn body_attr(&self) -> String {
        let inner = self.inner.borrow();
        if inner.applied_order.is_empty() {
            return inner.base_attr.clone();
        }
        let mut attr = inner.base_attr.clone();
        for property in &inner.applied_order {
            if !attr.is_empty() && !attr.ends_with(';') {
                attr.push_str("; ");
            }
            attr.push_str(property.as_css_name());
            attr.push_str(": ");
            attr.push_str(&inner.applied[property]);
        }
        attr
    }

    /// The latest body declaration applied for `property`, if still live.
    pub fn body_style(&self, property: StyleProperty) -> Option<String> {
        self.inner.borrow().applied.get(&property).cloned()
    }

    pub fn scroll_top(&self) -> f32 {
        self.inner.borrow().scroll_top
    }

    /// Every offset written back to the page, in order.
    pub fn scroll_writes(&self) -> Vec<f32> {
        self.inner.borrow().scroll_writes.clone()
    }
}

impl Default for FakePage {
    fn default() -> Self {
        Self::new()
    }
}

impl HostPage for FakePage {
    fn body_inline_style(&self) -> String {
        self.body_attr()
    }

    fn set_body_inline_style(&self, style: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.base_attr = style.to_string();
        inner.applied.clear();
        inner.applied_order.clear();
    }

    fn apply_body_styles(&self, styles: &StyleSet) {
        let mut inner = self.inner.borrow_mut();
        for decl in styles {
            if !inner.applied.contains_key(&decl.property) {
                inner.applied_order.push(decl.property);
            }
            inner.applied.insert(decl.property, decl.value.clone());
        }
    }

    fn scroll_offset(&self) -> f32 {
        self.inner.borrow().scroll_top
    }

    fn set_scroll_offset(&self, offset: f32) {
        let mut inner = self.inner.borrow_mut();
        inner.scroll_top = offset;
        inner.scroll_writes.push(offset);
    }

    fn supports_touch(&self) -> bool {
        self.inner.borrow().touch_supported
    }
}
