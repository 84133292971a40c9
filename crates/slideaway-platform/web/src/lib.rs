//! Web platform adapter for slideaway.
//!
//! Implements the core's host traits over live DOM handles and wires the
//! touch listeners with wasm-bindgen closures. The adapter owns all DOM
//! specifics: CSS property names land on `CssStyleDeclaration`, the body's
//! inline style goes through the `style` attribute, scroll offsets cover the
//! document-root/body split, and events are classified into pointer samples
//! at this boundary on every event.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, TouchEvent, Window};

use slideaway_core::{
    HostElement, HostPage, PointerSample, RevealController, RevealOptions, StyleSet,
};

/// A live DOM element handle.
#[derive(Clone)]
pub struct DomElement {
    element: HtmlElement,
}

impl DomElement {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl HostElement for DomElement {
    fn child(&self, index: usize) -> Option<Self> {
        self.element
            .children()
            .item(index as u32)
            .and_then(|child| child.dyn_into::<HtmlElement>().ok())
            .map(Self::new)
    }

    fn apply_styles(&self, styles: &StyleSet) {
        let style = self.element.style();
        for decl in styles {
            if let Err(err) = style.set_property(decl.property.as_css_name(), &decl.value) {
                log::error!(
                    "failed to set {} on element: {:?}",
                    decl.property.as_css_name(),
                    err
                );
            }
        }
    }
}

/// The live page: window, document, and body.
pub struct DomPage {
    window: Window,
    document: Document,
    body: HtmlElement,
}

impl DomPage {
    /// Resolves the global window/document/body. `None` outside a browsing
    /// context or before the body exists.
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let body = document.body()?;
        Some(Self {
            window,
            document,
            body,
        })
    }
}

impl HostPage for DomPage {
    fn body_inline_style(&self) -> String {
        self.body.get_attribute("style").unwrap_or_default()
    }

    fn set_body_inline_style(&self, style: &str) {
        if let Err(err) = self.body.set_attribute("style", style) {
            log::error!("failed to restore body style: {:?}", err);
        }
    }

    fn apply_body_styles(&self, styles: &StyleSet) {
        let style = self.body.style();
        for decl in styles {
            if let Err(err) = style.set_property(decl.property.as_css_name(), &decl.value) {
                log::error!(
                    "failed to set {} on body: {:?}",
                    decl.property.as_css_name(),
                    err
                );
            }
        }
    }

    fn scroll_offset(&self) -> f32 {
        let root = self
            .document
            .document_element()
            .map(|element| element.scroll_top())
            .unwrap_or(0);
        root.max(self.body.scroll_top()) as f32
    }

    fn set_scroll_offset(&self, offset: f32) {
        if let Some(root) = self.document.document_element() {
            root.set_scroll_top(offset as i32);
        }
        self.body.set_scroll_top(offset as i32);
    }

    fn supports_touch(&self) -> bool {
        let window: &JsValue = self.window.as_ref();
        js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false)
    }
}

/// Classify one DOM event into a pointer sample.
///
/// Touch-list events read the first target touch's page coordinates;
/// mouse-like events read their own. A touch event with an empty list (a
/// plain `touchend`) yields nothing.
pub fn classify_event(event: &Event) -> Option<PointerSample> {
    if let Some(touch_event) = event.dyn_ref::<TouchEvent>() {
        return touch_event.target_touches().get(0).map(|touch| {
            PointerSample::multi_point(touch.page_x() as f32, touch.page_y() as f32)
        });
    }
    event
        .dyn_ref::<MouseEvent>()
        .map(|mouse| PointerSample::single_point(mouse.page_x() as f32, mouse.page_y() as f32))
}

/// A reveal control attached to a DOM container.
///
/// Holds the controller behind `Rc<RefCell<_>>` shared with the event
/// closures; dropping the handle does not detach the listeners (teardown is
/// the caller's responsibility, per the wasm-bindgen `forget` idiom).
pub struct WebReveal {
    controller: Rc<RefCell<RevealController<DomElement, DomPage>>>,
}

impl WebReveal {
    /// Build a controller over `container` and wire `touchstart` /
    /// `touchmove` / `touchend` listeners on its sliding panel when the
    /// runtime supports touch input.
    ///
    /// A missing or non-element container yields an inert control (the core
    /// logs the diagnostic); only listener registration itself can fail.
    pub fn attach(container: Option<Element>, options: RevealOptions) -> Result<Self, JsValue> {
        let page = DomPage::new().ok_or_else(|| JsValue::from_str("no document body available"))?;
        let container = container
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .map(DomElement::new);

        let controller = RevealController::new(container, page, options);
        let wire = controller.wants_listeners();
        let target = controller.sliding_panel().cloned();

        let reveal = Self {
            controller: Rc::new(RefCell::new(controller)),
        };
        if wire {
            if let Some(target) = target {
                reveal.register_listeners(&target)?;
            }
        }
        Ok(reveal)
    }

    pub fn controller(&self) -> &Rc<RefCell<RevealController<DomElement, DomPage>>> {
        &self.controller
    }

    fn register_listeners(&self, target: &DomElement) -> Result<(), JsValue> {
        {
            let controller = self.controller.clone();
            let closure = Closure::wrap(Box::new(move |event: Event| {
                if let Some(sample) = classify_event(&event) {
                    controller.borrow_mut().pointer_start(sample);
                }
            }) as Box<dyn FnMut(_)>);
            target
                .element()
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let controller = self.controller.clone();
            let closure = Closure::wrap(Box::new(move |event: Event| {
                if let Some(sample) = classify_event(&event) {
                    controller.borrow_mut().pointer_move(sample);
                }
            }) as Box<dyn FnMut(_)>);
            target
                .element()
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let controller = self.controller.clone();
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                controller.borrow_mut().pointer_end();
            }) as Box<dyn FnMut(_)>);
            target
                .element()
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }
}
