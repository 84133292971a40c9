//! Minimal slideaway demo: a single list row whose content slides left to
//! reveal a delete action.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use slideaway_core::RevealOptions;
use slideaway_platform_web::WebReveal;

const ROW_HEIGHT_PX: u32 = 56;
const REVEAL_WIDTH_PX: f32 = 80.0;

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let window = web_sys::window().ok_or("no global window exists")?;
    let document = window.document().ok_or("should have a document on window")?;
    let body = document.body().ok_or("document should have a body")?;

    let row = document.create_element("div")?;
    let content = make_panel(&document, "Swipe me left", "#ffffff")?;
    let action = make_panel(&document, "Delete", "#e53935")?;
    row.append_child(&content)?;
    row.append_child(&action)?;
    body.append_child(&row)?;

    if let Some(row) = row.dyn_ref::<HtmlElement>() {
        let style = row.style();
        style.set_property("height", &format!("{}px", ROW_HEIGHT_PX))?;
        style.set_property("width", "100%")?;
    }

    // The controller applies the positioning styles itself; the demo only
    // hands it the container.
    let _reveal = WebReveal::attach(
        Some(row),
        RevealOptions {
            max_slide_distance: REVEAL_WIDTH_PX,
            ..RevealOptions::default()
        },
    )?;

    log::info!("slideaway demo row attached");
    Ok(())
}

fn make_panel(
    document: &Document,
    label: &str,
    background: &str,
) -> Result<web_sys::Element, JsValue> {
    let panel = document.create_element("div")?;
    panel.set_text_content(Some(label));
    if let Some(panel) = panel.dyn_ref::<HtmlElement>() {
        let style = panel.style();
        style.set_property("height", &format!("{}px", ROW_HEIGHT_PX))?;
        style.set_property("width", "100%")?;
        style.set_property("line-height", &format!("{}px", ROW_HEIGHT_PX))?;
        style.set_property("background", background)?;
    }
    Ok(panel)
}
