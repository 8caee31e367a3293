//! Click-Outside Detection
//!
//! One document-level mousedown listener that reports pointer-downs landing
//! outside every element matching a selector.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Class carried by each weight chip + menu pair
pub const WEIGHT_MENU_SELECTOR: &str = ".weight-dropdown";

fn is_inside(ev: &web_sys::MouseEvent, selector: &str) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

/// Bind the global mousedown handler. Call once; the listener lives as long
/// as the page.
pub fn bind_global_mousedown<F>(selector: &'static str, on_outside: F)
where
    F: Fn() + 'static,
{
    let on_mousedown = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if !is_inside(&ev, selector) {
            on_outside();
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousedown", on_mousedown.as_ref().unchecked_ref());
        }
    }
    on_mousedown.forget();
}
