//! Host Page Hooks
//!
//! Share and Close have no built-in behavior. When the host page defines
//! `window.prosCons.onShare` / `window.prosCons.onClose`, the list and its
//! tally are handed to that function; otherwise the buttons do nothing.

use js_sys::{Function, Reflect};
use log::debug;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

use pros_cons_core::{ProsConsList, Tally};

const HOOK_NAMESPACE: &str = "prosCons";

/// Argument passed to the JavaScript hook
#[derive(Serialize)]
struct ListHookArgs<'a> {
    list: &'a ProsConsList,
    tally: Tally,
}

fn lookup(name: &str) -> Option<Function> {
    let window = web_sys::window()?;
    let namespace = Reflect::get(&window, &JsValue::from_str(HOOK_NAMESPACE)).ok()?;
    if namespace.is_undefined() || namespace.is_null() {
        return None;
    }
    Reflect::get(&namespace, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Call hook `name` with the list. Ok(false) means no hook is registered.
fn call_list_hook(name: &str, list: &ProsConsList) -> Result<bool, String> {
    let Some(hook) = lookup(name) else {
        debug!("[HOOK] {}.{} not registered", HOOK_NAMESPACE, name);
        return Ok(false);
    };
    let args = ListHookArgs {
        list,
        tally: Tally::from_items(&list.items),
    };
    let js_args = serde_wasm_bindgen::to_value(&args).map_err(|e| e.to_string())?;
    hook.call1(&JsValue::NULL, &js_args)
        .map_err(|e| format!("{}.{} threw: {:?}", HOOK_NAMESPACE, name, e))?;
    Ok(true)
}

pub fn share(list: &ProsConsList) -> Result<bool, String> {
    call_list_hook("onShare", list)
}

pub fn close(list: &ProsConsList) -> Result<bool, String> {
    call_list_hook("onClose", list)
}
