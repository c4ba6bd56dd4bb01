// Global keyboard handling.
//
// The document-level keydown listener is installed once per page and never
// removed. It forwards Escape to whichever close handler is current, so the
// overlay can swap handlers on every render without re-registering.

use crate::dom;
use once_cell::unsync::OnceCell;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::Callback;

thread_local! {
    static ESCAPE_HANDLER: RefCell<Option<Callback<()>>> = const { RefCell::new(None) };
    static ESCAPE_LISTENER: OnceCell<Closure<dyn FnMut(KeyboardEvent)>> = const { OnceCell::new() };
}

#[must_use]
pub fn is_escape(key: &str) -> bool {
    key == "Escape"
}

/// Route Escape presses to `handler` from now on.
pub fn set_escape_handler(handler: Callback<()>) {
    ESCAPE_HANDLER.with(|slot| *slot.borrow_mut() = Some(handler));
}

pub fn clear_escape_handler() {
    ESCAPE_HANDLER.with(|slot| slot.borrow_mut().take());
}

/// Run the current Escape handler. Returns false when none is set.
pub fn dispatch_escape() -> bool {
    let handler = ESCAPE_HANDLER.with(|slot| slot.borrow().clone());
    handler.map(|cb| cb.emit(())).is_some()
}

/// Whether the document listener has been installed.
#[must_use]
pub fn escape_listener_registered() -> bool {
    ESCAPE_LISTENER.with(|cell| cell.get().is_some())
}

/// Install the document keydown listener.
///
/// Returns true only for the call that actually registered it; later calls
/// and calls outside a browser are no-ops.
pub fn register_escape_listener() -> bool {
    ESCAPE_LISTENER.with(|cell| {
        if cell.get().is_some() {
            return false;
        }
        let Some(doc) = dom::document() else {
            return false;
        };
        let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(|e: KeyboardEvent| {
            if is_escape(&e.key()) {
                dispatch_escape();
            }
        });
        if let Err(err) =
            doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        {
            dom::console_error(&format!(
                "Failed to register Escape listener: {}",
                dom::js_error_message(&err)
            ));
            return false;
        }
        cell.set(closure).is_ok()
    })
}
