use crate::constants::SCROLL_CONTAINER_ID;
use crate::core::scroll_progress;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Queue the page's scroll progress for the next frame. Only the latest
/// value matters, so a newer event overwrites an unconsumed one.
pub fn wire_scroll(queued_scroll: Rc<RefCell<Option<f32>>>) {
    let Some(window) = web::window() else {
        return;
    };
    let window_for_tick = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (offset, range) = dom::scroll_metrics(&window_for_tick, SCROLL_CONTAINER_ID);
        *queued_scroll.borrow_mut() = Some(scroll_progress(offset, range));
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}
