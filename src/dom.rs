use crate::constants::{LOADING_FADE_DELAY_MS, LOADING_HIDE_DELAY_MS, MAX_PIXEL_RATIO};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        listen_click(&el, handler);
    }
}

pub fn listen_click(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

/// Keep the canvas backing store at CSS size times the (capped) pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Current scroll offset and scrollable range of the page, in CSS pixels.
pub fn scroll_metrics(window: &web::Window, container_id: &str) -> (f32, f32) {
    let offset = window.scroll_y().unwrap_or(0.0);
    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let content_h = window
        .document()
        .and_then(|d| d.get_element_by_id(container_id))
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0);
    (offset as f32, (content_h - viewport_h) as f32)
}

pub fn toggle_fullscreen(document: &web::Document) {
    if document.fullscreen_element().is_none() {
        if let Some(root) = document.document_element() {
            if let Err(e) = root.request_fullscreen() {
                log::warn!("fullscreen request refused: {:?}", e);
            }
        }
    } else {
        document.exit_fullscreen();
    }
}

fn after_ms(window: &web::Window, delay_ms: i32, f: impl FnOnce() + 'static) {
    let closure = Closure::once(f);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    );
    closure.forget();
}

/// Fade the loading screen out, then drop it from layout.
pub fn dismiss_loading_screen(element_id: &'static str) {
    let Some(window) = web::window() else {
        return;
    };
    let window_inner = window.clone();
    after_ms(&window, LOADING_FADE_DELAY_MS, move || {
        let Some(el) = window_inner
            .document()
            .and_then(|d| d.get_element_by_id(element_id))
        else {
            return;
        };
        set_style(&el, "opacity", "0");
        after_ms(&window_inner, LOADING_HIDE_DELAY_MS, move || {
            set_style(&el, "display", "none");
        });
    });
}
