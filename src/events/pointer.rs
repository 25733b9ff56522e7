use crate::core::Rig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default, Clone, Copy)]
struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last_x: f32,
    pub last_y: f32,
}

#[derive(Clone)]
struct OrbitWiring {
    canvas: web::HtmlCanvasElement,
    rig: Rc<RefCell<Rig>>,
    drag: Rc<RefCell<DragState>>,
}

/// Drag to orbit, wheel to zoom. Input is dropped by the controls while a
/// focus run has them disabled.
pub fn wire_orbit_handlers(canvas: &web::HtmlCanvasElement, rig: Rc<RefCell<Rig>>) {
    let w = OrbitWiring {
        canvas: canvas.clone(),
        rig,
        drag: Rc::new(RefCell::new(DragState::default())),
    };
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

fn wire_pointerdown(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.rig.borrow().controls.enabled {
            return;
        }
        {
            let mut ds = w.drag.borrow_mut();
            ds.active = true;
            ds.pointer_id = ev.pointer_id();
            ds.last_x = ev.client_x() as f32;
            ds.last_y = ev.client_y() as f32;
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (dx, dy) = {
            let mut ds = w.drag.borrow_mut();
            if !ds.active || ds.pointer_id != ev.pointer_id() {
                return;
            }
            let x = ev.client_x() as f32;
            let y = ev.client_y() as f32;
            let delta = (x - ds.last_x, y - ds.last_y);
            ds.last_x = x;
            ds.last_y = y;
            delta
        };
        let viewport_h = w.canvas.get_bounding_client_rect().height() as f32;
        w.rig.borrow_mut().controls.rotate(dx, dy, viewport_h);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &OrbitWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let was_dragging = {
            let mut ds = w.drag.borrow_mut();
            let was = ds.active && ds.pointer_id == ev.pointer_id();
            if was {
                ds.active = false;
            }
            was
        };
        if was_dragging {
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        _ = wnd
            .add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_wheel(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let mut rig = w.rig.borrow_mut();
        if !rig.controls.enabled {
            return;
        }
        rig.controls.zoom(ev.delta_y() as f32);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = canvas_for_listener.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
