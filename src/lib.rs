//! Scroll-and-click driven black hole visualization.
//!
//! `core` holds the platform-free choreography, camera rig, labels, and
//! scene geometry. Everything else is the WebAssembly shell: DOM wiring,
//! the WebGPU renderer, and the `requestAnimationFrame` loop.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::constants::CANVAS_ID;
    use crate::core::{FocusController, LabelRegistry, Rig, SceneState, ScrollChoreographer};
    use crate::{dom, events, frame};
    use instant::Instant;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
        dom::sync_canvas_backing_size(canvas);
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            _ = window
                .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
        }
        resize_closure.forget();
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("blackhole-web starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

        // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
        wire_canvas_resize(&canvas);

        let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
        let rig = Rc::new(RefCell::new(Rig::new(aspect)));
        let choreographer = ScrollChoreographer::standard()?;
        let focus = FocusController::standard();
        let anchors = LabelRegistry::standard_anchors();

        let queued_scroll: Rc<RefCell<Option<f32>>> = Rc::new(RefCell::new(None));
        let queued_selections = Rc::new(RefCell::new(Vec::new()));

        events::wire_page_controls(&document);
        events::wire_scroll(queued_scroll.clone());
        events::wire_cards(&document, &queued_selections, |id| focus.knows(id));
        events::wire_reset_button(&document, &queued_selections);
        events::wire_orbit_handlers(&canvas, rig.clone());

        let gpu = frame::init_gpu(&canvas).await;

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            document,
            canvas,
            rig,
            choreographer,
            focus,
            anchors,
            scene: SceneState::default(),
            queued_scroll,
            queued_selections,
            gpu,
            started: Instant::now(),
        }));
        frame::start_loop(frame_ctx);
        Ok(())
    }
}
