use crate::core::{
    project_anchors, FocusController, FocusTick, LabelRegistry, Rig, SceneState,
    ScrollChoreographer, Selection,
};
use crate::overlay;
use crate::render;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,

    pub rig: Rc<RefCell<Rig>>,
    pub choreographer: ScrollChoreographer,
    pub focus: FocusController,
    pub anchors: LabelRegistry,
    pub scene: SceneState,

    pub queued_scroll: Rc<RefCell<Option<f32>>>,
    pub queued_selections: Rc<RefCell<Vec<Selection>>>,

    pub gpu: Option<render::GpuState>,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let w = self.canvas.width();
        let h = self.canvas.height();

        let mut rig = self.rig.borrow_mut();
        rig.camera.aspect = w as f32 / h.max(1) as f32;

        // Scroll first; an active focus run then overrides the camera
        if let Some(p) = self.queued_scroll.borrow_mut().take() {
            self.choreographer.apply(p, &mut *rig);
            self.scene.on_scroll(self.choreographer.disk_rotation());
            overlay::apply_phase_labels(&self.document, self.choreographer.labels());
        }

        let selections: Vec<Selection> = self.queued_selections.borrow_mut().drain(..).collect();
        for sel in &selections {
            match self.focus.select(sel, now, &mut *rig) {
                Ok(()) => {
                    if *sel == Selection::Reset {
                        overlay::highlight_card(&self.document, None);
                    }
                }
                Err(e) => log::debug!("[focus] ignored {:?}: {}", sel, e),
            }
        }

        if let FocusTick::Finished { highlighted } = self.focus.tick(now, &mut *rig) {
            overlay::highlight_card(&self.document, highlighted.as_deref());
        }

        rig.update_controls();
        self.scene.advance((now - self.started).as_secs_f32());

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&rig.camera, &self.scene) {
                log::error!("render error: {:?}", e);
            }
        }

        let viewport = self
            .document
            .document_element()
            .map(|el| Vec2::new(el.client_width() as f32, el.client_height() as f32))
            .unwrap_or(Vec2::new(w as f32, h as f32));
        let flipped = project_anchors(&mut self.anchors, &rig.camera, viewport);
        overlay::apply_anchor_labels(&self.document, &self.anchors, &flipped);
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    let first = tick.borrow();
    if let (Some(w), Some(cb)) = (web::window(), first.as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
