use crate::dom::HeroDom;
use crate::render::Painter;
use instant::Instant;
use parallax_core::ParallaxHero;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub hero: Rc<RefCell<ParallaxHero>>,
    pub dom: Rc<HeroDom>,
    pub painter: Painter,
    pub started: Instant,
}

impl FrameContext {
    /// One display refresh. Returns `false` once the hero is torn down so the
    /// loop stops rescheduling itself.
    pub fn frame(&mut self) -> bool {
        let now_sec = self.started.elapsed().as_secs_f64();
        let rect = self.dom.surface_rect();
        let plan = self.hero.borrow_mut().frame(now_sec, &rect);
        match plan {
            Some(plan) => {
                self.painter.paint(&self.dom, &plan);
                true
            }
            None => false,
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle on a running `requestAnimationFrame` loop.
pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl FrameLoop {
    /// Cancel the outstanding frame and release the callback.
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

pub fn start_loop(mut frame_ctx: FrameContext) -> FrameLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        if frame_ctx.frame() {
            pending_clone.set(request_frame(&tick_clone));
        }
    }) as Box<dyn FnMut()>));
    pending.set(request_frame(&tick));

    FrameLoop { pending, tick }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let callback = tick.as_ref()?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}
