use super::Listener;
use parallax_core::ParallaxHero;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

/// `pointermove` / `pointerleave` on the surface. Moves are only queued here;
/// the frame loop commits at most one per frame.
pub struct PointerListeners {
    _move: Listener,
    _leave: Listener,
}

impl PointerListeners {
    pub fn attach(
        surface: &web::HtmlElement,
        hero: &Rc<RefCell<ParallaxHero>>,
    ) -> Result<Self, JsValue> {
        let hero_move = hero.clone();
        let on_move = Listener::attach(surface, "pointermove", move |ev: web::PointerEvent| {
            hero_move
                .borrow_mut()
                .on_pointer_move(ev.client_x() as f64, ev.client_y() as f64);
        })?;

        let hero_leave = hero.clone();
        let on_leave = Listener::attach(surface, "pointerleave", move |_ev: web::PointerEvent| {
            hero_leave.borrow_mut().on_pointer_leave();
        })?;

        log::info!("[pointer] listeners attached");
        Ok(Self {
            _move: on_move,
            _leave: on_leave,
        })
    }
}

/// Attach or detach the pointer listeners to match the hero's motion policy.
pub fn sync_listeners(
    slot: &RefCell<Option<PointerListeners>>,
    surface: &web::HtmlElement,
    hero: &Rc<RefCell<ParallaxHero>>,
) {
    let want = hero.borrow().motion_enabled();
    let mut slot = slot.borrow_mut();
    match (want, slot.is_some()) {
        (true, false) => match PointerListeners::attach(surface, hero) {
            Ok(listeners) => *slot = Some(listeners),
            Err(e) => log::error!("[pointer] attach failed: {:?}", e),
        },
        (false, true) => {
            *slot = None;
            log::info!("[pointer] listeners detached");
        }
        _ => {}
    }
}
