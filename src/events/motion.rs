use super::pointer::{sync_listeners, PointerListeners};
use super::Listener;
use crate::constants::REDUCED_MOTION_QUERY;
use parallax_core::ParallaxHero;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Current `prefers-reduced-motion` value; `false` when the host has no
/// `matchMedia`.
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    media_query(window).map(|mql| mql.matches()).unwrap_or(false)
}

fn media_query(window: &web::Window) -> Option<web::MediaQueryList> {
    window.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

/// Follow live changes of the ambient preference and re-sync the pointer
/// listeners when the motion policy flips.
pub fn watch_reduced_motion(
    window: &web::Window,
    hero: &Rc<RefCell<ParallaxHero>>,
    surface: &web::HtmlElement,
    pointer: &Rc<RefCell<Option<PointerListeners>>>,
) -> Option<Listener> {
    let mql = media_query(window)?;
    let hero = hero.clone();
    let surface = surface.clone();
    let pointer = pointer.clone();
    let listener = Listener::attach(&mql, "change", move |ev: web::MediaQueryListEvent| {
        let flipped = hero.borrow_mut().set_prefers_reduced(ev.matches());
        if flipped {
            sync_listeners(&pointer, &surface, &hero);
        }
    });
    match listener {
        Ok(l) => Some(l),
        Err(e) => {
            log::warn!("[motion] cannot watch {}: {:?}", REDUCED_MOTION_QUERY, e);
            None
        }
    }
}
