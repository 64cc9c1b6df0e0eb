use parallax_core::{LoadOutcome, ParallaxHero};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Off-DOM preload of every layer source, feeding the hero's readiness gate.
///
/// Each load settles the gate whether it succeeds or fails. The futures only
/// hold a weak reference to the hero and the hero ignores settles after
/// teardown, so a load finishing late is dropped silently.
pub struct Preloader {
    images: Vec<web::HtmlImageElement>,
}

impl Preloader {
    pub fn start(sources: &[String], hero: &Rc<RefCell<ParallaxHero>>) -> Self {
        let mut images = Vec::with_capacity(sources.len());
        for src in sources {
            let weak = Rc::downgrade(hero);
            match web::HtmlImageElement::new() {
                Ok(img) => {
                    img.set_src(src);
                    images.push(img.clone());
                    spawn_local(settle_when_decoded(img, src.clone(), weak));
                }
                Err(e) => {
                    log::warn!("[assets] cannot create image for {}: {:?}", src, e);
                    settle(&weak, src, LoadOutcome::Failed);
                }
            }
        }
        Self { images }
    }

    /// Stop any network work still in flight. Pending decodes reject and their
    /// settles are discarded by the torn-down hero.
    pub fn abort(&mut self) {
        for img in self.images.drain(..) {
            _ = img.remove_attribute("src");
        }
    }
}

async fn settle_when_decoded(img: web::HtmlImageElement, src: String, hero: Weak<RefCell<ParallaxHero>>) {
    let outcome = match JsFuture::from(img.decode()).await {
        Ok(_) => LoadOutcome::Loaded,
        Err(_) => LoadOutcome::Failed,
    };
    settle(&hero, &src, outcome);
}

fn settle(hero: &Weak<RefCell<ParallaxHero>>, src: &str, outcome: LoadOutcome) {
    let Some(hero) = hero.upgrade() else {
        return;
    };
    let mut hero = hero.borrow_mut();
    if !hero.is_mounted() {
        return;
    }
    if outcome == LoadOutcome::Failed {
        log::warn!("[assets] {} failed to load", src);
    }
    if hero.on_asset_settled(outcome) {
        let state = hero.readiness().state();
        log::info!(
            "[assets] ready ({}/{} settled)",
            state.settled_count,
            state.total_sources
        );
    }
}
