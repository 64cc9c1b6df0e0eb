#![cfg(target_arch = "wasm32")]
use crate::constants::HOST_ATTRIBUTE;
use crate::dom::{js_err, HeroDom};
use crate::events::pointer::{sync_listeners, PointerListeners};
use crate::events::Listener;
use instant::Instant;
use parallax_core::{HeroConfig, ParallaxHero};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod style;

thread_local! {
    // Heroes mounted from markup live as long as the page.
    static AUTO_MOUNTED: RefCell<Vec<HeroHandle>> = const { RefCell::new(Vec::new()) };
}

/// Everything owned by one mounted hero, released together on teardown.
struct Mounted {
    hero: Rc<RefCell<ParallaxHero>>,
    dom: Rc<HeroDom>,
    preloader: assets::Preloader,
    frame_loop: frame::FrameLoop,
    pointer: Rc<RefCell<Option<PointerListeners>>>,
    motion_watch: Option<Listener>,
}

impl Mounted {
    fn teardown(mut self) {
        // Order matters: freeze state first so nothing in flight can mutate it.
        self.hero.borrow_mut().teardown();
        self.preloader.abort();
        self.frame_loop.cancel();
        self.pointer.borrow_mut().take();
        self.motion_watch.take();
        self.dom.remove();
    }
}

/// A mounted parallax hero. Dropping the handle (or `free()` from JS) tears it
/// down like `unmount()`.
#[wasm_bindgen]
pub struct HeroHandle {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl HeroHandle {
    /// Tear the hero down. Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            mounted.teardown();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn ready(&self) -> bool {
        self.mounted
            .as_ref()
            .map(|m| m.hero.borrow().readiness().is_ready())
            .unwrap_or(false)
    }
}

impl Drop for HeroHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Mount a hero inside `host`. The host's current children become the overlay
/// content. `config_json` is an optional JSON object; a malformed one is
/// logged and replaced by the defaults.
#[wasm_bindgen]
pub fn mount(host: web::HtmlElement, config_json: Option<String>) -> Result<HeroHandle, JsValue> {
    let config = parse_config(config_json.as_deref());
    mount_with(host, config).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

fn parse_config(text: Option<&str>) -> HeroConfig {
    match HeroConfig::from_json(text.unwrap_or("")) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[hero] {}; using defaults", e);
            HeroConfig::default()
        }
    }
}

fn mount_with(host: web::HtmlElement, config: HeroConfig) -> anyhow::Result<HeroHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let reduced = events::motion::prefers_reduced_motion(&window);
    let hero = ParallaxHero::new(config, reduced);
    let sources: Vec<String> = hero.layers().iter().map(|l| l.source_id.clone()).collect();
    let base_scale = hero.config().base_scale;

    let dom = Rc::new(HeroDom::build(&document, host, hero.layers(), hero.config())?);
    if overlay::is_empty(&dom.slot) {
        log::info!("[hero] no overlay content supplied");
    }
    let hero = Rc::new(RefCell::new(hero));

    let pointer: Rc<RefCell<Option<PointerListeners>>> = Rc::new(RefCell::new(None));
    sync_listeners(&pointer, &dom.surface, &hero);
    let motion_watch = events::motion::watch_reduced_motion(&window, &hero, &dom.surface, &pointer);

    let preloader = assets::Preloader::start(&sources, &hero);

    let frame_loop = frame::start_loop(frame::FrameContext {
        hero: hero.clone(),
        dom: dom.clone(),
        painter: render::Painter::new(sources.len(), base_scale),
        started: Instant::now(),
    });

    Ok(HeroHandle {
        mounted: Some(Mounted {
            hero,
            dom,
            preloader,
            frame_loop,
            pointer,
            motion_watch,
        }),
    })
}

fn auto_mount(document: &web::Document) -> anyhow::Result<()> {
    let selector = format!("[{}]", HOST_ATTRIBUTE);
    let hosts = document.query_selector_all(&selector).map_err(js_err)?;
    for i in 0..hosts.length() {
        let Some(host) = hosts.item(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) else {
            continue;
        };
        let config = parse_config(host.get_attribute(HOST_ATTRIBUTE).as_deref());
        match mount_with(host, config) {
            Ok(handle) => AUTO_MOUNTED.with(|all| all.borrow_mut().push(handle)),
            Err(e) => log::error!("[hero] mount error: {:#}", e),
        }
    }
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parallax-hero starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once(move || {
            if let Err(e) = auto_mount(&doc) {
                log::error!("auto-mount error: {:?}", e);
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
    } else if let Err(e) = auto_mount(&document) {
        log::error!("auto-mount error: {:?}", e);
    }
    Ok(())
}
