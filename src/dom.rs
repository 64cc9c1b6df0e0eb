use crate::constants::*;
use crate::overlay;
use crate::style;
use parallax_core::{HeroConfig, Layer, LayerTransform, SurfaceRect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// The elements making up one mounted hero.
pub struct HeroDom {
    pub host: web::HtmlElement,
    pub surface: web::HtmlElement,
    pub layers: Vec<web::HtmlElement>,
    pub slot: web::HtmlElement,
    pub veil: web::HtmlElement,
}

impl HeroDom {
    /// Build the surface inside `host`, moving the host's existing children
    /// into the overlay slot.
    pub fn build(
        document: &web::Document,
        host: web::HtmlElement,
        layers: &[Layer],
        config: &HeroConfig,
    ) -> anyhow::Result<Self> {
        let surface = create_div(document, CLASS_SURFACE)?;
        set_styles(
            &surface,
            &[
                ("position", "relative"),
                ("width", "100%"),
                ("height", "100%"),
                ("overflow", "hidden"),
                ("background", SURFACE_BACKGROUND),
                ("perspective", style::px_css(config.perspective_px).as_str()),
                ("transform-style", "preserve-3d"),
            ],
        )?;

        let stack = create_div(document, CLASS_STACK)?;
        set_styles(
            &stack,
            &[
                ("position", "absolute"),
                ("inset", "0"),
                ("z-index", STACK_Z_INDEX.to_string().as_str()),
                ("transform-style", "preserve-3d"),
                ("pointer-events", "none"),
            ],
        )?;
        let mut layer_els = Vec::with_capacity(layers.len());
        for layer in layers {
            let img = create_layer_img(document, layer, config.base_scale)?;
            stack.append_child(&img).map_err(js_err)?;
            layer_els.push(img);
        }
        surface.append_child(&stack).map_err(js_err)?;
        surface
            .append_child(&create_decor(document)?)
            .map_err(js_err)?;

        let veil = create_div(document, CLASS_VEIL)?;
        set_styles(
            &veil,
            &[
                ("position", "absolute"),
                ("inset", "0"),
                ("z-index", VEIL_Z_INDEX.to_string().as_str()),
                ("background", VEIL_BACKGROUND),
                ("opacity", "1"),
                ("pointer-events", "none"),
            ],
        )?;
        surface.append_child(&veil).map_err(js_err)?;

        let (overlay_el, slot) = overlay::create(document)?;
        surface.append_child(&overlay_el).map_err(js_err)?;

        // caller content only ever moves between attached nodes
        let content = overlay::child_nodes(&host);
        host.append_child(&surface).map_err(js_err)?;
        if let Err(e) = overlay::adopt_nodes(&content, &slot) {
            surface.remove();
            if let Err(restore) = overlay::adopt_nodes(&content, &host) {
                log::warn!("[hero] restoring overlay content failed: {:?}", restore);
            }
            return Err(e);
        }

        Ok(Self {
            host,
            surface,
            layers: layer_els,
            slot,
            veil,
        })
    }

    pub fn surface_rect(&self) -> SurfaceRect {
        let r = self.surface.get_bounding_client_rect();
        SurfaceRect::new(r.left(), r.top(), r.width(), r.height())
    }

    /// Hand the caller's content back to the host and drop the surface.
    pub fn remove(&self) {
        if let Err(e) = overlay::adopt_children(&self.slot, &self.host) {
            log::warn!("[hero] restoring overlay content failed: {:?}", e);
        }
        self.surface.remove();
    }
}

fn create_layer_img(
    document: &web::Document,
    layer: &Layer,
    base_scale: f32,
) -> anyhow::Result<web::HtmlElement> {
    let img = document
        .create_element("img")
        .map_err(js_err)?
        .dyn_into::<web::HtmlImageElement>()
        .map_err(|e| anyhow::anyhow!("not an img: {:?}", e))?;
    img.set_src(&layer.source_id);
    img.set_alt("");
    img.set_draggable(false);
    img.set_attribute("aria-hidden", "true").map_err(js_err)?;
    img.set_class_name(CLASS_LAYER);
    let el: web::HtmlElement = img.unchecked_into();
    set_styles(
        &el,
        &[
            ("position", "absolute"),
            ("inset", "0"),
            ("width", "100%"),
            ("height", "100%"),
            ("object-fit", "cover"),
            ("user-select", "none"),
            ("pointer-events", "none"),
            ("will-change", "transform, opacity"),
            ("z-index", layer.z_order.to_string().as_str()),
            ("opacity", "0"),
            (
                "transform",
                style::transform_css(&LayerTransform::IDENTITY, base_scale).as_str(),
            ),
        ],
    )?;
    Ok(el)
}

fn create_decor(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let decor = create_div(document, CLASS_DECOR)?;
    set_styles(
        &decor,
        &[
            ("position", "absolute"),
            ("inset", "0"),
            ("z-index", DECOR_Z_INDEX.to_string().as_str()),
            ("pointer-events", "none"),
        ],
    )?;

    let vignette = create_div(document, "")?;
    set_styles(
        &vignette,
        &[
            ("position", "absolute"),
            ("inset", "0"),
            ("background-image", VIGNETTE_GRADIENT),
        ],
    )?;
    let grain = create_div(document, "")?;
    set_styles(
        &grain,
        &[
            ("position", "absolute"),
            ("inset", "0"),
            ("opacity", GRAIN_OPACITY),
            ("mix-blend-mode", "overlay"),
            ("background-image", GRAIN_GRADIENT),
            ("background-size", GRAIN_TILE),
        ],
    )?;
    decor.append_child(&vignette).map_err(js_err)?;
    decor.append_child(&grain).map_err(js_err)?;
    Ok(decor)
}

pub fn create_div(document: &web::Document, class: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("not an HtmlElement: {:?}", e))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

pub fn set_styles(el: &web::HtmlElement, props: &[(&str, &str)]) -> anyhow::Result<()> {
    let style = el.style();
    for (name, value) in props {
        style.set_property(name, value).map_err(js_err)?;
    }
    Ok(())
}
