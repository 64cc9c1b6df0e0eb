use crate::dom::HeroDom;
use crate::style;
use parallax_core::FramePlan;

/// Applies frame plans to the DOM, writing a style property only when its
/// serialized value changed since the previous frame.
pub struct Painter {
    base_scale: f32,
    transforms: Vec<String>,
    opacities: Vec<String>,
    veil: String,
    veil_hidden: bool,
}

impl Painter {
    pub fn new(layer_count: usize, base_scale: f32) -> Self {
        Self {
            base_scale,
            transforms: vec![String::new(); layer_count],
            opacities: vec![String::new(); layer_count],
            veil: String::new(),
            veil_hidden: false,
        }
    }

    pub fn paint(&mut self, dom: &HeroDom, plan: &FramePlan) {
        for paint in &plan.layers {
            let slot = paint.index.saturating_sub(1);
            let Some(el) = dom.layers.get(slot) else {
                continue;
            };
            let transform = style::transform_css(&paint.transform, self.base_scale);
            if self.transforms[slot] != transform {
                _ = el.style().set_property("transform", &transform);
                self.transforms[slot] = transform;
            }
            let opacity = style::opacity_css(paint.opacity);
            if self.opacities[slot] != opacity {
                _ = el.style().set_property("opacity", &opacity);
                self.opacities[slot] = opacity;
            }
        }

        if self.veil_hidden {
            return;
        }
        let veil = style::opacity_css(plan.veil_opacity);
        if self.veil != veil {
            _ = dom.veil.style().set_property("opacity", &veil);
            self.veil = veil;
        }
        if plan.veil_opacity <= 0.0 {
            // the veil never comes back
            _ = dom.veil.style().set_property("display", "none");
            self.veil_hidden = true;
        }
    }
}
