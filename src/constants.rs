// DOM wiring and presentation constants for the web front-end.

// Hosts carrying this attribute are mounted automatically; its value is the
// JSON config (empty for defaults).
pub const HOST_ATTRIBUTE: &str = "data-parallax-hero";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Class names, for page stylesheets that want to theme the pieces
pub const CLASS_SURFACE: &str = "parallax-hero__surface";
pub const CLASS_STACK: &str = "parallax-hero__stack";
pub const CLASS_LAYER: &str = "parallax-hero__layer";
pub const CLASS_DECOR: &str = "parallax-hero__decor";
pub const CLASS_OVERLAY: &str = "parallax-hero__overlay";
pub const CLASS_SLOT: &str = "parallax-hero__slot";
pub const CLASS_VEIL: &str = "parallax-hero__veil";

// Stacking inside the surface, bottom to top
pub const STACK_Z_INDEX: i32 = 0;
pub const DECOR_Z_INDEX: i32 = 1; // vignette + grain above every image
pub const VEIL_Z_INDEX: i32 = 2; // hides the images, not the caller's content

// Static decoration
pub const SURFACE_BACKGROUND: &str = "#0b0b0c";
pub const VEIL_BACKGROUND: &str = "rgba(0, 0, 0, 0.3)";
pub const VIGNETTE_GRADIENT: &str =
    "linear-gradient(to bottom, rgba(0, 0, 0, 0.2), transparent, rgba(0, 0, 0, 0.3))";
pub const GRAIN_GRADIENT: &str =
    "radial-gradient(circle at 1px 1px, rgba(255, 255, 255, 0.7) 1px, transparent 0)";
pub const GRAIN_TILE: &str = "3px 3px";
pub const GRAIN_OPACITY: &str = "0.07";
pub const OVERLAY_PADDING: &str = "0 1.5rem";
