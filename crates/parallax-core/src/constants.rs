//! Default tuning for the parallax hero.
//!
//! These express the intended feel of the effect (spring response, travel
//! range, fade timings) and keep magic numbers out of the code.

// Layer stack
pub const DEFAULT_LAYER_COUNT: i32 = 5;
pub const DEFAULT_ASSET_BASE: &str = "/art/";
pub const DEFAULT_ASSET_EXT: &str = "png";

// Motion
pub const DEFAULT_FORCE_MOTION: bool = true; // the landing page opts out of OS reduce-motion
pub const DEFAULT_BASE_SCALE: f32 = 1.075; // hides edges during maximum translation
pub const DEFAULT_TILT_PITCH_DEG: f32 = 6.0;
pub const DEFAULT_TILT_YAW_DEG: f32 = 10.0;
pub const DEFAULT_ROLL_MAX_DEG: f32 = 0.0; // decorative, off unless configured
pub const DEFAULT_DEPTH_MIN_PX: f32 = 24.0; // travel of the first moving layer
pub const DEFAULT_DEPTH_MAX_PX: f32 = 90.0; // travel of the top layer
pub const DEFAULT_STRENGTH_EXPONENT: f32 = 1.15; // >1 biases travel toward the top
pub const DEFAULT_PERSPECTIVE_PX: f32 = 1000.0;

// Spring (shared by both axes)
pub const SPRING_STIFFNESS: f32 = 180.0;
pub const SPRING_DAMPING: f32 = 18.0;
pub const SPRING_MASS: f32 = 0.25;
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const SPRING_MAX_FRAME_SEC: f32 = 0.25; // a backgrounded tab resumes without a jump
pub const SPRING_REST_EPSILON: f32 = 1e-4;

// Reveal
pub const VEIL_FADE_SEC: f32 = 0.25;
pub const LAYER_FADE_SEC: f32 = 0.4;
pub const LAYER_STAGGER_SEC: f32 = 0.045;

// Overlay slot paints above every layer
pub const OVERLAY_Z_INDEX: i32 = 30;
