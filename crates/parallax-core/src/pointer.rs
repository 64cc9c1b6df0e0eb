use glam::Vec2;

/// Pointer position relative to the surface center, in units of the surface
/// extent: `(0, 0)` is the center and `±0.5` the edges. Not clamped, so a
/// captured drag can report values past the edges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub raw_x: f32,
    pub raw_y: f32,
}

impl PointerState {
    pub const CENTER: Self = Self {
        raw_x: 0.0,
        raw_y: 0.0,
    };

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.raw_x, self.raw_y)
    }
}

/// Client-space rectangle of the surface, as reported by
/// `getBoundingClientRect()`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn has_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Normalize a client-space point. `None` when the surface has no area
    /// yet (not laid out), so callers never see NaN or infinities.
    pub fn normalize(&self, client_x: f64, client_y: f64) -> Option<PointerState> {
        if !self.has_area() || !client_x.is_finite() || !client_y.is_finite() {
            return None;
        }
        let cx = self.left + self.width * 0.5;
        let cy = self.top + self.height * 0.5;
        Some(PointerState {
            raw_x: ((client_x - cx) / self.width) as f32,
            raw_y: ((client_y - cy) / self.height) as f32,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerSample {
    Move { client_x: f64, client_y: f64 },
    Leave,
}

/// Coalesces native pointer events to at most one commit per frame.
///
/// Latest event wins: a move replaces any earlier pending move or leave, and
/// a leave replaces any earlier pending move.
#[derive(Clone, Debug, Default)]
pub struct PointerCoalescer {
    pending: Option<PointerSample>,
    discarded: u32,
}

impl PointerCoalescer {
    pub fn push_move(&mut self, client_x: f64, client_y: f64) {
        self.replace(PointerSample::Move { client_x, client_y });
    }

    pub fn leave(&mut self) {
        self.replace(PointerSample::Leave);
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Events superseded within a frame since the last `take`.
    #[inline]
    pub fn discarded(&self) -> u32 {
        self.discarded
    }

    /// Drain the pending sample and resolve it against the surface rectangle
    /// sampled at the frame boundary.
    pub fn take(&mut self, rect: &SurfaceRect) -> Option<PointerState> {
        self.discarded = 0;
        self.pending.take().map(|sample| match sample {
            PointerSample::Move { client_x, client_y } => rect
                .normalize(client_x, client_y)
                .unwrap_or(PointerState::CENTER),
            PointerSample::Leave => PointerState::CENTER,
        })
    }

    fn replace(&mut self, sample: PointerSample) {
        if self.pending.replace(sample).is_some() {
            self.discarded = self.discarded.saturating_add(1);
        }
    }
}
