/// Decides whether any pointer-driven motion is allowed.
///
/// The caller's `force_motion` override wins over the host's ambient
/// reduced-motion preference. The ambient half can change at runtime, so the
/// flag is recomputed via [`MotionPolicy::set_prefers_reduced`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionPolicy {
    pub force_motion: bool,
    pub prefers_reduced: bool,
}

impl MotionPolicy {
    pub fn new(force_motion: bool, prefers_reduced: bool) -> Self {
        Self {
            force_motion,
            prefers_reduced,
        }
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.force_motion || !self.prefers_reduced
    }

    /// Update the ambient preference; returns `true` if `enabled()` flipped.
    pub fn set_prefers_reduced(&mut self, prefers_reduced: bool) -> bool {
        let before = self.enabled();
        self.prefers_reduced = prefers_reduced;
        before != self.enabled()
    }
}
