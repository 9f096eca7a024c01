/// Easing curves for animated navigation. All of them start fast and land softly, so a
/// destination that moves while sizes settle is approached without overshoot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    #[default]
    EaseOutQuad,
    EaseOutCubic,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, progress: f64) -> f64 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Self::Linear => p,
            Self::EaseOutQuad => 1.0 - (1.0 - p).powi(2),
            Self::EaseOutCubic => 1.0 - (1.0 - p).powi(3),
        }
    }
}

/// An in-flight animated scroll towards an item index.
///
/// The destination offset is not stored. The controller resolves it through
/// `VirtualWindow::scroll_target_for_index` on every frame, so an animation started while
/// item sizes are still being measured lands where the item ends up.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexAnimation {
    pub index: usize,
    /// Scroll offset when the animation started.
    pub origin: f64,
    pub started_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl IndexAnimation {
    pub fn new(
        index: usize,
        origin: f64,
        started_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Self {
        Self {
            index,
            origin,
            started_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.started_ms) as f64;
        (elapsed / self.duration_ms as f64).min(1.0)
    }

    pub fn is_finished(&self, now_ms: u64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// The offset to apply at `now_ms` given the current resolution of the destination.
    /// Exactly `target` once finished.
    pub fn offset_at(&self, now_ms: u64, target: f64) -> f64 {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            return target;
        }
        self.origin + (target - self.origin) * self.easing.apply(progress)
    }
}
