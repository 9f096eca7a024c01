use virtual_window::{SharedElement, VirtualWindow, WindowOptions, WindowRange};

use crate::{Easing, GridSurface, IndexAnimation};

/// Nominal paint-frame interval used by [`Controller::settle`].
pub const FRAME_MS: u64 = 16;

/// A framework-neutral controller that owns a [`VirtualWindow`] and the [`GridSurface`] it
/// renders into.
///
/// This type does not hold any UI objects. Hosts drive it by calling `tick(now_ms)` once per
/// paint frame. A tick advances an active [`IndexAnimation`], runs the engine's pending pass
/// (if any) and mounts the resulting range into the surface, so the next pass measures real
/// children.
///
/// User scrolls should go through [`Self::on_user_scroll`] (or cancel the animation
/// themselves), otherwise an active animation keeps overriding the offset until it ends.
#[derive(Debug)]
pub struct Controller<T> {
    window: VirtualWindow<T>,
    surface: GridSurface,
    animation: Option<IndexAnimation>,
}

impl<T> Controller<T> {
    pub fn new(options: WindowOptions<T>, own: SharedElement, surface: GridSurface) -> Self {
        Self::from_window(VirtualWindow::new(options, own), surface)
    }

    pub fn from_window(window: VirtualWindow<T>, surface: GridSurface) -> Self {
        Self {
            window,
            surface,
            animation: None,
        }
    }

    pub fn window(&self) -> &VirtualWindow<T> {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut VirtualWindow<T> {
        &mut self.window
    }

    pub fn surface(&self) -> &GridSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut GridSurface {
        &mut self.surface
    }

    pub fn into_parts(self) -> (VirtualWindow<T>, GridSurface) {
        (self.window, self.surface)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn animation(&self) -> Option<IndexAnimation> {
        self.animation
    }

    pub fn cancel_animation(&mut self) {
        self.animation = None;
    }

    /// The range currently mounted in the surface.
    pub fn mounted(&self) -> WindowRange {
        self.surface.mounted()
    }

    /// Call this when the user scrolls. Cancels any active animation.
    pub fn on_user_scroll(&mut self, offset: f64) {
        self.cancel_animation();
        self.window.set_scroll_offset(offset);
    }

    /// Advances the controller by one paint frame.
    ///
    /// Returns whether the engine ran a pass.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if let Some(animation) = self.animation {
            // The item may have moved since the last frame as measurements settled.
            match self.window.scroll_target_for_index(animation.index, &self.surface) {
                Some(target) => {
                    self.window.set_scroll_offset(animation.offset_at(now_ms, target));
                    if animation.is_finished(now_ms) {
                        self.animation = None;
                    }
                }
                // The collection shrank under the animation.
                None => self.animation = None,
            }
        }

        if !self.window.on_frame(&mut self.surface) {
            return false;
        }
        self.surface.mount(self.window.range());
        true
    }

    /// Ticks at [`FRAME_MS`] intervals starting at `now_ms` until no pass ran and no animation
    /// is active, or `max_frames` frames have elapsed.
    ///
    /// Returns the number of frames ticked.
    pub fn settle(&mut self, now_ms: u64, max_frames: usize) -> usize {
        let mut now = now_ms;
        for frame in 0..max_frames {
            let ran = self.tick(now);
            if !ran && !self.is_animating() {
                return frame + 1;
            }
            now += FRAME_MS;
        }
        max_frames
    }

    /// Scrolls immediately so `index` lands in the next window (no animation).
    ///
    /// Returns the applied offset, or `None` when `index` is out of range.
    pub fn scroll_to_index(&mut self, index: usize) -> Option<f64> {
        self.cancel_animation();
        self.window.scroll_to_index(index, &self.surface)
    }

    /// Scrolls immediately to the first element equal to `item` (no animation).
    pub fn scroll_into(&mut self, item: &T) -> Option<f64>
    where
        T: PartialEq,
    {
        self.cancel_animation();
        self.window.scroll_into(item, &self.surface)
    }

    /// Starts animating towards `index`, replacing any active animation. The new animation
    /// starts from the current offset.
    ///
    /// Returns the destination as currently resolved, or `None` (leaving any active animation
    /// alone) when `index` is out of range.
    pub fn scroll_to_index_animated(
        &mut self,
        index: usize,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Option<f64> {
        let target = self.window.scroll_target_for_index(index, &self.surface)?;
        let origin = self.window.scroll_offset();
        self.animation = Some(IndexAnimation::new(index, origin, now_ms, duration_ms, easing));
        self.window.refresh();
        Some(target)
    }

    /// Starts animating towards the first element equal to `item`. Absent items are a no-op.
    pub fn scroll_into_animated(
        &mut self,
        item: &T,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Option<f64>
    where
        T: PartialEq,
    {
        let index = self.window.items().iter().position(|it| it == item)?;
        self.scroll_to_index_animated(index, now_ms, duration_ms, easing)
    }
}
