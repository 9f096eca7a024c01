use std::sync::Arc;

use crate::calculator::calculate;
use crate::frame::FrameRequest;
use crate::notifier::{ListenerId, Notifier, RangeEvent};
use crate::probe::{Dimensions, ProbeInput, probe};
use crate::scroll_source::{PendingUnsubscribe, ScrollBinding, ScrollContainer, SharedElement};
use crate::{
    ChildBox, Phase, RenderSurface, Size, SourceKind, Window, WindowOptions, WindowRange,
    WindowState,
};

/// A headless viewport windowing engine.
///
/// This type is UI-agnostic:
/// - It does not render anything. It tells the host which slice of the collection to mount
///   (`update`) and where that slice sits (`RenderSurface::apply_layout`).
/// - Scroll and resize notifications only arm a [`FrameRequest`]. The host calls
///   [`Self::on_frame`] once per paint tick, which runs at most one recomputation pass.
/// - Measurements are re-read from the scroll source and the surface on every pass.
///
/// Events, in emission order within one pass: `update(&[T])`, `start`, `end`, `change`. While
/// the window is still stabilizing after startup (or after a collection reset) only `update`
/// fires.
pub struct VirtualWindow<T> {
    options: WindowOptions<T>,
    own: SharedElement,
    binding: Option<ScrollBinding>,
    unbinding: Vec<PendingUnsubscribe>,
    frame: FrameRequest,
    notifier: Notifier<T>,
    state: WindowState,
    dimensions: Option<Dimensions>,
    force_publish: bool,
    children: Vec<ChildBox>, // scratch, refilled every pass
    disposed: bool,
}

impl<T> VirtualWindow<T> {
    /// Creates an engine bound to its configured scroll source and requests the first pass.
    ///
    /// `own` is the component's own scroll element, used when `options.scroll_container` is
    /// [`ScrollContainer::Own`] or when an external container is no longer alive.
    pub fn new(options: WindowOptions<T>, own: SharedElement) -> Self {
        let frame = FrameRequest::new();
        let binding = ScrollBinding::bind(&options.scroll_container, &own, &frame.waker());
        vdebug!(
            items = options.items.len(),
            buffer_amount = options.buffer_amount,
            updates_enabled = options.updates_enabled,
            "VirtualWindow::new"
        );
        if options.updates_enabled {
            frame.request();
        } else {
            frame.suspend();
        }
        Self {
            options,
            own,
            binding: Some(binding),
            unbinding: Vec::new(),
            frame,
            notifier: Notifier::new(),
            state: WindowState::default(),
            dimensions: None,
            force_publish: false,
            children: Vec::new(),
            disposed: false,
        }
    }

    pub fn options(&self) -> &WindowOptions<T> {
        &self.options
    }

    pub fn items(&self) -> &Arc<[T]> {
        &self.options.items
    }

    /// Replaces the options.
    ///
    /// Any effective change forces the next pass to publish `update` (and `change` once
    /// steady), even if the index range is unchanged. In addition:
    /// - a new collection replacing an empty one re-enters stabilization;
    /// - a different scroll container unbinds the old source before binding the new one;
    /// - toggling `updates_enabled` suspends or resumes scheduling (resuming re-enters
    ///   stabilization).
    pub fn set_options(&mut self, options: WindowOptions<T>) {
        if self.disposed {
            vwarn!("set_options after dispose ignored");
            return;
        }
        if same_options(&self.options, &options) {
            return;
        }
        let prev = core::mem::replace(&mut self.options, options);

        if !Arc::ptr_eq(&prev.items, &self.options.items) {
            vdebug!(
                from = prev.items.len(),
                to = self.options.items.len(),
                "collection replaced"
            );
            if prev.items.is_empty() {
                self.state.phase = Phase::Stabilizing;
            }
        }

        if !prev
            .scroll_container
            .same_target(&self.options.scroll_container)
        {
            self.unbind();
            self.binding = Some(ScrollBinding::bind(
                &self.options.scroll_container,
                &self.own,
                &self.frame.waker(),
            ));
        }

        if prev.updates_enabled != self.options.updates_enabled {
            if self.options.updates_enabled {
                vdebug!("updates resumed");
                self.frame.resume();
                self.state.phase = Phase::Stabilizing;
            } else {
                vdebug!("updates suspended");
                self.frame.suspend();
            }
        }

        self.force_publish = true;
        self.refresh();
    }

    /// Clones the current options, applies `f`, then delegates to [`Self::set_options`].
    pub fn update_options(&mut self, f: impl FnOnce(&mut WindowOptions<T>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_items(&mut self, items: impl Into<Arc<[T]>>) {
        let items = items.into();
        self.update_options(move |o| o.items = items);
    }

    pub fn set_buffer_amount(&mut self, buffer_amount: usize) {
        self.update_options(|o| o.buffer_amount = buffer_amount);
    }

    pub fn set_item_size(&mut self, width: Option<f64>, height: Option<f64>) {
        self.update_options(|o| {
            o.item_width = width;
            o.item_height = height;
        });
    }

    pub fn set_scrollbar_allowance(&mut self, width: f64, height: f64) {
        self.update_options(|o| {
            o.scrollbar_width = width;
            o.scrollbar_height = height;
        });
    }

    pub fn set_scroll_container(&mut self, scroll_container: ScrollContainer) {
        self.update_options(|o| o.scroll_container = scroll_container);
    }

    pub fn set_updates_enabled(&mut self, updates_enabled: bool) {
        self.update_options(|o| o.updates_enabled = updates_enabled);
    }

    /// Registers an `update` listener. It receives `items[start..end]` of every published
    /// window, including while stabilizing.
    pub fn on_update(&mut self, f: impl FnMut(&[T]) + 'static) -> ListenerId {
        self.notifier.add_update(Box::new(f))
    }

    /// Registers a listener fired when a steady window's `start` moves.
    pub fn on_start(&mut self, f: impl FnMut(WindowRange) + 'static) -> ListenerId {
        self.notifier.add_range(RangeEvent::Start, Box::new(f))
    }

    /// Registers a listener fired when a steady window's `end` moves.
    pub fn on_end(&mut self, f: impl FnMut(WindowRange) + 'static) -> ListenerId {
        self.notifier.add_range(RangeEvent::End, Box::new(f))
    }

    /// Registers a listener fired after every steady publication.
    pub fn on_change(&mut self, f: impl FnMut(WindowRange) + 'static) -> ListenerId {
        self.notifier.add_range(RangeEvent::Change, Box::new(f))
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.notifier.remove(id)
    }

    pub fn listener_count(&self) -> usize {
        self.notifier.len()
    }

    /// The request slot shared with scroll listeners. Hosts poll `is_pending` to decide
    /// whether to schedule a paint-frame callback.
    pub fn frame_request(&self) -> &FrameRequest {
        &self.frame
    }

    pub fn needs_frame(&self) -> bool {
        self.frame.is_pending()
    }

    /// Requests a recomputation pass on the next frame.
    pub fn refresh(&self) {
        if self.frame.request() {
            vtrace!("frame requested");
        }
    }

    /// Runs the pending pass, if any. Returns whether a pass ran.
    pub fn on_frame(&mut self, surface: &mut dyn RenderSurface) -> bool {
        self.retry_unbinding();
        if self.disposed || !self.frame.take() {
            return false;
        }
        self.run_pass(surface);
        true
    }

    fn run_pass(&mut self, surface: &mut dyn RenderSurface) {
        let Some(binding) = self.binding.as_ref() else {
            return;
        };
        let raw = binding.offset();
        let client = binding.client_size();
        let correction = offset_correction(&*surface, binding.kind());

        let dims = self.measure(&*surface, client, raw);
        let window = calculate(&dims, raw, correction, self.options.buffer_amount);
        vtrace!(
            scroll_offset = raw,
            correction,
            items_per_row = dims.items_per_row,
            items_per_column = dims.items_per_column,
            item_height = dims.item.height,
            start = window.start,
            end = window.end,
            "pass"
        );
        if dims.item_count > 0 && window.is_empty() {
            vwarn!(
                item_count = dims.item_count,
                item_height = dims.item.height,
                "degenerate layout, publishing an empty window"
            );
        }

        surface.apply_layout(&window);
        self.dimensions = Some(dims);
        self.state.window = window;

        let force = core::mem::take(&mut self.force_publish);
        let outcome = self.notifier.publish(
            &self.options.items,
            window.range(),
            &mut self.state.previous,
            self.state.phase,
            force,
        );
        if self.state.phase.advance(outcome) {
            self.frame.request();
        }
    }

    fn measure(&mut self, surface: &dyn RenderSurface, client: Size, raw: f64) -> Dimensions {
        let children = &mut self.children;
        children.clear();
        surface.for_each_child_box(&mut |child| children.push(child));

        let input = ProbeInput {
            client_size: client,
            scrollbar: Size::new(self.options.scrollbar_width, self.options.scrollbar_height),
            item_width: self.options.item_width,
            item_height: self.options.item_height,
            scroll_offset: raw,
        };
        probe(&input, self.options.items.len(), &self.children)
    }

    /// Current offset of the active scroll source.
    pub fn scroll_offset(&self) -> f64 {
        self.binding.as_ref().map_or(0.0, ScrollBinding::offset)
    }

    /// Assigns an offset to the active scroll source and requests a pass.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        let Some(binding) = self.binding.as_ref() else {
            return;
        };
        binding.set_offset(offset);
        self.refresh();
    }

    /// Computes the scroll offset that brings `index` into the window, without applying it.
    ///
    /// The target is the top of the item's row, pulled back by the buffer the same way the
    /// leading padding is, plus the offset correction of the active source.
    pub fn scroll_target_for_index(
        &mut self,
        index: usize,
        surface: &dyn RenderSurface,
    ) -> Option<f64> {
        if index >= self.options.items.len() {
            return None;
        }
        let binding = self.binding.as_ref()?;
        let raw = binding.offset();
        let client = binding.client_size();
        let correction = offset_correction(surface, binding.kind());

        let dims = self.measure(surface, client, raw);
        let item_height = dims.item.height;
        let row = (index / dims.items_per_row.max(1)) as f64;
        let pulled_back = index.min(self.options.buffer_amount) as f64;
        let target = row * item_height - item_height * pulled_back + correction;
        target.is_finite().then_some(target)
    }

    /// Scrolls the active source so that `index` lands in the next window.
    ///
    /// Returns the offset reported by the source afterwards, or `None` (and does nothing) when
    /// `index` is out of range.
    pub fn scroll_to_index(&mut self, index: usize, surface: &dyn RenderSurface) -> Option<f64> {
        let target = self.scroll_target_for_index(index, surface)?;
        vtrace!(index, target, "scroll_to_index");
        self.set_scroll_offset(target);
        Some(self.scroll_offset())
    }

    /// Scrolls to the first element equal to `item`. Absent items are a no-op.
    pub fn scroll_into(&mut self, item: &T, surface: &dyn RenderSurface) -> Option<f64>
    where
        T: PartialEq,
    {
        let index = self.options.items.iter().position(|it| it == item)?;
        self.scroll_to_index(index, surface)
    }

    /// The window computed by the most recent pass.
    pub fn window(&self) -> Window {
        self.state.window
    }

    pub fn range(&self) -> WindowRange {
        self.state.window.range()
    }

    /// The slice of the current collection covered by the most recent window.
    pub fn viewport_items(&self) -> &[T] {
        let range = self.range();
        self.options
            .items
            .get(range.start..range.end)
            .unwrap_or(&[])
    }

    /// Dimensions measured by the most recent pass.
    pub fn dimensions(&self) -> Option<Dimensions> {
        self.dimensions
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// The active scroll source, or `None` once disposed.
    pub fn source_kind(&self) -> Option<SourceKind> {
        self.binding.as_ref().map(ScrollBinding::kind)
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Whether listeners of a previous scroll source are still waiting to be unsubscribed
    /// because the host was borrowing that element at unbind time. They are inert meanwhile and
    /// are retried on every [`Self::on_frame`].
    pub fn has_pending_unbind(&self) -> bool {
        !self.unbinding.is_empty()
    }

    fn unbind(&mut self) {
        if let Some(pending) = self.binding.take().and_then(ScrollBinding::release) {
            self.unbinding.push(pending);
        }
    }

    fn retry_unbinding(&mut self) {
        if self.unbinding.is_empty() {
            return;
        }
        let pending = core::mem::take(&mut self.unbinding);
        self.unbinding = pending
            .into_iter()
            .filter_map(PendingUnsubscribe::retry)
            .collect();
    }

    /// Unbinds every scroll listener, drops every event listener and refuses further passes.
    ///
    /// Also runs on drop.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.unbind();
        self.frame.close();
        self.notifier.clear();
        vdebug!("VirtualWindow disposed");
    }
}

impl<T> Drop for VirtualWindow<T> {
    fn drop(&mut self) {
        self.dispose();
        // Whatever is still borrowed now stays subscribed, but inert.
        self.retry_unbinding();
    }
}

impl<T> core::fmt::Debug for VirtualWindow<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualWindow")
            .field("options", &self.options)
            .field("source", &self.source_kind())
            .field("state", &self.state)
            .field("dimensions", &self.dimensions)
            .field("pending", &self.frame.is_pending())
            .field("listeners", &self.notifier.len())
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

fn offset_correction(surface: &dyn RenderSurface, kind: SourceKind) -> f64 {
    let mut correction = surface.container_offset();
    if kind != SourceKind::Own {
        correction += surface.offset_in_parent();
    }
    correction
}

fn same_options<T>(a: &WindowOptions<T>, b: &WindowOptions<T>) -> bool {
    Arc::ptr_eq(&a.items, &b.items)
        && a.item_width == b.item_width
        && a.item_height == b.item_height
        && a.buffer_amount == b.buffer_amount
        && a.scroll_container.same_target(&b.scroll_container)
        && a.scrollbar_width == b.scrollbar_width
        && a.scrollbar_height == b.scrollbar_height
        && a.updates_enabled == b.updates_enabled
}
