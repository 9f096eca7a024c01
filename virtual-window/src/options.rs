use std::sync::Arc;

use crate::ScrollContainer;

/// Configuration for [`crate::VirtualWindow`].
///
/// Cheap to clone: the collection is held in an `Arc`, so adapters can tweak a field and hand
/// the result to `VirtualWindow::set_options` without copying items.
pub struct WindowOptions<T> {
    /// The ordered collection to window over. Replacing it with a different `Arc` invalidates
    /// the published window.
    pub items: Arc<[T]>,

    /// Explicit uniform item width. When `None`, the first mounted child is measured.
    pub item_width: Option<f64>,
    /// Explicit uniform item height. When `None`, the first mounted child is measured.
    pub item_height: Option<f64>,

    /// Extra items rendered before `start` and after `end`.
    pub buffer_amount: usize,

    pub scroll_container: ScrollContainer,

    /// Subtracted from the measured viewport width.
    pub scrollbar_width: f64,
    /// Subtracted from the measured viewport height.
    pub scrollbar_height: f64,

    /// When `false`, recomputation requests are dropped. Switching back to `true` re-enters
    /// startup stabilization.
    pub updates_enabled: bool,
}

impl<T> Clone for WindowOptions<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            item_width: self.item_width,
            item_height: self.item_height,
            buffer_amount: self.buffer_amount,
            scroll_container: self.scroll_container.clone(),
            scrollbar_width: self.scrollbar_width,
            scrollbar_height: self.scrollbar_height,
            updates_enabled: self.updates_enabled,
        }
    }
}

impl<T> WindowOptions<T> {
    pub fn new(items: impl Into<Arc<[T]>>) -> Self {
        Self {
            items: items.into(),
            item_width: None,
            item_height: None,
            buffer_amount: 0,
            scroll_container: ScrollContainer::Own,
            scrollbar_width: 0.0,
            scrollbar_height: 0.0,
            updates_enabled: true,
        }
    }

    pub fn with_items(mut self, items: impl Into<Arc<[T]>>) -> Self {
        self.items = items.into();
        self
    }

    pub fn with_item_size(mut self, width: Option<f64>, height: Option<f64>) -> Self {
        self.item_width = width;
        self.item_height = height;
        self
    }

    pub fn with_item_width(mut self, width: f64) -> Self {
        self.item_width = Some(width);
        self
    }

    pub fn with_item_height(mut self, height: f64) -> Self {
        self.item_height = Some(height);
        self
    }

    pub fn with_buffer_amount(mut self, buffer_amount: usize) -> Self {
        self.buffer_amount = buffer_amount;
        self
    }

    pub fn with_scroll_container(mut self, scroll_container: ScrollContainer) -> Self {
        self.scroll_container = scroll_container;
        self
    }

    pub fn with_scrollbar_allowance(mut self, width: f64, height: f64) -> Self {
        self.scrollbar_width = width;
        self.scrollbar_height = height;
        self
    }

    pub fn with_updates_enabled(mut self, updates_enabled: bool) -> Self {
        self.updates_enabled = updates_enabled;
        self
    }
}

impl<T> core::fmt::Debug for WindowOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowOptions")
            .field("items", &self.items.len())
            .field("item_width", &self.item_width)
            .field("item_height", &self.item_height)
            .field("buffer_amount", &self.buffer_amount)
            .field("scroll_container", &self.scroll_container)
            .field("scrollbar_width", &self.scrollbar_width)
            .field("scrollbar_height", &self.scrollbar_height)
            .field("updates_enabled", &self.updates_enabled)
            .finish()
    }
}
