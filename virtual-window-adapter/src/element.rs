use std::cell::RefCell;
use std::rc::Rc;

use virtual_window::{ScrollElement, ScrollEventKind, Size, SubscriptionId, Wake};

/// An in-memory scroll element.
///
/// The offset is clamped to `[0, content_height - client.height]`. Content height defaults to
/// unbounded, which suits a component whose content is sized by the engine's padding rather
/// than by real layout.
pub struct SimScrollElement {
    client: Size,
    content_height: f64,
    offset: f64,
    next_id: u64,
    listeners: Vec<(SubscriptionId, ScrollEventKind, Wake)>,
}

impl SimScrollElement {
    pub fn new(client: Size) -> Self {
        Self {
            client,
            content_height: f64::INFINITY,
            offset: 0.0,
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn with_content_height(mut self, content_height: f64) -> Self {
        self.content_height = content_height;
        self.offset = self.offset.min(self.max_offset());
        self
    }

    pub fn into_shared(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }

    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Updates the scrollable height. A shrinking content area pulls the offset back, which
    /// fires a scroll notification the way a browser does.
    pub fn set_content_height(&mut self, content_height: f64) {
        self.content_height = content_height;
        let clamped = self.offset.min(self.max_offset());
        if clamped != self.offset {
            self.offset = clamped;
            self.fire(ScrollEventKind::Scroll);
        }
    }

    pub fn max_offset(&self) -> f64 {
        (self.content_height - self.client.height).max(0.0)
    }

    /// Simulates a user scroll (wheel, drag, keyboard).
    pub fn scroll_to(&mut self, offset: f64) {
        self.set_scroll_offset(offset);
    }

    /// Simulates a resize of the element's visible area.
    pub fn resize(&mut self, client: Size) {
        if client == self.client {
            return;
        }
        self.client = client;
        self.offset = self.offset.min(self.max_offset());
        self.fire(ScrollEventKind::Resize);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn fire(&self, kind: ScrollEventKind) {
        for (_, k, wake) in &self.listeners {
            if *k == kind {
                wake();
            }
        }
    }
}

impl ScrollElement for SimScrollElement {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        let offset = if offset.is_nan() {
            0.0
        } else {
            offset.clamp(0.0, self.max_offset())
        };
        if offset != self.offset {
            self.offset = offset;
            self.fire(ScrollEventKind::Scroll);
        }
    }

    fn client_size(&self) -> Size {
        self.client
    }

    fn subscribe(&mut self, kind: ScrollEventKind, wake: Wake) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, kind, wake));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(i, _, _)| *i != id);
    }
}

impl core::fmt::Debug for SimScrollElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SimScrollElement")
            .field("client", &self.client)
            .field("content_height", &self.content_height)
            .field("offset", &self.offset)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
