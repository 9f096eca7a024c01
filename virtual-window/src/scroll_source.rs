use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::frame::Wake;
use crate::{ScrollEventKind, Size, SourceKind};

/// Handle returned by [`ScrollElement::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubscriptionId(pub u64);

/// A scrollable host element (or the page viewport).
///
/// The engine reads the offset and client size fresh on every pass and never caches them.
pub trait ScrollElement {
    fn scroll_offset(&self) -> f64;

    fn set_scroll_offset(&mut self, offset: f64);

    fn client_size(&self) -> Size;

    /// Registers `wake` to be called when `kind` happens.
    fn subscribe(&mut self, kind: ScrollEventKind, wake: Wake) -> SubscriptionId;

    fn unsubscribe(&mut self, id: SubscriptionId);
}

pub type SharedElement = Rc<RefCell<dyn ScrollElement>>;

/// Which element supplies the scroll offset.
///
/// External elements are held weakly: when the host has already dropped the element, the
/// engine falls back to its own element.
#[derive(Clone, Default)]
pub enum ScrollContainer {
    /// The component scrolls itself.
    #[default]
    Own,
    /// An ancestor element scrolls the component.
    Element(Weak<RefCell<dyn ScrollElement>>),
    /// The page viewport scrolls the component.
    Viewport(Weak<RefCell<dyn ScrollElement>>),
}

impl ScrollContainer {
    pub fn element(element: &SharedElement) -> Self {
        Self::Element(Rc::downgrade(element))
    }

    pub fn viewport(viewport: &SharedElement) -> Self {
        Self::Viewport(Rc::downgrade(viewport))
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Own => SourceKind::Own,
            Self::Element(_) => SourceKind::Element,
            Self::Viewport(_) => SourceKind::Viewport,
        }
    }

    /// Whether both values designate the same element.
    pub fn same_target(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Own, Self::Own) => true,
            (Self::Element(a), Self::Element(b)) | (Self::Viewport(a), Self::Viewport(b)) => {
                Weak::ptr_eq(a, b)
            }
            _ => false,
        }
    }

    fn resolve(&self) -> Option<SharedElement> {
        match self {
            Self::Own => None,
            Self::Element(w) | Self::Viewport(w) => w.upgrade(),
        }
    }
}

impl core::fmt::Debug for ScrollContainer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Own => f.write_str("Own"),
            Self::Element(_) => f.write_str("Element(..)"),
            Self::Viewport(_) => f.write_str("Viewport(..)"),
        }
    }
}

/// The single active scroll source.
///
/// Its listeners are gated by a `live` flag, so they stop arming frames as soon as the binding
/// is released even if the element could not be reached to unsubscribe them.
pub(crate) struct ScrollBinding {
    kind: SourceKind,
    element: SharedElement,
    live: Rc<Cell<bool>>,
    subscriptions: Vec<SubscriptionId>,
}

impl ScrollBinding {
    pub(crate) fn bind(container: &ScrollContainer, own: &SharedElement, wake: &Wake) -> Self {
        let (kind, element) = match container.resolve() {
            Some(element) => (container.kind(), element),
            None => {
                if container.kind() != SourceKind::Own {
                    vwarn!(
                        requested = ?container.kind(),
                        "scroll container is gone, falling back to own element"
                    );
                }
                (SourceKind::Own, Rc::clone(own))
            }
        };

        let live = Rc::new(Cell::new(true));
        let gated: Wake = {
            let live = Rc::clone(&live);
            let wake = Rc::clone(wake);
            Rc::new(move || {
                if live.get() {
                    wake();
                }
            })
        };
        let subscriptions = {
            let mut el = element.borrow_mut();
            [ScrollEventKind::Scroll, ScrollEventKind::Resize]
                .into_iter()
                .map(|event| el.subscribe(event, Rc::clone(&gated)))
                .collect()
        };
        vdebug!(kind = ?kind, "scroll source bound");

        Self {
            kind,
            element,
            live,
            subscriptions,
        }
    }

    pub(crate) fn kind(&self) -> SourceKind {
        self.kind
    }

    pub(crate) fn offset(&self) -> f64 {
        self.element.borrow().scroll_offset()
    }

    pub(crate) fn set_offset(&self, offset: f64) {
        self.element.borrow_mut().set_scroll_offset(offset);
    }

    pub(crate) fn client_size(&self) -> Size {
        self.element.borrow().client_size()
    }

    /// Silences and unsubscribes the listeners.
    ///
    /// Returns the subscriptions that could not be removed because the host still borrows the
    /// element; the caller retries them with [`PendingUnsubscribe::retry`].
    pub(crate) fn release(mut self) -> Option<PendingUnsubscribe> {
        self.live.set(false);
        let pending = PendingUnsubscribe {
            element: Rc::downgrade(&self.element),
            subscriptions: core::mem::take(&mut self.subscriptions),
        };
        let left = pending.retry();
        if left.is_some() {
            vwarn!(kind = ?self.kind, "scroll source busy during unbind, unsubscribe deferred");
        } else {
            vdebug!(kind = ?self.kind, "scroll source unbound");
        }
        left
    }
}

impl Drop for ScrollBinding {
    fn drop(&mut self) {
        self.live.set(false);
        if self.subscriptions.is_empty() {
            return;
        }
        if let Ok(mut el) = self.element.try_borrow_mut() {
            for id in self.subscriptions.drain(..) {
                el.unsubscribe(id);
            }
        }
    }
}

/// Subscriptions of a released binding that still have to be removed from their element.
pub(crate) struct PendingUnsubscribe {
    element: Weak<RefCell<dyn ScrollElement>>,
    subscriptions: Vec<SubscriptionId>,
}

impl PendingUnsubscribe {
    /// Unsubscribes if the element is reachable. Returns `self` while it is still borrowed.
    pub(crate) fn retry(self) -> Option<Self> {
        let element = self.element.upgrade()?;
        let Ok(mut el) = element.try_borrow_mut() else {
            return Some(self);
        };
        for id in &self.subscriptions {
            el.unsubscribe(*id);
        }
        None
    }
}
