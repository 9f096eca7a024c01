/// A width/height pair in host pixels. Used for client areas, the viewport and item footprints.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Creates a size. Values are taken as-is; the probe treats non-finite sizes as degenerate.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Bounding box of one mounted child, relative to the content area it is laid out in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChildBox {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// A published `[start, end)` index range. This is the payload of `start`/`end`/`change`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl WindowRange {
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}

/// Output of one windowing pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start: usize,
    pub end: usize, // exclusive, buffer included
    /// Space to reserve above the first rendered item so it lands at its virtual position.
    pub leading_padding: f64,
    /// Height of the whole virtual content (every row, rendered or not).
    pub total_extent: f64,
}

impl Window {
    pub const EMPTY: Self = Self {
        start: 0,
        end: 0,
        leading_padding: 0.0,
        total_extent: 0.0,
    };

    pub fn range(&self) -> WindowRange {
        WindowRange {
            start: self.start,
            end: self.end,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Startup stabilization state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Measurements may still be wrong; `start`/`end`/`change` are withheld and passes repeat.
    #[default]
    Stabilizing,
    Steady,
}

/// Which scroll origin is currently bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SourceKind {
    Own,
    Element,
    Viewport,
}

/// A notification a [`crate::ScrollElement`] delivers to subscribed listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollEventKind {
    Scroll,
    Resize,
}
