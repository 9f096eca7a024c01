//! Dimension inference for a uniformly sized list or grid.
//!
//! Everything here is a pure function of what the host measured this pass. Nothing is cached:
//! the engine re-reads the container and the mounted children before every window computation.

use crate::{ChildBox, Size};

/// Measurements gathered by the engine before probing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProbeInput {
    /// Client size of the active scroll container (own element, external element or viewport).
    pub client_size: Size,
    /// Scrollbar allowances subtracted from `client_size`.
    pub scrollbar: Size,
    /// Explicit item width. `None` (or a non-positive value) means "probe it".
    pub item_width: Option<f64>,
    /// Explicit item height. `None` (or a non-positive value) means "probe it".
    pub item_height: Option<f64>,
    /// Raw scroll offset of the active container.
    pub scroll_offset: f64,
}

/// Dimensions of the viewport and of a single item, recomputed on every pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub item_count: usize,
    /// Viewport size net of scrollbar allowances.
    pub viewport: Size,
    pub item: Size,
    /// Items per row used for windowing (probed, or the calculated fallback).
    pub items_per_row: usize,
    /// `max(1, floor(viewport.width / item.width))`.
    pub items_per_row_by_calc: usize,
    pub items_per_column: usize,
}

impl Dimensions {
    /// `item.height * item_count / items_per_row`.
    pub fn total_extent(&self) -> f64 {
        total_extent(self.item.height, self.item_count, self.items_per_row)
    }
}

pub(crate) fn total_extent(item_height: f64, item_count: usize, items_per_row: usize) -> f64 {
    item_height * item_count as f64 / items_per_row.max(1) as f64
}

/// Counts how many leading children share the first child's top offset.
///
/// Returns `0` when nothing is mounted. A partially mounted last row undercounts, which is what
/// the single-row correction in [`probe`] compensates for.
pub fn count_items_per_row(children: &[ChildBox]) -> usize {
    let Some(first) = children.first() else {
        return 0;
    };
    children
        .iter()
        .take_while(|child| child.top == first.top)
        .count()
}

/// Number of whole `unit`s that fit in `span`, never less than one.
fn whole_fit(span: f64, unit: f64) -> usize {
    let n = (span / unit).floor();
    if n.is_finite() && n >= 1.0 {
        n as usize
    } else {
        1
    }
}

fn explicit(size: Option<f64>) -> Option<f64> {
    size.filter(|s| s.is_finite() && *s > 0.0)
}

/// Infers the dimensions record for one pass.
pub fn probe(input: &ProbeInput, item_count: usize, children: &[ChildBox]) -> Dimensions {
    let viewport = Size {
        width: (input.client_size.width - input.scrollbar.width).max(0.0),
        height: (input.client_size.height - input.scrollbar.height).max(0.0),
    };

    let width = explicit(input.item_width);
    let height = explicit(input.item_height);
    let first = match (width, height) {
        (Some(_), Some(_)) => None,
        _ => Some(children.first().map_or(viewport, |c| Size::new(c.width, c.height))),
    };
    let item = Size {
        width: width.or(first.map(|s| s.width)).unwrap_or(viewport.width),
        height: height.or(first.map(|s| s.height)).unwrap_or(viewport.height),
    };

    let mut items_per_row = count_items_per_row(children).max(1);
    let items_per_row_by_calc = whole_fit(viewport.width, item.width);
    let items_per_column = whole_fit(viewport.height, item.height);

    if items_per_column == 1 {
        let count = item_count as f64;
        let extent = total_extent(item.height, item_count, items_per_row);
        let scrolled = input.scroll_offset.max(0.0);
        let projected = (scrolled / extent * count).floor() + items_per_row_by_calc as f64;
        if projected >= count {
            items_per_row = items_per_row_by_calc;
        }
    }

    Dimensions {
        item_count,
        viewport,
        item,
        items_per_row,
        items_per_row_by_calc,
        items_per_column,
    }
}
