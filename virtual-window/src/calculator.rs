use crate::{Dimensions, Window};

/// Unbuffered bounds of one pass, in item indexes.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Bounds {
    start: f64,
    end: f64,
    leading_padding: f64,
}

/// Computes the window for a scroll position.
///
/// - `scroll_offset` is the raw offset of the active scroll container.
/// - `offset_correction` is the distance from that container's origin to the list content
///   (zero when the component scrolls itself).
/// - `buffer` extra items are added on both sides after the visible rows are resolved.
///
/// The result always satisfies `0 <= start <= end <= dims.item_count`. Degenerate geometry
/// (no items, zero-height items, non-finite measurements) yields an empty window.
pub fn calculate(
    dims: &Dimensions,
    scroll_offset: f64,
    offset_correction: f64,
    buffer: usize,
) -> Window {
    let count = dims.item_count;
    let total_extent = dims.total_extent();
    let Some(bounds) = visible_bounds(dims, total_extent, scroll_offset, offset_correction, buffer)
    else {
        return Window {
            total_extent: if total_extent.is_finite() {
                total_extent
            } else {
                0.0
            },
            ..Window::EMPTY
        };
    };

    // Finite and non-negative by construction.
    let start = bounds.start as usize;
    let end = bounds.end as usize;
    debug_assert!(start <= end, "window start past end ({start} > {end})");

    let start = start.saturating_sub(buffer);
    let end = end.saturating_add(buffer).min(count);
    Window {
        start: start.min(end),
        end,
        leading_padding: bounds.leading_padding,
        total_extent,
    }
}

fn visible_bounds(
    dims: &Dimensions,
    total_extent: f64,
    scroll_offset: f64,
    offset_correction: f64,
    buffer: usize,
) -> Option<Bounds> {
    if !(total_extent.is_finite() && total_extent > 0.0) {
        return None;
    }

    let count = dims.item_count as f64;
    let per_row = dims.items_per_row.max(1) as f64;
    let per_column = dims.items_per_column.max(1) as f64;
    let item_height = dims.item.height;

    let raw = scroll_offset.min(total_extent + offset_correction);
    let scrolled = (raw - offset_correction).max(0.0);
    let row = scrolled / total_extent * count / per_row;
    if !row.is_finite() {
        return None;
    }

    // One extra row of lookahead past the visible rows.
    let end = count.min(row.ceil() * per_row + per_row * (per_column + 1.0));
    let rem = end % per_row;
    let max_start_end = if rem != 0.0 { end + per_row - rem } else { end };
    let max_start = (max_start_end - per_column * per_row - per_row).max(0.0);
    let start = max_start.min(row.floor() * per_row);

    let leading_padding =
        item_height * (start / per_row).ceil() - item_height * start.min(buffer as f64);

    let bounds = Bounds {
        start,
        end,
        leading_padding,
    };
    (start.is_finite() && end.is_finite() && leading_padding.is_finite() && start >= 0.0)
        .then_some(bounds)
}
