use std::cell::RefCell;
use std::rc::Rc;

use virtual_window::{
    ChildBox, RenderSurface, ScrollElement, ScrollEventKind, Size, SubscriptionId, VirtualWindow,
    Wake, Window, WindowOptions,
};

// A fixed-size scroll element that never notifies. The example drives passes by hand.
struct Pane {
    client: Size,
    offset: f64,
}

impl ScrollElement for Pane {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.offset = offset.max(0.0);
    }

    fn client_size(&self) -> Size {
        self.client
    }

    fn subscribe(&mut self, _kind: ScrollEventKind, _wake: Wake) -> SubscriptionId {
        SubscriptionId(0)
    }

    fn unsubscribe(&mut self, _id: SubscriptionId) {}
}

// Explicit item sizes, so the surface never needs to report children.
struct NoChildren;

impl RenderSurface for NoChildren {
    fn for_each_child_box(&self, _f: &mut dyn FnMut(ChildBox)) {}

    fn apply_layout(&mut self, window: &Window) {
        println!(
            "layout: padding_top={} content_height={}",
            window.leading_padding, window.total_extent
        );
    }
}

fn main() {
    // Example: a 10k-row list with 24px rows in a 240px pane.
    let rows: Vec<String> = (0..10_000).map(|i| format!("row {i}")).collect();
    let pane = Rc::new(RefCell::new(Pane {
        client: Size::new(320.0, 240.0),
        offset: 0.0,
    }));

    let mut w = VirtualWindow::new(
        WindowOptions::new(rows)
            .with_item_size(Some(320.0), Some(24.0))
            .with_buffer_amount(2),
        pane.clone(),
    );
    w.on_update(|slice: &[String]| {
        println!("mount {} rows, first={:?}", slice.len(), slice.first());
    });
    w.on_change(|r| println!("change: {}..{}", r.start, r.end));

    let mut surface = NoChildren;
    while w.on_frame(&mut surface) {}

    // Jump to row 5000. Passes only run when a frame is pending.
    w.set_scroll_offset(5_000.0 * 24.0);
    while w.on_frame(&mut surface) {}

    println!("visible: {:?}", w.range());
}
