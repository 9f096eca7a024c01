use virtual_window::{ScrollContainer, SharedElement, Size, WindowOptions};
use virtual_window_adapter::{Controller, GridSurface, SimScrollElement};

fn main() {
    // Example: a wrapped thumbnail grid scrolled by the page viewport.
    //
    // Item sizes are not configured. The first pass falls back to the viewport size, and the
    // following passes measure the mounted cells until the row width settles.
    let page = SimScrollElement::new(Size::new(640.0, 480.0)).into_shared();
    let own = SimScrollElement::new(Size::new(640.0, 480.0)).into_shared();
    let page_dyn: SharedElement = page.clone();

    let thumbs: Vec<u32> = (0..50_000).collect();
    let mut c = Controller::new(
        WindowOptions::new(thumbs).with_scroll_container(ScrollContainer::viewport(&page_dyn)),
        own,
        // The grid starts 120px below the top of the page.
        GridSurface::new(Size::new(160.0, 120.0), 640.0).with_offset_in_parent(120.0),
    );
    c.window_mut()
        .on_update(|slice: &[u32]| println!("update: {} cells", slice.len()));
    c.window_mut().on_start(|r| println!("start moved: {}", r.start));
    c.window_mut().on_end(|r| println!("end moved: {}", r.end));

    let frames = c.settle(0, 64);
    println!(
        "settled after {frames} frames: {:?} {:?}",
        c.window().range(),
        c.window().dimensions()
    );

    page.borrow_mut().scroll_to(120.0 + 120.0 * 400.0);
    c.settle(1_000, 64);
    println!("after scroll: {:?}", c.window().range());
}
