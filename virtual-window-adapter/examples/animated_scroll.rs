use virtual_window::{Size, WindowOptions};
use virtual_window_adapter::{Controller, Easing, GridSurface, SimScrollElement};

fn main() {
    // Example: "jump to item" with an eased scroll.
    //
    // An adapter would:
    // - start an animation in response to a navigation command
    // - call tick(now_ms) from its frame loop
    // - render the mounted range after each tick
    let own = SimScrollElement::new(Size::new(400.0, 300.0)).into_shared();
    let names: Vec<String> = (0..5_000).map(|i| format!("contact {i:04}")).collect();
    let mut c = Controller::new(
        WindowOptions::new(names).with_item_size(Some(400.0), Some(30.0)),
        own,
        GridSurface::new(Size::new(400.0, 30.0), 400.0),
    );
    c.settle(0, 64);

    let wanted = "contact 3210".to_string();
    let target = c.scroll_into_animated(&wanted, 0, 240, Easing::EaseOutCubic);
    println!("animating towards: {target:?}");

    let mut now = 0;
    while c.is_animating() {
        c.tick(now);
        println!(
            "t={now:>3}ms off={:>8.1} mounted={:?}",
            c.window().scroll_offset(),
            c.mounted()
        );
        now += 16;
    }
    c.settle(now, 64);
    println!("first mounted: {:?}", c.window().viewport_items().first());
}
