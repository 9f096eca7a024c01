use std::cell::RefCell;
use std::cell::Cell;
use std::rc::Rc;

use virtual_window::{
    Phase, ScrollContainer, ScrollElement, ScrollEventKind, SharedElement, Size, SourceKind,
    WindowOptions, WindowRange,
};

use crate::{Controller, Easing, GridSurface, IndexAnimation, SimScrollElement};

fn items(n: u32) -> Vec<u32> {
    (0..n).collect()
}

fn range(start: usize, end: usize) -> WindowRange {
    WindowRange { start, end }
}

fn counter() -> (Rc<RefCell<Vec<WindowRange>>>, impl FnMut(WindowRange) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, move |r| sink.borrow_mut().push(r))
}

fn grid() -> (Rc<RefCell<SimScrollElement>>, Controller<u32>) {
    let own = SimScrollElement::new(Size::new(300.0, 200.0)).into_shared();
    let ctrl = Controller::new(
        WindowOptions::new(items(1000)),
        own.clone(),
        GridSurface::new(Size::new(100.0, 50.0), 300.0),
    );
    (own, ctrl)
}

fn list() -> (Rc<RefCell<SimScrollElement>>, Controller<u32>) {
    let own = SimScrollElement::new(Size::new(100.0, 200.0)).into_shared();
    let mut ctrl = Controller::new(
        WindowOptions::new(items(1000)).with_item_size(Some(100.0), Some(20.0)),
        own.clone(),
        GridSurface::new(Size::new(100.0, 20.0), 100.0),
    );
    ctrl.settle(0, 64);
    (own, ctrl)
}

#[test]
fn animation_lands_exactly_on_the_current_target() {
    for easing in [Easing::Linear, Easing::EaseOutQuad, Easing::EaseOutCubic] {
        let a = IndexAnimation::new(7, 100.0, 10, 100, easing);
        assert_eq!(a.offset_at(0, 300.0), 100.0);
        assert_eq!(a.offset_at(10, 300.0), 100.0);
        assert_eq!(a.offset_at(110, 300.0), 300.0);
        assert_eq!(a.offset_at(1000, 450.0), 450.0);
        assert!(!a.is_finished(109));
        assert!(a.is_finished(110));
    }
}

#[test]
fn easing_starts_fast_and_stays_in_range() {
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::EaseOutQuad.apply(0.5), 0.75);
    assert_eq!(Easing::EaseOutCubic.apply(0.5), 0.875);
    for easing in [Easing::Linear, Easing::EaseOutQuad, Easing::EaseOutCubic] {
        assert_eq!(easing.apply(-1.0), 0.0);
        assert_eq!(easing.apply(2.0), 1.0);
    }
}

#[test]
fn element_clamps_offset_and_notifies_on_change_only() {
    let mut el = SimScrollElement::new(Size::new(100.0, 200.0)).with_content_height(1000.0);
    let fired = Rc::new(Cell::new(0));
    let sink = Rc::clone(&fired);
    el.subscribe(
        ScrollEventKind::Scroll,
        Rc::new(move || sink.set(sink.get() + 1)),
    );

    el.scroll_to(5000.0);
    assert_eq!(el.scroll_offset(), 800.0);
    el.scroll_to(800.0);
    el.scroll_to(-10.0);
    assert_eq!(el.scroll_offset(), 0.0);
    assert_eq!(fired.get(), 2);

    el.resize(Size::new(100.0, 200.0));
    assert_eq!(fired.get(), 2);
}

#[test]
fn grid_stabilizes_from_unmeasured_children() {
    let (_own, mut ctrl) = grid();
    let updates = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&updates);
    ctrl.window_mut()
        .on_update(move |slice: &[u32]| sink.borrow_mut().push(slice.len()));
    let (changes, on_change) = counter();
    ctrl.window_mut().on_change(on_change);

    // Viewport fallback, then two children in the first row, then a full row of three.
    let frames = ctrl.settle(0, 64);
    assert_eq!(frames, 6);
    assert_eq!(*updates.borrow(), vec![2, 10, 15]);
    assert!(changes.borrow().is_empty());
    assert_eq!(ctrl.window().range(), range(0, 15));
    assert_eq!(ctrl.mounted(), range(0, 15));
    assert_eq!(ctrl.window().phase(), Phase::Steady);
    let dims = ctrl.window().dimensions().unwrap();
    assert_eq!(dims.items_per_row, 3);
    assert_eq!(dims.items_per_column, 4);
}

#[test]
fn steady_grid_scroll_reports_change() {
    let (own, mut ctrl) = grid();
    ctrl.settle(0, 64);
    let (changes, on_change) = counter();
    ctrl.window_mut().on_change(on_change);

    own.borrow_mut().scroll_to(500.0);
    ctrl.settle(1000, 64);

    let r = ctrl.window().range();
    assert_eq!(r.start % 3, 0);
    assert!(r.contains(30));
    assert_eq!(*changes.borrow(), vec![r]);
    assert_eq!(ctrl.mounted(), r);
}

#[test]
fn late_cell_growth_is_picked_up_on_refresh() {
    let (_own, mut ctrl) = grid();
    ctrl.settle(0, 64);
    let (changes, on_change) = counter();
    ctrl.window_mut().on_change(on_change);

    ctrl.surface_mut().set_cell(Size::new(150.0, 100.0));
    ctrl.window().refresh();
    ctrl.settle(100, 64);

    assert_eq!(ctrl.window().range(), range(0, 6));
    assert_eq!(*changes.borrow(), vec![range(0, 6)]);
}

#[test]
fn animated_scroll_reaches_item() {
    let (_own, mut ctrl) = list();
    assert_eq!(ctrl.window().range(), range(0, 11));

    let target = ctrl.scroll_into_animated(&600, 1000, 200, Easing::EaseOutQuad);
    assert_eq!(target, Some(12000.0));
    assert!(ctrl.is_animating());

    let mut now = 1000;
    let mut last = ctrl.window().scroll_offset();
    while ctrl.is_animating() {
        ctrl.tick(now);
        let offset = ctrl.window().scroll_offset();
        assert!(offset >= last);
        last = offset;
        now += 16;
    }
    ctrl.settle(now, 64);

    assert_eq!(ctrl.window().scroll_offset(), 12000.0);
    assert!(ctrl.window().range().contains(600));
    assert!(ctrl.mounted().contains(600));
}

#[test]
fn animated_scroll_to_missing_item_is_noop() {
    let (_own, mut ctrl) = list();
    assert_eq!(ctrl.scroll_into_animated(&5000, 0, 200, Easing::Linear), None);
    assert_eq!(ctrl.scroll_to_index_animated(1000, 0, 200, Easing::Linear), None);
    assert!(!ctrl.is_animating());
}

#[test]
fn user_scroll_cancels_animation() {
    let (_own, mut ctrl) = list();
    assert_eq!(
        ctrl.scroll_to_index_animated(500, 0, 1000, Easing::Linear),
        Some(10000.0)
    );
    ctrl.tick(100);
    assert_eq!(ctrl.window().scroll_offset(), 1000.0);

    ctrl.on_user_scroll(40.0);
    assert!(!ctrl.is_animating());
    ctrl.settle(116, 64);

    assert_eq!(ctrl.window().scroll_offset(), 40.0);
    assert_eq!(ctrl.window().range(), range(2, 13));
}

#[test]
fn immediate_scroll_to_index() {
    let (own, mut ctrl) = list();
    assert_eq!(ctrl.scroll_to_index(50), Some(1000.0));
    assert_eq!(own.borrow().scroll_offset(), 1000.0);
    ctrl.settle(0, 64);
    assert_eq!(ctrl.window().range(), range(50, 61));
}

#[test]
fn viewport_container_with_offset_in_parent() {
    let page = SimScrollElement::new(Size::new(300.0, 600.0)).into_shared();
    let own = SimScrollElement::new(Size::new(300.0, 600.0)).into_shared();
    let page_dyn: SharedElement = page.clone();
    let mut ctrl = Controller::new(
        WindowOptions::new(items(100))
            .with_item_size(Some(300.0), Some(50.0))
            .with_scroll_container(ScrollContainer::viewport(&page_dyn)),
        own.clone(),
        GridSurface::new(Size::new(300.0, 50.0), 300.0).with_offset_in_parent(1000.0),
    );
    assert_eq!(ctrl.window().source_kind(), Some(SourceKind::Viewport));
    assert_eq!(own.borrow().listener_count(), 0);
    assert_eq!(page.borrow().listener_count(), 2);

    ctrl.settle(0, 64);
    assert_eq!(ctrl.window().range(), range(0, 13));

    page.borrow_mut().scroll_to(1500.0);
    ctrl.settle(100, 64);
    assert_eq!(ctrl.window().range(), range(10, 23));
    assert_eq!(ctrl.window().window().leading_padding, 500.0);

    drop(ctrl);
    assert_eq!(page.borrow().listener_count(), 0);
}

#[test]
fn bounded_content_keeps_user_offset() {
    let own = SimScrollElement::new(Size::new(100.0, 200.0))
        .with_content_height(1_000_000.0)
        .into_shared();
    let mut ctrl = Controller::new(
        WindowOptions::new(items(10)).with_item_size(Some(100.0), Some(20.0)),
        own.clone(),
        GridSurface::new(Size::new(100.0, 20.0), 100.0),
    );
    ctrl.settle(0, 64);
    own.borrow_mut().scroll_to(900.0);
    ctrl.settle(100, 64);

    assert_eq!(own.borrow().scroll_offset(), 900.0);
    assert_eq!(ctrl.window().range(), range(0, 10));
}

#[test]
fn animation_follows_an_item_that_moves_while_settling() {
    let (_own, mut ctrl) = grid();
    ctrl.settle(0, 64);

    // Three 100x50 cells per row: row 100.
    let first = ctrl.scroll_to_index_animated(300, 0, 320, Easing::Linear);
    assert_eq!(first, Some(5000.0));

    let mut now = 0;
    while ctrl.is_animating() {
        if now == 160 {
            // Cells grow to 150x100 mid-flight: two per row, row 150.
            ctrl.surface_mut().set_cell(Size::new(150.0, 100.0));
        }
        ctrl.tick(now);
        now += 16;
    }
    ctrl.settle(now, 64);

    assert_eq!(ctrl.window().scroll_offset(), 15000.0);
    assert!(ctrl.window().range().contains(300));
    assert!(ctrl.mounted().contains(300));
}

#[test]
fn animation_stops_when_its_item_disappears() {
    let (_own, mut ctrl) = list();
    ctrl.scroll_to_index_animated(900, 0, 1000, Easing::Linear);
    ctrl.tick(100);
    ctrl.window_mut().set_items(items(100));
    ctrl.tick(116);
    assert!(!ctrl.is_animating());
}
