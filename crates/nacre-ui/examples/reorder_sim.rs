//! Headless drag-to-reorder simulation.
//!
//! Drives a five-item vertical list through a full gesture without any
//! window or renderer: grab the top item, sweep it down past two
//! siblings, release, and let the transitions settle. Run with
//! `NACRE_LOG=nacre_ui=debug` to watch the container's state changes.

use std::thread;
use std::time::Duration;

use nacre_core::geometry::Size;
use nacre_core::math::Vec2;
use nacre_core::time::FrameClock;
use nacre_ui::{Axis, ChildSpec, ItemId, ReorderConfig, ReorderList, StripAlignment};

const LABELS: [&str; 5] = ["inbox", "starred", "drafts", "archive", "trash"];

fn main() {
    nacre_core::logging::init();

    let mut list = ReorderList::new(
        ReorderConfig::new()
            .axis(Axis::Vertical)
            .alignment(StripAlignment::Leading)
            .spacing(8.0)
            .duration(0.18),
    );
    list.set_viewport(Size::new(320.0, 480.0));
    let children: Vec<ChildSpec> = LABELS
        .iter()
        .map(|label| ChildSpec::new(ItemId::new(label), Size::new(300.0, 64.0)))
        .collect();
    list.refresh(&children);

    let sizes: Vec<f32> = list
        .handles()
        .map(|handle| handle.main_extent(Axis::Vertical))
        .collect();
    let bounds = list.config().layout.content_bounds(&sizes, list.viewport());
    println!("content occupies y in [{:.0}, {:.0}]", bounds.y, bounds.y + bounds.height);

    let dragged = ItemId::new("inbox");
    let grab = list.handle(dragged).expect("tracked").position;
    list.begin_drag(dragged, grab);

    let mut clock = FrameClock::new();
    // Sweep two slots down over ~40 frames, then release.
    for frame in 0..40 {
        thread::sleep(Duration::from_millis(8));
        clock.tick();
        let pointer = grab + Vec2::new(0.0, -(frame as f32) * 4.0);
        list.update_drag(dragged, pointer);
        list.tick(clock.delta_unscaled_seconds());

        let item = list.handle(dragged).expect("tracked");
        assert!(bounds.contains(item.position.x, item.position.y));
    }
    list.end_drag(dragged);

    while list.has_active_transitions() {
        thread::sleep(Duration::from_millis(8));
        clock.tick();
        list.tick(clock.delta_unscaled_seconds());
    }

    for event in list.take_events() {
        println!("{event:?}");
    }
    let order: Vec<String> = list
        .current_order()
        .into_iter()
        .map(|id| {
            LABELS
                .iter()
                .find(|label| ItemId::new(label) == id)
                .map(|label| (*label).to_string())
                .unwrap_or_else(|| id.to_string())
        })
        .collect();
    println!("final order: {order:?}");
}
