//! Nacre UI - drag-to-reorder list engine for retained-mode UIs
//!
//! This crate supplies the interactive pieces of a reorderable list:
//! - A [`ReorderList`] container owning the canonical item order
//! - A direction-aware insertion-index walk for live drop previews
//! - A [`TransitionScheduler`] running one cancellable animation per
//!   (item, property) channel on a cooperative frame tick
//! - A pure [`StripLayout`] geometry provider for slot positions
//!
//! The host runtime keeps ownership of the scene graph, input delivery,
//! and painting; it forwards gestures in, ticks once per frame, and reads
//! item visuals back out.
//!
//! ## Quick start
//!
//! ```
//! use nacre_core::geometry::Size;
//! use nacre_core::math::Vec2;
//! use nacre_ui::{Axis, ChildSpec, ItemId, ReorderConfig, ReorderList};
//!
//! let mut list = ReorderList::new(
//!     ReorderConfig::new().axis(Axis::Horizontal).spacing(10.0),
//! );
//! list.set_viewport(Size::new(600.0, 100.0));
//! list.refresh(&[
//!     ChildSpec::new(ItemId::new("a"), Size::new(100.0, 40.0)),
//!     ChildSpec::new(ItemId::new("b"), Size::new(100.0, 40.0)),
//!     ChildSpec::new(ItemId::new("c"), Size::new(100.0, 40.0)),
//! ]);
//!
//! // Forwarded from the host's pointer events:
//! let grab = list.handle(ItemId::new("a")).unwrap().position;
//! list.begin_drag(ItemId::new("a"), grab);
//! list.update_drag(ItemId::new("a"), grab + Vec2::new(230.0, 0.0));
//! list.end_drag(ItemId::new("a"));
//!
//! // In the frame loop: list.tick(dt); then paint from list.handles().
//! for event in list.take_events() {
//!     println!("{event:?}");
//! }
//! ```

pub mod easing;
pub mod item_id;
pub mod reorder;
pub mod strip;
pub mod transition;

pub use easing::Easing;
pub use item_id::ItemId;
pub use reorder::{
    ChildSpec, DragSession, ItemHandle, ReorderConfig, ReorderEvent, ReorderList, REST_OPACITY,
    REST_SCALE,
};
pub use strip::{Axis, StripAlignment, StripLayout};
pub use transition::{PropertyUpdate, Transition, TransitionProperty, TransitionScheduler};

// Re-export common types from dependencies
pub use nacre_core::geometry::Size;
pub use nacre_core::math::Vec2;
