//! The reorder container: ordered sequence, gesture handling, layout
//! passes.

use ahash::HashMap;
use indexmap::IndexMap;
use nacre_core::{geometry::Size, math::Vec2};
use tracing::{debug, trace};

use crate::item_id::ItemId;
use crate::strip::StripLayout;
use crate::transition::{TransitionProperty, TransitionScheduler};

use super::item::{ItemHandle, REST_OPACITY, REST_SCALE};
use super::session::DragSession;
use super::{ReorderConfig, ReorderEvent};

/// Positions closer than this to their target are left alone rather than
/// re-animated.
const POSITION_EPSILON: f32 = 1e-3;

/// One active child as reported by the host during a rescan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildSpec {
    pub id: ItemId,
    pub size: Size<f32>,
}

impl ChildSpec {
    pub fn new(id: impl Into<ItemId>, size: Size<f32>) -> Self {
        Self {
            id: id.into(),
            size,
        }
    }
}

/// Find the sequence index the dragged item would occupy, given the
/// committed slot walk and the item's tentative main-axis center.
///
/// Walks the static items in sequence order through forward space,
/// skipping the slot reserved for the dragged item. The comparison edge is
/// the dragged item's trailing edge for items past its origin and its
/// leading edge for items before it, which keeps the index stable when the
/// dragged extent differs from the slot it left. The walk stops at the
/// first static item whose center the edge has not strictly passed; an
/// exact tie stops the walk too, so zero net movement keeps the original
/// index.
fn insertion_index(
    layout: &StripLayout,
    sizes: &[f32],
    origin: usize,
    dragged_center: f32,
    viewport: Size<f32>,
) -> usize {
    let n = sizes.len();
    if n <= 1 || origin >= n {
        return 0;
    }
    let center = layout.axis.sign() * dragged_center;
    let half_dragged = sizes[origin] * 0.5;
    let total = layout.content_extent(sizes);
    let mut cursor = layout.start_offset(total, layout.axis.main_extent(viewport));

    for (i, &size) in sizes.iter().enumerate() {
        if i == origin {
            cursor += size + layout.spacing;
            continue;
        }
        let slot_center = cursor + size * 0.5;
        let edge = if origin < i {
            center + half_dragged
        } else {
            center - half_dragged
        };
        if slot_center >= edge {
            // The dragged item belongs before this one. Removing it from
            // its origin shifts later indices down by one.
            return if origin < i { i - 1 } else { i };
        }
        cursor += size + layout.spacing;
    }
    n - 1
}

/// A drag-to-reorder strip of items.
///
/// The container owns the canonical order, runs the insertion-index walk
/// while a drag is active, and drives every displaced sibling through the
/// transition scheduler. The host forwards pointer gestures, calls
/// [`tick`](Self::tick) once per frame with unscaled delta time, and
/// mirrors the resulting [`ItemHandle`] visuals onto its scene.
#[derive(Debug)]
pub struct ReorderList {
    config: ReorderConfig,
    items: IndexMap<ItemId, ItemHandle>,
    drag: Option<DragSession>,
    scheduler: TransitionScheduler,
    viewport: Size<f32>,
    events: Vec<ReorderEvent>,
}

impl ReorderList {
    pub fn new(config: ReorderConfig) -> Self {
        Self {
            config,
            items: IndexMap::new(),
            drag: None,
            scheduler: TransitionScheduler::new(),
            viewport: Size::new(800.0, 600.0),
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    pub fn viewport(&self) -> Size<f32> {
        self.viewport
    }

    /// Set the container's size in its own coordinate space.
    pub fn set_viewport(&mut self, viewport: Size<f32>) {
        self.viewport = viewport;
        self.request_layout();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The committed order of item identities.
    pub fn current_order(&self) -> Vec<ItemId> {
        self.items.keys().copied().collect()
    }

    pub fn handle(&self, id: ItemId) -> Option<&ItemHandle> {
        self.items.get(&id)
    }

    /// All tracked items in committed order, for painting.
    pub fn handles(&self) -> impl Iterator<Item = &ItemHandle> {
        self.items.values()
    }

    pub fn is_dragging(&self, id: ItemId) -> bool {
        self.drag.as_ref().is_some_and(|s| s.item() == id)
    }

    /// Read-only view of the active gesture, if any.
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// While a drag is active the host should pause any auto-layout of its
    /// own that would fight the manual positioning.
    pub fn layout_suspended(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether any transition is still in flight (the host should keep
    /// ticking and repainting while this holds).
    pub fn has_active_transitions(&self) -> bool {
        self.scheduler.active_count() > 0
    }

    /// Drain the events produced since the last call.
    pub fn take_events(&mut self) -> Vec<ReorderEvent> {
        std::mem::take(&mut self.events)
    }

    /// Rescan the host's active children and rebuild the sequence:
    /// survivors keep their relative order with sizes re-read, newcomers
    /// enter at their host-order position, departed items are dropped and
    /// their transitions cancelled.
    ///
    /// Safe to call mid-drag: the gesture is re-anchored to the rebuilt
    /// sequence, or cancelled outright if the dragged child went away.
    pub fn refresh(&mut self, children: &[ChildSpec]) {
        let mut fresh: HashMap<ItemId, Size<f32>> = HashMap::default();
        for child in children {
            fresh.entry(child.id).or_insert(child.size);
        }

        let mut next = IndexMap::with_capacity(fresh.len());
        for (id, mut item) in std::mem::take(&mut self.items) {
            match fresh.get(&id) {
                Some(&size) => {
                    item.size = size;
                    next.insert(id, item);
                }
                None => {
                    self.scheduler.cancel_all(id);
                    trace!(item = %id, "child no longer active");
                }
            }
        }
        for (host_index, child) in children.iter().enumerate() {
            if next.contains_key(&child.id) {
                continue;
            }
            let at = host_index.min(next.len());
            next.shift_insert(at, child.id, ItemHandle::new(child.id, child.size));
        }
        self.items = next;
        trace!(len = self.items.len(), "sequence rebuilt");

        if let Some(dragged) = self.drag.as_ref().map(DragSession::item) {
            match self.items.get_index_of(&dragged) {
                Some(index) => {
                    let max_index = self.items.len() - 1;
                    if let Some(session) = self.drag.as_mut() {
                        session.rebase(index, max_index);
                    }
                }
                None => {
                    // The dragged child was deactivated externally
                    // mid-gesture.
                    self.cancel_drag();
                    return;
                }
            }
        }
        self.request_layout();
    }

    /// Open a drag session for `id`.
    ///
    /// Ignored when the item is untracked or another drag is active.
    pub fn begin_drag(&mut self, id: ItemId, pointer: Vec2) {
        if self.drag.is_some() {
            trace!(item = %id, "begin ignored, another drag is active");
            return;
        }
        let Some(index) = self.items.get_index_of(&id) else {
            trace!(item = %id, "begin ignored, item not tracked");
            return;
        };

        // The pointer owns the item now; stop any in-flight slot motion.
        self.scheduler.cancel(id, TransitionProperty::PositionX);
        self.scheduler.cancel(id, TransitionProperty::PositionY);

        let offset = match self.items.get_index_mut(index) {
            Some((_, item)) => {
                item.lifted = true;
                item.position - pointer
            }
            None => return,
        };
        self.set_visuals(id, self.config.drag_scale, self.config.drag_opacity);
        self.drag = Some(DragSession::new(id, index, offset, pointer));
        debug!(item = %id, origin = index, "drag began");
        self.preview_layout();
    }

    /// Follow the pointer with the dragged item and recompute its preview
    /// slot. Ignored unless `id` is the item being dragged.
    pub fn update_drag(&mut self, id: ItemId, pointer: Vec2) {
        let Some(session) = self.drag.as_ref() else {
            return;
        };
        if session.item() != id {
            return;
        }
        let origin = session.origin_index();
        let previous = session.preview_index();
        let offset = session.pointer_offset();

        let layout = self.config.layout;
        let axis = layout.axis;
        let Some(item) = self.items.get(&id) else {
            self.cancel_drag();
            return;
        };
        let tentative = pointer + offset;
        let main = layout.clamp_main(axis.main_of(tentative), item.main_extent(axis), self.viewport);
        let cross = layout.cross_position(item.cross_extent(axis), self.viewport);
        let position = axis.compose(main, cross);

        let sizes: Vec<f32> = self.items.values().map(|i| i.main_extent(axis)).collect();
        if let Some(item) = self.items.get_mut(&id) {
            // 1:1 pointer follow; this never routes through the scheduler.
            item.position = position;
        }
        let next = insertion_index(&layout, &sizes, origin, main, self.viewport);

        if let Some(session) = self.drag.as_mut() {
            session.set_last_pointer(pointer);
            session.set_preview_index(next);
        }
        if next != previous {
            debug!(item = %id, from = previous, to = next, "preview index moved");
            self.preview_layout();
        }
    }

    /// Commit the drag: reinsert the item at its preview slot, emit
    /// [`ReorderEvent::OrderChanged`] when the order actually changed, and
    /// restore rest visuals. Ignored unless `id` is the dragged item.
    pub fn end_drag(&mut self, id: ItemId) {
        let Some(session) = self.drag.take_if(|s| s.item() == id) else {
            return;
        };
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        let from = session.origin_index().min(last);
        let to = session.preview_index().min(last);
        if from != to {
            self.items.move_index(from, to);
            self.events.push(ReorderEvent::OrderChanged { item: id, from, to });
            debug!(item = %id, from, to, "order committed");
        } else {
            debug!(item = %id, index = from, "drag ended in place");
        }
        if let Some(item) = self.items.get_mut(&id) {
            item.lifted = false;
        }
        self.set_visuals(id, REST_SCALE, REST_OPACITY);
        self.committed_layout();
    }

    /// Abort the active drag without reordering. No event is emitted; rest
    /// visuals are restored and the committed layout re-applied.
    pub fn cancel_drag(&mut self) {
        let Some(session) = self.drag.take() else {
            return;
        };
        let id = session.item();
        debug!(item = %id, "drag cancelled");
        match self.items.get_mut(&id) {
            Some(item) => item.lifted = false,
            None => self.scheduler.cancel_all(id),
        }
        if self.items.contains_key(&id) {
            self.set_visuals(id, REST_SCALE, REST_OPACITY);
        }
        self.committed_layout();
    }

    /// Advance all in-flight transitions by `dt` seconds of *unscaled*
    /// time and write the results onto item visuals. Call once per frame,
    /// before the host's paint reads positions.
    pub fn tick(&mut self, dt: f32) {
        for update in self.scheduler.advance(dt) {
            let Some(item) = self.items.get_mut(&update.item) else {
                continue;
            };
            match update.property {
                TransitionProperty::PositionX => item.position.x = update.value,
                TransitionProperty::PositionY => item.position.y = update.value,
                TransitionProperty::Scale => item.scale = update.value,
                TransitionProperty::Opacity => item.opacity = update.value,
            }
        }
    }

    fn request_layout(&mut self) {
        if self.drag.is_some() {
            self.preview_layout();
        } else {
            self.committed_layout();
        }
    }

    /// Position every item at its committed slot.
    fn committed_layout(&mut self) {
        let order: Vec<ItemId> = self.items.keys().copied().collect();
        self.apply_layout(&order, None);
    }

    /// Position every static item as if the dragged item had already moved
    /// to its preview slot. The dragged item stays under pointer control.
    fn preview_layout(&mut self) {
        let Some(session) = self.drag.as_ref() else {
            return;
        };
        let dragged = session.item();
        let origin = session.origin_index();
        let preview = session.preview_index();

        let mut order: Vec<ItemId> = self.items.keys().copied().collect();
        if origin < order.len() {
            let id = order.remove(origin);
            order.insert(preview.min(order.len()), id);
        }
        self.apply_layout(&order, Some(dragged));
    }

    fn apply_layout(&mut self, order: &[ItemId], skip: Option<ItemId>) {
        let layout = self.config.layout;
        let sizes: Vec<f32> = order
            .iter()
            .filter_map(|id| self.items.get(id))
            .map(|item| item.main_extent(layout.axis))
            .collect();
        for (slot, &id) in order.iter().enumerate() {
            if skip == Some(id) {
                continue;
            }
            let Some(item) = self.items.get(&id) else {
                continue;
            };
            let cross = item.cross_extent(layout.axis);
            let target = layout.position_of(slot, &sizes, self.viewport, cross);
            self.move_item_to(id, target);
        }
    }

    fn move_item_to(&mut self, id: ItemId, target: Vec2) {
        if self.config.instant {
            self.scheduler.cancel(id, TransitionProperty::PositionX);
            self.scheduler.cancel(id, TransitionProperty::PositionY);
            if let Some(item) = self.items.get_mut(&id) {
                item.position = target;
                item.placed = true;
            }
            return;
        }
        let Some(item) = self.items.get_mut(&id) else {
            return;
        };
        if !item.placed {
            // First layout for this item: appear in place, don't fly in.
            item.position = target;
            item.placed = true;
            return;
        }
        let current = item.position;
        let channels = [
            (TransitionProperty::PositionX, current.x, target.x),
            (TransitionProperty::PositionY, current.y, target.y),
        ];
        for (property, current, target) in channels {
            match self.scheduler.target_of(id, property) {
                Some(in_flight) if (in_flight - target).abs() <= POSITION_EPSILON => {}
                None if (current - target).abs() <= POSITION_EPSILON => {}
                _ => self.scheduler.animate(
                    id,
                    property,
                    current,
                    target,
                    self.config.duration,
                    self.config.easing,
                ),
            }
        }
    }

    fn set_visuals(&mut self, id: ItemId, scale: f32, opacity: f32) {
        if self.config.instant {
            self.scheduler.cancel(id, TransitionProperty::Scale);
            self.scheduler.cancel(id, TransitionProperty::Opacity);
            if let Some(item) = self.items.get_mut(&id) {
                item.scale = scale;
                item.opacity = opacity;
            }
            return;
        }
        let Some(item) = self.items.get(&id) else {
            return;
        };
        let channels = [
            (TransitionProperty::Scale, item.scale, scale),
            (TransitionProperty::Opacity, item.opacity, opacity),
        ];
        for (property, current, target) in channels {
            self.scheduler
                .animate(id, property, current, target, self.config.duration, self.config.easing);
        }
    }
}

impl Default for ReorderList {
    fn default() -> Self {
        Self::new(ReorderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strip::{Axis, StripAlignment};

    fn strip() -> StripLayout {
        StripLayout {
            axis: Axis::Horizontal,
            alignment: StripAlignment::Leading,
            spacing: 10.0,
            ..StripLayout::default()
        }
    }

    fn vp() -> Size<f32> {
        Size::new(600.0, 100.0)
    }

    // Committed slot centers for four 100-wide items in `vp()`:
    // -250, -140, -30, 80.
    const FOUR: [f32; 4] = [100.0, 100.0, 100.0, 100.0];

    #[test]
    fn forward_drag_lands_after_passed_items() {
        assert_eq!(insertion_index(&strip(), &FOUR, 0, -30.0, vp()), 2);
    }

    #[test]
    fn backward_drag_lands_before_passed_items() {
        assert_eq!(insertion_index(&strip(), &FOUR, 2, -250.0, vp()), 0);
    }

    #[test]
    fn zero_movement_keeps_the_origin_for_every_slot() {
        let layout = strip();
        let centers = layout.slot_positions(&FOUR, vp());
        for (origin, &center) in centers.iter().enumerate() {
            assert_eq!(
                insertion_index(&layout, &FOUR, origin, center, vp()),
                origin,
                "origin {origin}"
            );
        }
    }

    #[test]
    fn exact_tie_favors_the_lower_index() {
        // With the trailing edge exactly on the next item's center the
        // item is not considered passed.
        assert_eq!(insertion_index(&strip(), &FOUR, 0, -190.0, vp()), 0);
        assert_eq!(insertion_index(&strip(), &FOUR, 0, -189.9, vp()), 1);
    }

    #[test]
    fn monotonic_sweep_never_oscillates() {
        let layout = strip();
        let sizes = [100.0; 5];
        let mut previous = 0;
        let mut seen = Vec::new();
        for step in 0..520 {
            let center = -260.0 + step as f32;
            let index = insertion_index(&layout, &sizes, 2, center, vp());
            assert!(index >= previous, "index flickered back at center {center}");
            if seen.last() != Some(&index) {
                seen.push(index);
            }
            previous = index;
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn unequal_sizes_stay_monotonic() {
        let layout = strip();
        let sizes = [60.0, 140.0, 80.0, 200.0, 100.0];
        let mut previous = 0;
        for step in 0..700 {
            let center = -350.0 + step as f32;
            let index = insertion_index(&layout, &sizes, 1, center, vp());
            assert!(index >= previous, "index flickered back at center {center}");
            previous = index;
        }
    }

    #[test]
    fn vertical_axis_mirrors_horizontal() {
        let layout = StripLayout {
            axis: Axis::Vertical,
            alignment: StripAlignment::Leading,
            spacing: 10.0,
            ..StripLayout::default()
        };
        let viewport = Size::new(100.0, 600.0);
        // Slot centers top-down: 250, 140, 30, -80.
        assert_eq!(insertion_index(&layout, &FOUR, 0, 30.0, viewport), 2);
        assert_eq!(insertion_index(&layout, &FOUR, 3, 250.0, viewport), 0);
    }

    #[test]
    fn single_item_maps_to_itself() {
        assert_eq!(insertion_index(&strip(), &[100.0], 0, 9999.0, vp()), 0);
    }
}
