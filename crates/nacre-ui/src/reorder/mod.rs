//! Drag-to-reorder list engine.
//!
//! [`ReorderList`] owns the ordered sequence of items and turns raw drag
//! gestures into a live preview layout and, on release, a committed
//! reorder. Displaced siblings glide to their new slots through the
//! [`TransitionScheduler`](crate::transition::TransitionScheduler); the
//! dragged item itself follows the pointer directly.

mod container;
mod item;
mod session;

pub use container::{ChildSpec, ReorderList};
pub use item::{ItemHandle, REST_OPACITY, REST_SCALE};
pub use session::DragSession;

use crate::easing::Easing;
use crate::item_id::ItemId;
use crate::strip::{Axis, StripAlignment, StripLayout};

/// Notifications drained by the host once per frame via
/// [`ReorderList::take_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderEvent {
    /// Fired exactly once per successful reorder, never for a cancelled or
    /// in-place drag.
    OrderChanged {
        item: ItemId,
        from: usize,
        to: usize,
    },
}

/// Configuration for a [`ReorderList`].
///
/// Built with consuming setters:
///
/// ```
/// use nacre_ui::{Axis, Easing, ReorderConfig};
///
/// let config = ReorderConfig::new()
///     .axis(Axis::Horizontal)
///     .spacing(10.0)
///     .duration(0.2)
///     .easing(Easing::CubicOut);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderConfig {
    /// Strip geometry: axis, alignments, spacing, padding.
    pub layout: StripLayout,
    /// Duration of slot and visual transitions, in seconds.
    pub duration: f32,
    /// Easing applied to those transitions.
    pub easing: Easing,
    /// When set, every layout pass applies synchronously and in-flight
    /// transitions for affected items are cancelled.
    pub instant: bool,
    /// Uniform scale applied to the dragged item for the gesture.
    pub drag_scale: f32,
    /// Opacity applied to the dragged item for the gesture.
    pub drag_opacity: f32,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            layout: StripLayout::default(),
            duration: 0.15,
            easing: Easing::CubicOut,
            instant: false,
            drag_scale: 1.05,
            drag_opacity: 0.85,
        }
    }
}

impl ReorderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.layout.axis = axis;
        self
    }

    pub fn alignment(mut self, alignment: StripAlignment) -> Self {
        self.layout.alignment = alignment;
        self
    }

    pub fn cross_alignment(mut self, alignment: StripAlignment) -> Self {
        self.layout.cross_alignment = alignment;
        self
    }

    /// Gap between adjacent slots. Only consulted when the host supplies
    /// no spacing of its own through the strip geometry.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.layout.spacing = spacing;
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.layout.padding = padding;
        self
    }

    pub fn duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Disable animation entirely; positions apply synchronously.
    pub fn instant(mut self, instant: bool) -> Self {
        self.instant = instant;
        self
    }

    pub fn drag_scale(mut self, scale: f32) -> Self {
        self.drag_scale = scale;
        self
    }

    pub fn drag_opacity(mut self, opacity: f32) -> Self {
        self.drag_opacity = opacity;
        self
    }
}
