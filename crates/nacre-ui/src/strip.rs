//! Strip-layout geometry: where each slot of an ordered run of items sits.
//!
//! All positions are container-local with the origin at the container's
//! center and y growing upward. The primary axis therefore runs
//! sign-positive for horizontal strips and sign-negative for vertical ones
//! (a vertical list grows downward, toward smaller y). Internally the math
//! works in *forward* space, where "later in the sequence" is always the
//! positive direction, and multiplies by the axis sign at the boundary.
//!
//! Every function here is pure; the container decides when to call them
//! and what to do with the results.

use nacre_core::{geometry::Rect, geometry::Size, math::Vec2};

/// The layout direction along which items are ordered and spaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

impl Axis {
    /// Sign of the forward direction in container coordinates.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Axis::Horizontal => 1.0,
            Axis::Vertical => -1.0,
        }
    }

    /// The perpendicular axis.
    #[inline]
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// This axis' component of a vector.
    #[inline]
    pub fn main_of(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    /// This axis' component of a size.
    #[inline]
    pub fn main_extent(self, size: Size<f32>) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Build a vector from main- and cross-axis components.
    #[inline]
    pub fn compose(self, main: f32, cross: f32) -> Vec2 {
        match self {
            Axis::Horizontal => Vec2::new(main, cross),
            Axis::Vertical => Vec2::new(cross, main),
        }
    }
}

/// How the strip (or an item on the cross axis) is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StripAlignment {
    /// Packed toward the axis' start edge (left, or top).
    Leading,
    #[default]
    Center,
    /// Packed toward the axis' end edge (right, or bottom).
    Trailing,
}

/// Geometry parameters for a strip of items.
///
/// `spacing` is the gap between adjacent slots; `padding` insets the
/// leading/trailing edges used by the non-centered alignments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripLayout {
    pub axis: Axis,
    pub alignment: StripAlignment,
    pub cross_alignment: StripAlignment,
    pub spacing: f32,
    pub padding: f32,
}

impl Default for StripLayout {
    fn default() -> Self {
        Self {
            axis: Axis::default(),
            alignment: StripAlignment::default(),
            cross_alignment: StripAlignment::Center,
            spacing: 0.0,
            padding: 0.0,
        }
    }
}

impl StripLayout {
    /// Total main-axis extent of the content: item sizes plus the gaps
    /// between them. Padding is an edge inset, not content.
    pub fn content_extent(&self, sizes: &[f32]) -> f32 {
        if sizes.is_empty() {
            return 0.0;
        }
        let gaps = self.spacing * (sizes.len() - 1) as f32;
        sizes.iter().sum::<f32>() + gaps
    }

    /// Forward-space coordinate where the first slot begins.
    pub fn start_offset(&self, total: f32, viewport_main: f32) -> f32 {
        match self.alignment {
            StripAlignment::Leading => self.padding - viewport_main * 0.5,
            StripAlignment::Center => -total * 0.5,
            StripAlignment::Trailing => viewport_main * 0.5 - self.padding - total,
        }
    }

    /// Signed main-axis center of the slot at `index`.
    ///
    /// Indices past the end are treated as the last slot; an empty strip
    /// reports the start offset itself.
    pub fn slot_center(&self, index: usize, sizes: &[f32], viewport: Size<f32>) -> f32 {
        let total = self.content_extent(sizes);
        let mut cursor = self.start_offset(total, self.axis.main_extent(viewport));
        if sizes.is_empty() {
            return self.axis.sign() * cursor;
        }
        let index = index.min(sizes.len() - 1);
        for &size in &sizes[..index] {
            cursor += size + self.spacing;
        }
        self.axis.sign() * (cursor + sizes[index] * 0.5)
    }

    /// Signed main-axis centers for every slot.
    pub fn slot_positions(&self, sizes: &[f32], viewport: Size<f32>) -> Vec<f32> {
        let total = self.content_extent(sizes);
        let mut cursor = self.start_offset(total, self.axis.main_extent(viewport));
        let mut centers = Vec::with_capacity(sizes.len());
        for &size in sizes {
            centers.push(self.axis.sign() * (cursor + size * 0.5));
            cursor += size + self.spacing;
        }
        centers
    }

    /// Signed cross-axis center for an item of the given cross extent.
    pub fn cross_position(&self, item_cross: f32, viewport: Size<f32>) -> f32 {
        let cross_axis = self.axis.cross();
        let avail = cross_axis.main_extent(viewport);
        let forward = match self.cross_alignment {
            StripAlignment::Leading => self.padding - avail * 0.5 + item_cross * 0.5,
            StripAlignment::Center => 0.0,
            StripAlignment::Trailing => avail * 0.5 - self.padding - item_cross * 0.5,
        };
        cross_axis.sign() * forward
    }

    /// Full position of the slot at `index` for an item of the given
    /// cross extent.
    pub fn position_of(
        &self,
        index: usize,
        sizes: &[f32],
        viewport: Size<f32>,
        item_cross: f32,
    ) -> Vec2 {
        let main = self.slot_center(index, sizes, viewport);
        let cross = self.cross_position(item_cross, viewport);
        self.axis.compose(main, cross)
    }

    /// Clamp a main-axis center so an item of `item_main` extent stays
    /// inside the viewport. A viewport too small to hold the item pins it
    /// to the center rather than producing an inverted range.
    pub fn clamp_main(&self, value: f32, item_main: f32, viewport: Size<f32>) -> f32 {
        let half = self.axis.main_extent(viewport) * 0.5;
        let lo = -half + item_main * 0.5;
        let hi = half - item_main * 0.5;
        if lo > hi {
            return 0.0;
        }
        value.clamp(lo, hi)
    }

    /// Bounding rectangle of the strip's content in container coordinates.
    pub fn content_bounds(&self, sizes: &[f32], viewport: Size<f32>) -> Rect<f32> {
        let total = self.content_extent(sizes);
        let start = self.start_offset(total, self.axis.main_extent(viewport));
        let a = self.axis.sign() * start;
        let b = self.axis.sign() * (start + total);
        let main_min = a.min(b);
        let cross_extent = self.axis.cross().main_extent(viewport);
        match self.axis {
            Axis::Horizontal => Rect::new(main_min, -cross_extent * 0.5, total, cross_extent),
            Axis::Vertical => Rect::new(-cross_extent * 0.5, main_min, cross_extent, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: [f32; 4] = [100.0, 100.0, 100.0, 100.0];

    fn layout(axis: Axis, alignment: StripAlignment) -> StripLayout {
        StripLayout {
            axis,
            alignment,
            spacing: 10.0,
            ..StripLayout::default()
        }
    }

    fn viewport() -> Size<f32> {
        Size::new(600.0, 100.0)
    }

    #[test]
    fn content_extent_counts_gaps_between_items_only() {
        let strip = layout(Axis::Horizontal, StripAlignment::Leading);
        assert_eq!(strip.content_extent(&SIZES), 430.0);
        assert_eq!(strip.content_extent(&[50.0]), 50.0);
        assert_eq!(strip.content_extent(&[]), 0.0);
    }

    #[test]
    fn horizontal_leading_slots_run_left_to_right() {
        let strip = layout(Axis::Horizontal, StripAlignment::Leading);
        let centers = strip.slot_positions(&SIZES, viewport());
        assert_eq!(centers, vec![-250.0, -140.0, -30.0, 80.0]);
    }

    #[test]
    fn vertical_leading_slots_run_top_to_bottom() {
        let strip = layout(Axis::Vertical, StripAlignment::Leading);
        let centers = strip.slot_positions(&SIZES, Size::new(100.0, 600.0));
        assert_eq!(centers, vec![250.0, 140.0, 30.0, -80.0]);
    }

    #[test]
    fn centered_strip_straddles_the_origin() {
        let strip = layout(Axis::Horizontal, StripAlignment::Center);
        let centers = strip.slot_positions(&SIZES, viewport());
        assert_eq!(centers, vec![-165.0, -55.0, 55.0, 165.0]);
    }

    #[test]
    fn trailing_strip_ends_at_the_far_edge() {
        let strip = layout(Axis::Horizontal, StripAlignment::Trailing);
        let centers = strip.slot_positions(&SIZES, viewport());
        assert_eq!(centers, vec![-80.0, 30.0, 140.0, 250.0]);
    }

    #[test]
    fn padding_insets_the_leading_edge() {
        let mut strip = layout(Axis::Horizontal, StripAlignment::Leading);
        strip.padding = 20.0;
        assert_eq!(strip.slot_center(0, &SIZES, viewport()), -230.0);
    }

    #[test]
    fn slot_center_clamps_out_of_range_indices() {
        let strip = layout(Axis::Horizontal, StripAlignment::Leading);
        assert_eq!(
            strip.slot_center(99, &SIZES, viewport()),
            strip.slot_center(3, &SIZES, viewport()),
        );
    }

    #[test]
    fn cross_alignment_places_items_within_the_viewport() {
        let mut strip = layout(Axis::Horizontal, StripAlignment::Leading);
        let vp = Size::new(600.0, 100.0);

        assert_eq!(strip.cross_position(40.0, vp), 0.0);

        strip.cross_alignment = StripAlignment::Leading;
        // Leading on the cross axis of a horizontal strip is the top edge.
        assert_eq!(strip.cross_position(40.0, vp), 30.0);

        strip.cross_alignment = StripAlignment::Trailing;
        assert_eq!(strip.cross_position(40.0, vp), -30.0);
    }

    #[test]
    fn clamp_keeps_items_inside_and_survives_degenerate_viewports() {
        let strip = layout(Axis::Horizontal, StripAlignment::Leading);
        assert_eq!(strip.clamp_main(1000.0, 100.0, viewport()), 250.0);
        assert_eq!(strip.clamp_main(-1000.0, 100.0, viewport()), -250.0);
        assert_eq!(strip.clamp_main(40.0, 100.0, viewport()), 40.0);
        // Item wider than the viewport pins to center instead of inverting.
        assert_eq!(strip.clamp_main(40.0, 100.0, Size::new(50.0, 50.0)), 0.0);
    }

    #[test]
    fn content_bounds_covers_every_slot() {
        let strip = layout(Axis::Horizontal, StripAlignment::Leading);
        let bounds = strip.content_bounds(&SIZES, viewport());
        for center in strip.slot_positions(&SIZES, viewport()) {
            assert!(bounds.contains(center, 0.0));
        }
        assert_eq!(bounds.width, 430.0);
    }
}
