//! Per-item visual state tracked by the container.

use nacre_core::{geometry::Size, math::Vec2};

use crate::item_id::ItemId;
use crate::strip::Axis;

/// Resting uniform scale of an undragged item.
pub const REST_SCALE: f32 = 1.0;
/// Resting opacity of an undragged item.
pub const REST_OPACITY: f32 = 1.0;

/// One reorderable item as the container sees it: identity, its size as
/// last reported by the host, and the visual transform the host's painter
/// reads back each frame.
///
/// The container owns these; hosts get shared references through
/// [`ReorderList::handle`](crate::reorder::ReorderList::handle) and mirror
/// `position`/`scale`/`opacity`/`lifted` onto their scene nodes.
#[derive(Debug, Clone)]
pub struct ItemHandle {
    pub id: ItemId,
    /// Size reported by the host at the last refresh.
    pub size: Size<f32>,
    /// Center of the item in container coordinates.
    pub position: Vec2,
    /// Uniform scale around the item's center.
    pub scale: f32,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Whether the item should paint above its siblings (true while it is
    /// the dragged item).
    pub lifted: bool,
    /// False until the item has been given a first layout position; the
    /// first pass snaps instead of animating from nowhere.
    pub(crate) placed: bool,
}

impl ItemHandle {
    pub fn new(id: ItemId, size: Size<f32>) -> Self {
        Self {
            id,
            size,
            position: Vec2::ZERO,
            scale: REST_SCALE,
            opacity: REST_OPACITY,
            lifted: false,
            placed: false,
        }
    }

    /// The item's extent along the strip's primary axis.
    #[inline]
    pub fn main_extent(&self, axis: Axis) -> f32 {
        axis.main_extent(self.size)
    }

    /// The item's extent across the strip's primary axis.
    #[inline]
    pub fn cross_extent(&self, axis: Axis) -> f32 {
        axis.cross().main_extent(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extents_follow_the_axis() {
        let item = ItemHandle::new(ItemId::from_raw(1), Size::new(100.0, 40.0));
        assert_eq!(item.main_extent(Axis::Horizontal), 100.0);
        assert_eq!(item.cross_extent(Axis::Horizontal), 40.0);
        assert_eq!(item.main_extent(Axis::Vertical), 40.0);
        assert_eq!(item.cross_extent(Axis::Vertical), 100.0);
    }
}
