//! The ephemeral state of one drag gesture.

use nacre_core::math::Vec2;

use crate::item_id::ItemId;

/// Exists only between drag-begin and drag-end/cancel. Owned and mutated
/// exclusively by the container; exposed read-only so UI affordances can
/// show which slot the dragged item would land in.
#[derive(Debug, Clone)]
pub struct DragSession {
    item: ItemId,
    origin_index: usize,
    preview_index: usize,
    /// Vector from the pointer to the item's center at grab time, held
    /// constant for the whole gesture.
    pointer_offset: Vec2,
    last_pointer: Vec2,
}

impl DragSession {
    pub(crate) fn new(item: ItemId, origin_index: usize, pointer_offset: Vec2, pointer: Vec2) -> Self {
        Self {
            item,
            origin_index,
            preview_index: origin_index,
            pointer_offset,
            last_pointer: pointer,
        }
    }

    /// The item being moved.
    #[inline]
    pub fn item(&self) -> ItemId {
        self.item
    }

    /// The item's index in the sequence when the drag began.
    #[inline]
    pub fn origin_index(&self) -> usize {
        self.origin_index
    }

    /// The candidate insertion index under the current pointer position.
    #[inline]
    pub fn preview_index(&self) -> usize {
        self.preview_index
    }

    #[inline]
    pub fn pointer_offset(&self) -> Vec2 {
        self.pointer_offset
    }

    /// The most recent pointer position seen by the gesture.
    #[inline]
    pub fn last_pointer(&self) -> Vec2 {
        self.last_pointer
    }

    pub(crate) fn set_preview_index(&mut self, index: usize) {
        self.preview_index = index;
    }

    pub(crate) fn set_last_pointer(&mut self, pointer: Vec2) {
        self.last_pointer = pointer;
    }

    /// Re-anchor after the sequence was rebuilt underneath the gesture.
    pub(crate) fn rebase(&mut self, origin_index: usize, max_index: usize) {
        self.origin_index = origin_index.min(max_index);
        self.preview_index = self.preview_index.min(max_index);
    }
}
