//! Property transitions advanced on a cooperative frame tick.
//!
//! Each [`Transition`] interpolates one scalar channel of one item. The
//! [`TransitionScheduler`] owns at most one transition per
//! `(item, property)` pair: scheduling a channel that is already in flight
//! replaces it, and the replacement begins from the in-flight interpolated
//! value so the visual never jumps.

use ahash::HashMap;

use crate::easing::Easing;
use crate::item_id::ItemId;

/// The scalar channels a transition can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionProperty {
    /// Horizontal component of the item's position.
    PositionX,
    /// Vertical component of the item's position.
    PositionY,
    /// Uniform scale applied around the item's center.
    Scale,
    /// Opacity in `[0, 1]`.
    Opacity,
}

/// A time-bounded interpolation of one scalar from a start to a target.
#[derive(Debug, Clone)]
pub struct Transition {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Transition {
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing,
        }
    }

    /// The value at the current elapsed time.
    ///
    /// Non-positive durations report the target immediately; there is no
    /// division by a degenerate duration.
    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Advance by one frame's delta. Returns `false` once finished.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.elapsed < self.duration
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// One scalar written back to an item after a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyUpdate {
    pub item: ItemId,
    pub property: TransitionProperty,
    pub value: f32,
}

/// All in-flight transitions, keyed by item and property.
///
/// Single-threaded and frame-driven: the owner calls
/// [`advance`](Self::advance) once per tick and applies the returned
/// updates before anything reads item visuals.
#[derive(Debug, Default)]
pub struct TransitionScheduler {
    channels: HashMap<ItemId, HashMap<TransitionProperty, Transition>>,
}

impl TransitionScheduler {
    pub fn new() -> Self {
        Self {
            channels: HashMap::default(),
        }
    }

    /// Schedule `property` of `item` to move from its present value to
    /// `target`.
    ///
    /// `current` is the property's last-applied value; it is only used
    /// when the channel is idle. If a transition is already in flight the
    /// new one starts from that transition's interpolated value instead,
    /// cancelling it in the same step.
    pub fn animate(
        &mut self,
        item: ItemId,
        property: TransitionProperty,
        current: f32,
        target: f32,
        duration: f32,
        easing: Easing,
    ) {
        let item_channels = self.channels.entry(item).or_default();
        let from = item_channels
            .get(&property)
            .map(Transition::value)
            .unwrap_or(current);
        item_channels.insert(property, Transition::new(from, target, duration, easing));
    }

    /// Cancel one channel, leaving the property at its last-applied value.
    pub fn cancel(&mut self, item: ItemId, property: TransitionProperty) {
        if let Some(item_channels) = self.channels.get_mut(&item) {
            item_channels.remove(&property);
            if item_channels.is_empty() {
                self.channels.remove(&item);
            }
        }
    }

    /// Cancel every channel of `item` immediately.
    pub fn cancel_all(&mut self, item: ItemId) {
        self.channels.remove(&item);
    }

    /// The in-flight target for a channel, if any.
    pub fn target_of(&self, item: ItemId, property: TransitionProperty) -> Option<f32> {
        self.channels
            .get(&item)?
            .get(&property)
            .map(Transition::target)
    }

    pub fn is_animating(&self, item: ItemId) -> bool {
        self.channels.contains_key(&item)
    }

    /// Number of in-flight transitions across all items.
    pub fn active_count(&self) -> usize {
        self.channels.values().map(|channels| channels.len()).sum()
    }

    /// Advance every transition by `dt` seconds and collect the values to
    /// write back. Finished transitions report their exact target once and
    /// retire.
    pub fn advance(&mut self, dt: f32) -> Vec<PropertyUpdate> {
        let mut updates = Vec::with_capacity(self.active_count());

        self.channels.retain(|&item, item_channels| {
            item_channels.retain(|&property, transition| {
                let running = transition.advance(dt);
                updates.push(PropertyUpdate {
                    item,
                    property,
                    value: transition.value(),
                });
                running
            });
            !item_channels.is_empty()
        });

        updates
    }

    pub fn clear(&mut self) {
        self.channels.clear();
    }
}
