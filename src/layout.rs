//! Layout collaborators: elements that report their bounds, and the resize
//! notifications that tell the beam those bounds may have moved.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashSet;

use crate::geometry::Rect;

/// An externally owned visual element.
pub trait LayoutElement {
    /// Current bounds in the shared layout coordinate space.
    fn bounding_rect(&self) -> Rect;
}

/// Shared handle to a layout element.
pub type ElementRef = Rc<dyn LayoutElement>;

/// Element whose bounds are set programmatically.
#[derive(Debug, Default)]
pub struct FixedElement {
    rect: Cell<Rect>,
}

impl FixedElement {
    /// Element with the given bounds.
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self {
            rect: Cell::new(rect),
        }
    }

    /// Shared handle to a new element with the given bounds.
    #[must_use]
    pub fn shared(rect: Rect) -> Rc<Self> {
        Rc::new(Self::new(rect))
    }

    /// Move or resize the element.
    pub fn set_rect(&self, rect: Rect) {
        self.rect.set(rect);
    }
}

impl LayoutElement for FixedElement {
    fn bounding_rect(&self) -> Rect {
        self.rect.get()
    }
}

/// Token identifying one resize subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "resize#{}", self.0)
    }
}

/// Capability to subscribe to layout resize notifications.
///
/// Unsubscribing an unknown id must be a no-op.
pub trait ResizeSource {
    /// Start receiving resize notifications.
    fn subscribe(&mut self) -> SubscriptionId;

    /// Stop receiving resize notifications.
    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// In-process resize fan-out.
///
/// The host calls [`broadcast`](Self::broadcast) when its viewport changes
/// and forwards the signal to each returned subscriber.
#[derive(Debug, Default)]
pub struct ResizeHub {
    next_id: u64,
    subscribers: FxHashSet<SubscriptionId>,
}

impl ResizeHub {
    /// Hub with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribers to notify, in subscription order.
    #[must_use]
    pub fn broadcast(&self) -> Vec<SubscriptionId> {
        let mut ids: Vec<_> = self.subscribers.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Whether `id` is currently subscribed.
    #[must_use]
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscribers.contains(&id)
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Whether there are no live subscriptions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl ResizeSource for ResizeHub {
    fn subscribe(&mut self) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        let _ = self.subscribers.insert(id);
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        let _ = self.subscribers.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_element_moves() {
        let el = FixedElement::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        el.set_rect(Rect::new(5.0, 5.0, 10.0, 10.0));
        assert_eq!(el.bounding_rect().left, 5.0);
    }

    #[test]
    fn test_hub_subscription_lifecycle() {
        let mut hub = ResizeHub::new();
        let a = hub.subscribe();
        let b = hub.subscribe();
        assert_eq!(hub.broadcast(), vec![a, b]);

        hub.unsubscribe(a);
        hub.unsubscribe(a);
        assert_eq!(hub.broadcast(), vec![b]);
        assert!(!hub.is_subscribed(a));
        assert_eq!(hub.len(), 1);
    }
}
