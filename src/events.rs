//! Event subscription for sketch interactions.
//!
//! Embedders can observe what happens on the canvas through an
//! [`EventController`]. Each [`SketchEvent`] carries a set of [`EventKind`]
//! flags, so one occurrence can match several categories (adding a fourth
//! point is a `CLICK`, a `POINT_ADDED`, a `POINT_EVICTED` and a
//! `SHAPE_UPDATED` all at once).
//!
//! Subscribers pass an [`EventFilter`]; an event is delivered when
//! `(event.kinds & filter) != 0`.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::data::geometry::{Coords, ParallelogramShape};

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing the categories an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u64);

impl EventKind {
    /// No category.
    pub const EMPTY: Self = Self(0);

    /// A click on the empty canvas.
    pub const CLICK: Self = Self(1 << 0);
    /// A point was placed.
    pub const POINT_ADDED: Self = Self(1 << 1);
    /// The oldest point was dropped to make room for a new one.
    pub const POINT_EVICTED: Self = Self(1 << 2);

    /// A point handle was grabbed.
    pub const DRAG_START: Self = Self(1 << 3);
    /// A grabbed point moved.
    pub const DRAG_MOVE: Self = Self(1 << 4);
    /// A point handle was released.
    pub const DRAG_END: Self = Self(1 << 5);

    /// All points were cleared.
    pub const RESET: Self = Self(1 << 6);
    /// The closed parallelogram changed (new vertex, moved vertex).
    pub const SHAPE_UPDATED: Self = Self(1 << 7);

    /// A screenshot was saved.
    pub const SCREENSHOT: Self = Self(1 << 8);

    /// Wildcard: matches every event kind.
    pub const ALL: Self = Self(u64::MAX);

    /// Combine two event kinds (bitwise OR).
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether `self` contains all bits in `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether `self` shares at least one bit with `other`.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Any of the three drag phases.
    pub const fn is_drag(self) -> bool {
        self.intersects(Self::DRAG_START.union(Self::DRAG_MOVE).union(Self::DRAG_END))
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for EventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for EventKind {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == EventKind::ALL {
            return write!(f, "ALL");
        }

        let pairs: &[(EventKind, &str)] = &[
            (EventKind::CLICK, "CLICK"),
            (EventKind::POINT_ADDED, "POINT_ADDED"),
            (EventKind::POINT_EVICTED, "POINT_EVICTED"),
            (EventKind::DRAG_START, "DRAG_START"),
            (EventKind::DRAG_MOVE, "DRAG_MOVE"),
            (EventKind::DRAG_END, "DRAG_END"),
            (EventKind::RESET, "RESET"),
            (EventKind::SHAPE_UPDATED, "SHAPE_UPDATED"),
            (EventKind::SCREENSHOT, "SCREENSHOT"),
        ];

        let mut names = Vec::new();
        let mut known_bits: u64 = 0;
        for (kind, name) in pairs {
            known_bits |= kind.0;
            if self.contains(*kind) {
                names.push((*name).to_string());
            }
        }
        let extra = self.0 & !known_bits;
        if extra != 0 {
            names.push(format!("0x{:x}", extra));
        }
        write!(f, "{}", names.join("|"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Metadata
// ─────────────────────────────────────────────────────────────────────────────

/// Where a canvas click landed, in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickMeta {
    pub pos: Coords,
}

/// Which point a drag phase applies to and where it is now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragMeta {
    pub index: usize,
    pub pos: Coords,
    /// Handle radius after the update.
    pub radius: f32,
}

/// Where a screenshot was written.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenshotMeta {
    pub path: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// SketchEvent
// ─────────────────────────────────────────────────────────────────────────────

/// An event emitted by the sketch UI.
#[derive(Debug, Clone)]
pub struct SketchEvent {
    pub kinds: EventKind,
    /// Seconds since the controller was created; set on emit.
    pub timestamp: f64,
    /// Number of points in the store after the event.
    pub point_count: usize,

    pub click: Option<ClickMeta>,
    pub drag: Option<DragMeta>,
    /// The parallelogram after the event, when one is defined.
    pub shape: Option<ParallelogramShape>,
    pub screenshot: Option<ScreenshotMeta>,
}

impl SketchEvent {
    pub fn new(kinds: EventKind) -> Self {
        Self {
            kinds,
            timestamp: 0.0,
            point_count: 0,
            click: None,
            drag: None,
            shape: None,
            screenshot: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventFilter
// ─────────────────────────────────────────────────────────────────────────────

/// OR-mask selecting which event categories a subscriber receives.
#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    pub const fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    pub const fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    #[inline]
    pub fn matches(&self, event: &SketchEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

struct Subscriber {
    filter: EventFilter,
    sender: Sender<SketchEvent>,
}

struct EventCtrlInner {
    subscribers: Vec<Subscriber>,
    start_instant: std::time::Instant,
}

/// Collects sketch events and hands them to subscribers over `mpsc` channels.
///
/// Attach it to [`SketchConfig`](crate::config::SketchConfig) before
/// launching, then [`subscribe`](Self::subscribe) from any thread.
#[derive(Clone)]
pub struct EventController {
    inner: Arc<Mutex<EventCtrlInner>>,
}

impl EventController {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventCtrlInner {
                subscribers: Vec::new(),
                start_instant: std::time::Instant::now(),
            })),
        }
    }

    /// Subscribe to events whose kinds intersect `filter`.
    pub fn subscribe(&self, filter: EventFilter) -> Receiver<SketchEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut inner = self.lock();
        inner.subscribers.push(Subscriber { filter, sender: tx });
        rx
    }

    pub fn subscribe_all(&self) -> Receiver<SketchEvent> {
        self.subscribe(EventFilter::all())
    }

    /// Stamp `event` and deliver it to every matching subscriber.
    ///
    /// Subscribers whose receiver was dropped are removed the next time an
    /// event matches them.
    pub fn emit(&self, mut event: SketchEvent) {
        let mut inner = self.lock();
        event.timestamp = inner.start_instant.elapsed().as_secs_f64();
        inner.subscribers.retain(|sub| {
            if sub.filter.matches(&event) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, EventCtrlInner> {
        // A panic while holding the lock leaves the subscriber list intact.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventController")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_union_and_intersection() {
        let combined = EventKind::CLICK | EventKind::POINT_ADDED;
        assert!(combined.contains(EventKind::CLICK));
        assert!(combined.contains(EventKind::POINT_ADDED));
        assert!(!EventKind::RESET.intersects(combined));
    }

    #[test]
    fn drag_phases_are_drag() {
        assert!(EventKind::DRAG_START.is_drag());
        assert!(EventKind::DRAG_MOVE.is_drag());
        assert!(EventKind::DRAG_END.is_drag());
        assert!(!EventKind::CLICK.is_drag());
    }

    #[test]
    fn filter_matches_any_shared_bit() {
        let filter = EventFilter::only(EventKind::RESET | EventKind::SHAPE_UPDATED);
        assert!(filter.matches(&SketchEvent::new(EventKind::RESET)));
        assert!(filter.matches(&SketchEvent::new(
            EventKind::DRAG_MOVE | EventKind::SHAPE_UPDATED
        )));
        assert!(!filter.matches(&SketchEvent::new(EventKind::CLICK)));
    }

    #[test]
    fn controller_delivers_by_filter() {
        let ctrl = EventController::new();
        let rx_all = ctrl.subscribe_all();
        let rx_reset = ctrl.subscribe(EventFilter::only(EventKind::RESET));

        ctrl.emit(SketchEvent::new(EventKind::CLICK | EventKind::POINT_ADDED));

        assert!(rx_all.try_recv().is_ok());
        assert!(rx_reset.try_recv().is_err());
    }

    #[test]
    fn timestamp_set_on_emit() {
        let ctrl = EventController::new();
        let rx = ctrl.subscribe_all();
        std::thread::sleep(std::time::Duration::from_millis(5));
        ctrl.emit(SketchEvent::new(EventKind::RESET));
        assert!(rx.try_recv().unwrap().timestamp > 0.0);
    }

    #[test]
    fn dropped_receiver_is_pruned() {
        let ctrl = EventController::new();
        let rx1 = ctrl.subscribe_all();
        let rx2 = ctrl.subscribe_all();
        drop(rx1);

        ctrl.emit(SketchEvent::new(EventKind::CLICK));
        assert!(rx2.try_recv().is_ok());
        assert_eq!(ctrl.subscriber_count(), 1);
    }

    #[test]
    fn display_joins_names() {
        assert_eq!(EventKind::CLICK.to_string(), "CLICK");
        assert_eq!(
            (EventKind::CLICK | EventKind::POINT_EVICTED).to_string(),
            "CLICK|POINT_EVICTED"
        );
        assert_eq!(EventKind::ALL.to_string(), "ALL");
        assert_eq!(EventKind::EMPTY.to_string(), "EMPTY");
        assert!(EventKind(1 << 60).to_string().starts_with("0x"));
    }

    #[test]
    fn kinds_do_not_overlap() {
        let all_kinds = [
            EventKind::CLICK,
            EventKind::POINT_ADDED,
            EventKind::POINT_EVICTED,
            EventKind::DRAG_START,
            EventKind::DRAG_MOVE,
            EventKind::DRAG_END,
            EventKind::RESET,
            EventKind::SHAPE_UPDATED,
            EventKind::SCREENSHOT,
        ];
        for (i, a) in all_kinds.iter().enumerate() {
            for (j, b) in all_kinds.iter().enumerate() {
                if i != j {
                    assert!(!a.intersects(*b), "{} overlaps {}", a, b);
                }
            }
        }
    }
}
