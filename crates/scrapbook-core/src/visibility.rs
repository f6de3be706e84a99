//! Photo visibility tracking.
//!
//! The gallery animates a photo card in once at least half of it is inside
//! the viewport and out again once it drops below that. This module owns the
//! bookkeeping; the rendering surface only has to report intersection
//! changes through a [`ViewportObserver`].
//!
//! ## Overview
//!
//! ```text
//! ┌────────────────────┐  observe(i)   ┌──────────────────────┐
//! │ VisibilityTracker  │ ────────────▶ │  ViewportObserver    │
//! │  ├── VisibilitySet │               │  (webview bridge or  │
//! │  └── subscribed    │ ◀──────────── │   ScrollPoll)        │
//! └────────────────────┘  on_change()  └──────────────────────┘
//!           │ release() / Drop
//!           └──────────────▶ disconnect()
//! ```
//!
//! After `release()` the tracker ignores every late event, so a callback that
//! was already in flight when the page went away cannot touch the set.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{ScrapbookError, ScrapbookResult};

/// Fraction of a photo that must be on screen for it to count as visible.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Clamp a threshold to `0.0..=1.0`; NaN falls back to [`VISIBILITY_THRESHOLD`].
pub fn normalize_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        VISIBILITY_THRESHOLD
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

/// Set of photo indices currently in view, bounded by the photo count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilitySet {
    indices: BTreeSet<usize>,
    capacity: usize,
}

impl VisibilitySet {
    /// Empty set for an album of `photo_count` photos.
    pub fn new(photo_count: usize) -> Self {
        Self {
            indices: BTreeSet::new(),
            capacity: photo_count,
        }
    }

    /// Number of photos this set indexes into.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Add an index. Returns false if it was already present or out of range.
    pub fn insert(&mut self, index: usize) -> bool {
        if index >= self.capacity {
            return false;
        }
        self.indices.insert(index)
    }

    /// Remove an index. Returns false if it was not present.
    pub fn remove(&mut self, index: usize) -> bool {
        self.indices.remove(&index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Visible indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

/// Receives observation requests from a [`VisibilityTracker`].
///
/// Implemented by whatever can watch elements scroll: the webview's
/// `IntersectionObserver`, a scroll-position poll, or a recording fake in
/// tests.
pub trait ViewportObserver {
    /// Start watching the photo at `index`.
    fn observe(&mut self, index: usize);

    /// Stop watching everything. Called exactly once per tracker.
    fn disconnect(&mut self);
}

/// One intersection report for one photo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub index: usize,
    /// Visible fraction of the element, `0.0..=1.0`
    pub ratio: f64,
    pub is_intersecting: bool,
}

/// Lifecycle of a tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerStatus {
    /// Created, nothing subscribed yet
    Idle,
    /// At least one photo subscribed
    Observing,
    /// Observer disconnected; events are ignored
    Released,
}

/// Maintains the [`VisibilitySet`] for one mounted gallery.
///
/// Dropping the tracker releases it, so scoping the tracker to the page
/// scopes the observation too.
pub struct VisibilityTracker<O: ViewportObserver> {
    observer: Option<O>,
    visible: VisibilitySet,
    subscribed: BTreeSet<usize>,
    threshold: f64,
}

impl<O: ViewportObserver> VisibilityTracker<O> {
    /// Tracker for `photo_count` photos using the default 50% threshold.
    pub fn new(observer: O, photo_count: usize) -> Self {
        Self {
            observer: Some(observer),
            visible: VisibilitySet::new(photo_count),
            subscribed: BTreeSet::new(),
            threshold: VISIBILITY_THRESHOLD,
        }
    }

    /// Override the visibility threshold, see [`normalize_threshold`].
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = normalize_threshold(threshold);
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn photo_count(&self) -> usize {
        self.visible.capacity()
    }

    pub fn status(&self) -> TrackerStatus {
        if self.observer.is_none() {
            TrackerStatus::Released
        } else if self.subscribed.is_empty() {
            TrackerStatus::Idle
        } else {
            TrackerStatus::Observing
        }
    }

    /// Currently visible photos.
    pub fn visible(&self) -> &VisibilitySet {
        &self.visible
    }

    /// Register one photo with the observer. Subscribing twice is a no-op.
    pub fn subscribe(&mut self, index: usize) -> ScrapbookResult<()> {
        let count = self.photo_count();
        let observer = self
            .observer
            .as_mut()
            .ok_or(ScrapbookError::TrackerReleased)?;

        if index >= count {
            return Err(ScrapbookError::IndexOutOfRange { index, count });
        }

        if self.subscribed.insert(index) {
            observer.observe(index);
        }
        Ok(())
    }

    /// Register every photo in display order.
    pub fn subscribe_all(&mut self) -> ScrapbookResult<()> {
        for index in 0..self.photo_count() {
            self.subscribe(index)?;
        }
        tracing::debug!(photos = self.photo_count(), "visibility tracker observing");
        Ok(())
    }

    /// Apply a visibility change. Returns whether the set changed.
    pub fn on_change(&mut self, index: usize, is_visible: bool) -> bool {
        if self.observer.is_none() {
            tracing::warn!(index, "visibility event after release ignored");
            return false;
        }
        if !self.subscribed.contains(&index) {
            tracing::warn!(index, "visibility event for unobserved photo ignored");
            return false;
        }

        let changed = if is_visible {
            self.visible.insert(index)
        } else {
            self.visible.remove(index)
        };

        if changed {
            tracing::debug!(index, is_visible, "photo visibility changed");
        }
        changed
    }

    /// Apply a raw intersection report using the configured threshold.
    pub fn apply(&mut self, entry: IntersectionEntry) -> bool {
        let is_visible = entry.is_intersecting && entry.ratio >= self.threshold;
        self.on_change(entry.index, is_visible)
    }

    /// Disconnect the observer and clear the set. Idempotent.
    pub fn release(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
            self.visible.clear();
            self.subscribed.clear();
            tracing::debug!("visibility tracker released");
        }
    }
}

impl<O: ViewportObserver> Drop for VisibilityTracker<O> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Axis-aligned rectangle in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Fraction of `target` that lies inside `viewport`.
///
/// Zero-area targets count as fully visible when their origin is on screen.
pub fn intersection_ratio(target: Rect, viewport: Rect) -> f64 {
    let area = target.area();
    if area <= 0.0 {
        return if viewport.contains_point(target.x, target.y) {
            1.0
        } else {
            0.0
        };
    }

    let left = target.x.max(viewport.x);
    let right = (target.x + target.width).min(viewport.x + viewport.width);
    let top = target.y.max(viewport.y);
    let bottom = (target.y + target.height).min(viewport.y + viewport.height);

    let overlap = (right - left).max(0.0) * (bottom - top).max(0.0);
    (overlap / area).clamp(0.0, 1.0)
}

/// Bounding box of one photo card, as reported by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetRect {
    pub index: usize,
    pub rect: Rect,
}

/// Manual scroll-position fallback for surfaces without an intersection
/// primitive.
///
/// Each layout snapshot is compared with the previous one and only threshold
/// crossings come out, which is what an `IntersectionObserver` would report.
#[derive(Debug, Clone)]
pub struct ScrollPoll {
    threshold: f64,
    last: HashMap<usize, bool>,
}

impl Default for ScrollPoll {
    fn default() -> Self {
        Self::new(VISIBILITY_THRESHOLD)
    }
}

impl ScrollPoll {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: normalize_threshold(threshold),
            last: HashMap::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Compare a layout snapshot with the previous one.
    pub fn poll(&mut self, viewport: Rect, targets: &[TargetRect]) -> Vec<IntersectionEntry> {
        let mut entries = Vec::new();
        for target in targets {
            let ratio = intersection_ratio(target.rect, viewport);
            let visible = ratio > 0.0 && ratio >= self.threshold;
            if self.last.insert(target.index, visible) != Some(visible) {
                entries.push(IntersectionEntry {
                    index: target.index,
                    ratio,
                    is_intersecting: ratio > 0.0,
                });
            }
        }
        entries
    }
}

/// Messages sent by the webview observer script, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ObserverMessage {
    /// Observer installed for `observed` elements
    Ready { observed: usize },
    /// No `IntersectionObserver` in this surface
    Unsupported,
    /// Native intersection report
    Entry {
        index: usize,
        ratio: f64,
        intersecting: bool,
    },
    /// Scroll-poll snapshot
    Layout {
        viewport: Rect,
        targets: Vec<TargetRect>,
    },
}

impl ObserverMessage {
    /// Native entry as an [`IntersectionEntry`], if this is one.
    pub fn as_entry(&self) -> Option<IntersectionEntry> {
        match *self {
            ObserverMessage::Entry {
                index,
                ratio,
                intersecting,
            } => Some(IntersectionEntry {
                index,
                ratio,
                is_intersecting: intersecting,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct Log {
        observed: Vec<usize>,
        disconnects: usize,
    }

    #[derive(Clone, Default)]
    struct FakeObserver(Rc<RefCell<Log>>);

    impl ViewportObserver for FakeObserver {
        fn observe(&mut self, index: usize) {
            self.0.borrow_mut().observed.push(index);
        }

        fn disconnect(&mut self) {
            self.0.borrow_mut().disconnects += 1;
        }
    }

    fn entry(index: usize, ratio: f64) -> IntersectionEntry {
        IntersectionEntry {
            index,
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }

    #[test]
    fn set_rejects_out_of_range() {
        let mut set = VisibilitySet::new(3);
        assert!(set.insert(2));
        assert!(!set.insert(3));
        assert!(!set.insert(2));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn subscribe_registers_once() {
        let observer = FakeObserver::default();
        let log = observer.0.clone();
        let mut tracker = VisibilityTracker::new(observer, 4);
        assert_eq!(tracker.status(), TrackerStatus::Idle);

        tracker.subscribe(1).unwrap();
        tracker.subscribe(1).unwrap();
        assert_eq!(log.borrow().observed, vec![1]);
        assert_eq!(tracker.status(), TrackerStatus::Observing);
    }

    #[test]
    fn subscribe_out_of_range_fails() {
        let mut tracker = VisibilityTracker::new(FakeObserver::default(), 2);
        let err = tracker.subscribe(5).unwrap_err();
        assert!(matches!(
            err,
            ScrapbookError::IndexOutOfRange { index: 5, count: 2 }
        ));
    }

    #[test]
    fn threshold_decides_visibility() {
        let mut tracker = VisibilityTracker::new(FakeObserver::default(), 3);
        tracker.subscribe_all().unwrap();

        assert!(!tracker.apply(entry(0, 0.3)));
        assert!(tracker.apply(entry(0, 0.5)));
        assert!(tracker.visible().contains(0));
        assert!(tracker.apply(entry(0, 0.49)));
        assert!(!tracker.visible().contains(0));
    }

    #[test]
    fn custom_threshold_is_clamped() {
        let tracker = VisibilityTracker::new(FakeObserver::default(), 1).with_threshold(3.0);
        assert_eq!(tracker.threshold(), 1.0);
        let tracker = VisibilityTracker::new(FakeObserver::default(), 1).with_threshold(f64::NAN);
        assert_eq!(tracker.threshold(), VISIBILITY_THRESHOLD);
    }

    #[test]
    fn unsubscribed_events_ignored() {
        let mut tracker = VisibilityTracker::new(FakeObserver::default(), 3);
        tracker.subscribe(0).unwrap();
        assert!(!tracker.on_change(1, true));
        assert!(tracker.visible().is_empty());
    }

    #[test]
    fn release_disconnects_once_and_blocks_events() {
        let observer = FakeObserver::default();
        let log = observer.0.clone();
        let mut tracker = VisibilityTracker::new(observer, 3);
        tracker.subscribe_all().unwrap();
        tracker.on_change(0, true);

        tracker.release();
        tracker.release();
        assert_eq!(log.borrow().disconnects, 1);
        assert_eq!(tracker.status(), TrackerStatus::Released);
        assert!(tracker.visible().is_empty());
        assert!(!tracker.on_change(1, true));
        assert!(matches!(
            tracker.subscribe(0),
            Err(ScrapbookError::TrackerReleased)
        ));
    }

    #[test]
    fn drop_releases() {
        let observer = FakeObserver::default();
        let log = observer.0.clone();
        {
            let mut tracker = VisibilityTracker::new(observer, 2);
            tracker.subscribe_all().unwrap();
        }
        assert_eq!(log.borrow().disconnects, 1);
    }

    #[test]
    fn ratio_full_partial_none() {
        let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert_eq!(intersection_ratio(Rect::new(0.0, 0.0, 100.0, 100.0), viewport), 1.0);
        assert_eq!(intersection_ratio(Rect::new(0.0, 550.0, 100.0, 100.0), viewport), 0.5);
        assert_eq!(intersection_ratio(Rect::new(0.0, 700.0, 100.0, 100.0), viewport), 0.0);
        assert_eq!(intersection_ratio(Rect::new(0.0, -75.0, 100.0, 100.0), viewport), 0.25);
    }

    #[test]
    fn ratio_zero_area() {
        let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert_eq!(intersection_ratio(Rect::new(10.0, 10.0, 0.0, 0.0), viewport), 1.0);
        assert_eq!(intersection_ratio(Rect::new(10.0, 900.0, 0.0, 0.0), viewport), 0.0);
    }

    #[test]
    fn scroll_poll_reports_crossings_only() {
        let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
        let mut poll = ScrollPoll::default();

        let below = [TargetRect { index: 0, rect: Rect::new(0.0, 700.0, 100.0, 100.0) }];
        let first = poll.poll(viewport, &below);
        assert_eq!(first.len(), 1);
        assert!(!first[0].is_intersecting);

        assert!(poll.poll(viewport, &below).is_empty());

        let half = [TargetRect { index: 0, rect: Rect::new(0.0, 540.0, 100.0, 100.0) }];
        let crossed = poll.poll(viewport, &half);
        assert_eq!(crossed.len(), 1);
        assert!(crossed[0].is_intersecting);
        assert!(crossed[0].ratio >= VISIBILITY_THRESHOLD);
    }

    #[test]
    fn poll_and_tracker_share_threshold_rules() {
        for raw in [f64::NAN, -0.2, 0.3, 1.7] {
            let tracker = VisibilityTracker::new(FakeObserver::default(), 1).with_threshold(raw);
            let poll = ScrollPoll::new(raw);
            assert_eq!(poll.threshold(), tracker.threshold());
        }
        assert_eq!(ScrollPoll::new(f64::NAN).threshold(), VISIBILITY_THRESHOLD);
        assert_eq!(ScrollPoll::new(2.0).threshold(), 1.0);
    }

    #[test]
    fn nan_threshold_poll_keeps_quarter_hidden() {
        let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
        let mut poll = ScrollPoll::new(f64::NAN);
        let quarter = [TargetRect { index: 0, rect: Rect::new(0.0, 575.0, 100.0, 100.0) }];
        let entries = poll.poll(viewport, &quarter);
        assert_eq!(entries.len(), 1);

        let mut tracker = VisibilityTracker::new(FakeObserver::default(), 1);
        tracker.subscribe_all().unwrap();
        assert!(!tracker.apply(entries[0]));
        assert!(!tracker.visible().contains(0));
    }

    #[test]
    fn observer_message_wire_format() {
        let msg: ObserverMessage =
            serde_json::from_str(r#"{"kind":"entry","index":3,"ratio":0.75,"intersecting":true}"#)
                .unwrap();
        assert_eq!(
            msg.as_entry(),
            Some(IntersectionEntry { index: 3, ratio: 0.75, is_intersecting: true })
        );

        let msg: ObserverMessage = serde_json::from_str(r#"{"kind":"unsupported"}"#).unwrap();
        assert_eq!(msg, ObserverMessage::Unsupported);
        assert_eq!(msg.as_entry(), None);

        let msg: ObserverMessage = serde_json::from_str(
            r#"{"kind":"layout","viewport":{"x":0,"y":0,"width":800,"height":600},
                "targets":[{"index":1,"rect":{"x":0,"y":10,"width":400,"height":300}}]}"#,
        )
        .unwrap();
        match msg {
            ObserverMessage::Layout { viewport, targets } => {
                assert_eq!(viewport.height, 600.0);
                assert_eq!(targets[0].index, 1);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
