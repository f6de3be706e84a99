//! Webview side of photo visibility tracking.
//!
//! Installs an `IntersectionObserver` in the page (or a scroll listener when
//! the webview has none), feeds its reports into a
//! [`VisibilityTracker`](scrapbook_core::VisibilityTracker) and flips one
//! signal per photo card, so only cards whose visibility changed re-render.
//!
//! Photo cards are found by their `data-photo-index` attribute.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::document;
use dioxus::prelude::*;
use scrapbook_core::{
    IntersectionEntry, ObserverMessage, ScrollPoll, TrackerStatus, ViewportObserver,
    VisibilityTracker,
};

/// Installs the observer and reports entries back through `dioxus.send`.
const INSTALL_SCRIPT: &str = r#"
const threshold = __THRESHOLD__;
const indexOf = (el) => Number(el.dataset.photoIndex);

if ('IntersectionObserver' in window) {
  window.__scrapbookObserver = new IntersectionObserver((entries) => {
    for (const entry of entries) {
      dioxus.send({
        kind: 'entry',
        index: indexOf(entry.target),
        ratio: entry.intersectionRatio,
        intersecting: entry.isIntersecting,
      });
    }
  }, { threshold });
  dioxus.send({ kind: 'ready', observed: document.querySelectorAll('[data-photo-index]').length });
} else {
  dioxus.send({ kind: 'unsupported' });
  const snapshot = () => {
    const targets = [];
    document.querySelectorAll('[data-photo-index]').forEach((el) => {
      const r = el.getBoundingClientRect();
      targets.push({ index: indexOf(el), rect: { x: r.x, y: r.y, width: r.width, height: r.height } });
    });
    dioxus.send({
      kind: 'layout',
      viewport: { x: 0, y: 0, width: window.innerWidth, height: window.innerHeight },
      targets,
    });
  };
  let pending = false;
  const onScroll = () => {
    if (pending) return;
    pending = true;
    requestAnimationFrame(() => { pending = false; snapshot(); });
  };
  window.addEventListener('scroll', onScroll, { passive: true });
  window.addEventListener('resize', onScroll);
  window.__scrapbookScrollPoll = onScroll;
  snapshot();
}
"#;

const OBSERVE_SCRIPT: &str = r#"
const el = document.querySelector('[data-photo-index="__INDEX__"]');
if (el && window.__scrapbookObserver) window.__scrapbookObserver.observe(el);
"#;

const DISCONNECT_SCRIPT: &str = r#"
if (window.__scrapbookObserver) {
  window.__scrapbookObserver.disconnect();
  window.__scrapbookObserver = null;
}
if (window.__scrapbookScrollPoll) {
  window.removeEventListener('scroll', window.__scrapbookScrollPoll);
  window.removeEventListener('resize', window.__scrapbookScrollPoll);
  window.__scrapbookScrollPoll = null;
}
"#;

pub(crate) fn install_script(threshold: f64) -> String {
    INSTALL_SCRIPT.replace("__THRESHOLD__", &threshold.to_string())
}

pub(crate) fn observe_script(index: usize) -> String {
    OBSERVE_SCRIPT.replace("__INDEX__", &index.to_string())
}

/// [`ViewportObserver`] backed by the webview's `IntersectionObserver`.
#[derive(Debug, Default)]
pub struct WebviewObserver;

impl ViewportObserver for WebviewObserver {
    fn observe(&mut self, index: usize) {
        let _ = document::eval(&observe_script(index));
    }

    fn disconnect(&mut self) {
        let _ = document::eval(DISCONNECT_SCRIPT);
    }
}

type SharedTracker = Rc<RefCell<VisibilityTracker<WebviewObserver>>>;

/// Per-card visibility signals for one mounted gallery.
#[derive(Clone, PartialEq)]
pub struct PhotoVisibility {
    /// One flag per photo, in display order
    pub cards: Vec<Signal<bool>>,
    /// False once tracking is known to be unavailable; cards then render
    /// without animation
    pub animated: Signal<bool>,
}

/// Hook tracking which of `photo_count` photo cards are in view.
///
/// Observation starts after the cards mount and is released when the
/// calling component is dropped.
pub fn use_photo_visibility(photo_count: usize) -> PhotoVisibility {
    let cards = use_hook(|| (0..photo_count).map(|_| Signal::new(false)).collect::<Vec<_>>());
    let animated = use_signal(|| true);
    let tracker: SharedTracker = use_hook(|| {
        Rc::new(RefCell::new(VisibilityTracker::new(
            WebviewObserver,
            photo_count,
        )))
    });

    {
        let tracker = tracker.clone();
        let cards = cards.clone();
        use_effect(move || {
            let tracker = tracker.clone();
            let cards = cards.clone();
            spawn(async move {
                run_bridge(tracker, cards, animated).await;
            });
        });
    }

    use_drop(move || {
        tracker.borrow_mut().release();
    });

    PhotoVisibility { cards, animated }
}

/// What the bridge does after feeding one batch of reports to the tracker.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BridgeStep {
    /// New visibility for each card whose state changed, in report order
    Update(Vec<(usize, bool)>),
    /// The tracker was released; stop listening
    Stop,
}

/// Intersection reports carried by one bridge message.
///
/// Returns `None` for status messages that carry no reports.
pub(crate) fn message_entries(
    message: ObserverMessage,
    poll: &mut ScrollPoll,
) -> Option<Vec<IntersectionEntry>> {
    match message {
        ObserverMessage::Ready { observed } => {
            tracing::info!(observed, "Intersection observer installed");
            None
        }
        ObserverMessage::Unsupported => {
            tracing::info!("No IntersectionObserver, polling scroll position");
            None
        }
        ObserverMessage::Entry {
            index,
            ratio,
            intersecting,
        } => Some(vec![IntersectionEntry {
            index,
            ratio,
            is_intersecting: intersecting,
        }]),
        ObserverMessage::Layout { viewport, targets } => Some(poll.poll(viewport, &targets)),
    }
}

/// Feed reports to the tracker and collect the cards that need a re-render.
pub(crate) fn dispatch<O: ViewportObserver>(
    tracker: &mut VisibilityTracker<O>,
    entries: Vec<IntersectionEntry>,
) -> BridgeStep {
    if tracker.status() == TrackerStatus::Released {
        return BridgeStep::Stop;
    }

    let mut changes = Vec::new();
    for entry in entries {
        if tracker.apply(entry) {
            changes.push((entry.index, tracker.visible().contains(entry.index)));
        }
    }
    BridgeStep::Update(changes)
}

/// Whether a closed channel should switch the cards to static rendering.
///
/// A channel that closes because the page released the tracker is expected.
pub(crate) fn degrade_on_close(status: TrackerStatus) -> bool {
    status != TrackerStatus::Released
}

/// Pump observer messages into the tracker until the page goes away.
async fn run_bridge(tracker: SharedTracker, cards: Vec<Signal<bool>>, mut animated: Signal<bool>) {
    let threshold = tracker.borrow().threshold();
    let mut eval = document::eval(&install_script(threshold));

    if let Err(e) = tracker.borrow_mut().subscribe_all() {
        tracing::warn!("Photo tracking unavailable: {}", e);
        animated.set(false);
        return;
    }

    let mut poll = ScrollPoll::new(threshold);

    loop {
        let message = match eval.recv::<ObserverMessage>().await {
            Ok(message) => message,
            Err(e) => {
                if degrade_on_close(tracker.borrow().status()) {
                    tracing::warn!(error = ?e, "Visibility bridge closed, showing photos unanimated");
                    animated.set(false);
                }
                break;
            }
        };

        let Some(entries) = message_entries(message, &mut poll) else {
            continue;
        };

        let step = dispatch(&mut *tracker.borrow_mut(), entries);
        match step {
            BridgeStep::Stop => break,
            BridgeStep::Update(changes) => {
                for (index, visible) in changes {
                    if let Some(mut card) = cards.get(index).copied() {
                        card.set(visible);
                    }
                }
            }
        }
    }
}
