//! Scrapbook Core Library
//!
//! UI-free state behind the scrapbook page.
//!
//! ## Overview
//!
//! The page is a photo gallery whose cards fade in as they scroll into view,
//! three collapsible text sections and a letter dialog. Everything that is
//! not markup lives here:
//!
//! - **Album**: the authored data set (photos, section copy, letter) with
//!   embedded presets
//! - **Visibility**: the set of photo indices currently in view, driven by a
//!   [`ViewportObserver`] and released on teardown
//! - **Sections**: four independent open/closed flags
//!
//! ## Quick Start
//!
//! ```
//! use scrapbook_core::{Album, AlbumPreset, Section, SectionFlags};
//!
//! let album = Album::preset(AlbumPreset::Dublin).unwrap();
//! assert!(!album.photos.is_empty());
//!
//! let mut flags = SectionFlags::default();
//! flags.toggle(Section::Vocabulary);
//! assert!(flags.is_open(Section::Vocabulary));
//! assert!(!flags.is_open(Section::Letter));
//! ```

pub mod album;
pub mod error;
pub mod logging;
pub mod sections;
pub mod visibility;

// Re-exports
pub use album::{
    Album, AlbumPreset, Letter, Photo, ProseSection, SectionHeading, VocabularyEntry,
    VocabularySection,
};
pub use error::{ScrapbookError, ScrapbookResult};
pub use sections::{Section, SectionAction, SectionFlags};
pub use visibility::{
    intersection_ratio, normalize_threshold, IntersectionEntry, ObserverMessage, Rect, ScrollPoll,
    TargetRect, TrackerStatus, ViewportObserver, VisibilitySet, VisibilityTracker,
    VISIBILITY_THRESHOLD,
};
