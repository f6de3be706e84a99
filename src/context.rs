//! Page state context for the scrapbook.
//!
//! The album and the section flags are created once when the page mounts and
//! shared with every component via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let album = use_album();
//! let mut flags = use_section_flags();
//! flags.write().toggle(Section::Vocabulary);
//! let open = use_section_open(Section::Vocabulary);
//! ```

use dioxus::prelude::*;
use scrapbook_core::{Album, Section, SectionFlags};

/// Get the album selected at startup.
pub fn get_album() -> Option<Album> {
    crate::get_album()
}

/// Hook to access the album being rendered.
pub fn use_album() -> Signal<Album> {
    use_context::<Signal<Album>>()
}

/// Hook to access the open/closed flags of every section.
///
/// Flags start closed and live for the page session only.
pub fn use_section_flags() -> Signal<SectionFlags> {
    use_context::<Signal<SectionFlags>>()
}

/// Hook reading whether one section is open.
///
/// Subscribes the calling component to the flags.
pub fn use_section_open(section: Section) -> bool {
    use_section_flags().read().is_open(section)
}
