//! UI Components for the scrapbook page.

mod collapsible_section;
mod letter_modal;
mod photo_gallery;
mod section_bodies;

pub use collapsible_section::CollapsibleSection;
pub use letter_modal::{LetterButton, LetterModal};
pub use photo_gallery::{PhotoCard, PhotoGallery};
pub use section_bodies::{ProseBody, VocabularyList};
