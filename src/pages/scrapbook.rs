//! Scrapbook page - the whole album on one scrolling page.
//!
//! Gallery first, then the three collapsible sections, then the letter.

use dioxus::prelude::*;
use scrapbook_core::Section;

use crate::components::{
    CollapsibleSection, LetterButton, LetterModal, PhotoGallery, ProseBody, VocabularyList,
};
use crate::context::use_album;

/// Scrapbook page component.
#[component]
pub fn Scrapbook() -> Element {
    let album = use_album();
    let album = album.read();

    rsx! {
        main { class: "scrapbook",
            h1 { class: "scrapbook__title", "{album.title}" }

            PhotoGallery {
                heading: album.gallery_heading.clone(),
                photos: album.photos.clone(),
            }

            CollapsibleSection {
                section: Section::Vocabulary,
                heading: album.vocabulary.heading.clone(),
                VocabularyList { entries: album.vocabulary.entries.clone() }
            }

            CollapsibleSection {
                section: Section::Activity,
                heading: album.activity.heading.clone(),
                ProseBody { paragraphs: album.activity.paragraphs.clone() }
            }

            CollapsibleSection {
                section: Section::Reflection,
                heading: album.reflection.heading.clone(),
                ProseBody { paragraphs: album.reflection.paragraphs.clone() }
            }

            section { class: "letter-section",
                LetterButton { label: album.letter.button_label.clone() }
                LetterModal { letter: album.letter.clone() }
            }
        }
    }
}
