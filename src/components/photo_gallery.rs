//! Photo Gallery Component
//!
//! Two-column grid of framed photos that fade and slide in as they scroll
//! into view.

use dioxus::prelude::*;
use scrapbook_core::Photo;
use scrapbook_ui::Card;

use crate::viewport::use_photo_visibility;

/// CSS class for a photo card in the given animation state.
///
/// Without tracking the card is shown as-is, with no entrance animation.
pub(crate) fn photo_card_class(animated: bool, visible: bool) -> &'static str {
    match (animated, visible) {
        (false, _) => "photo-card photo-card--static",
        (true, true) => "photo-card photo-card--visible",
        (true, false) => "photo-card photo-card--hidden",
    }
}

/// Photo grid with scroll-triggered entrance
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     PhotoGallery {
///         heading: "Photo Memories".to_string(),
///         photos: album.photos.clone(),
///     }
/// }
/// ```
#[component]
pub fn PhotoGallery(
    /// Gallery section title
    heading: String,
    /// Photos in display order
    photos: Vec<Photo>,
) -> Element {
    let visibility = use_photo_visibility(photos.len());

    rsx! {
        section { class: "gallery", "aria-labelledby": "photo-memories",
            h2 { id: "photo-memories", class: "gallery__heading", "{heading}" }

            div { class: "gallery__grid",
                for (index, photo) in photos.iter().enumerate() {
                    PhotoCard {
                        key: "{index}",
                        index,
                        photo: photo.clone(),
                        visible: visibility.cards[index],
                        animated: visibility.animated,
                    }
                }
            }
        }
    }
}

/// One framed photo with its caption.
///
/// Subscribes only to its own visibility flag.
#[component]
pub fn PhotoCard(
    index: usize,
    photo: Photo,
    visible: ReadOnlySignal<bool>,
    animated: ReadOnlySignal<bool>,
) -> Element {
    let class = photo_card_class(animated(), visible());

    rsx! {
        div { class: "{class}", "data-photo-index": "{index}",
            Card { hoverable: true,
                img {
                    class: "photo-card__img",
                    src: "{photo.path}",
                    alt: "{photo.caption}",
                    width: "400",
                    height: "300",
                }
                p { class: "photo-card__caption", "{photo.caption}" }
            }
        }
    }
}
