use dioxus::prelude::*;
use scrapbook_core::{Album, SectionFlags};

use crate::context::get_album;
use crate::pages::Scrapbook;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The scrapbook page
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Scrapbook {},
}

/// Root application component.
///
/// Provides global styles, album and section state, and routing.
#[component]
pub fn App() -> Element {
    let album = use_hook(get_album);

    rsx! {
        style { {GLOBAL_STYLES} }
        if let Some(album) = album.clone() {
            AlbumProvider { album }
        } else {
            main { class: "scrapbook",
                p { class: "scrapbook__empty", "No album loaded." }
            }
        }
    }
}

/// Owns the per-session page state and hands it to the router.
#[component]
fn AlbumProvider(album: Album) -> Element {
    let album: Signal<Album> = use_signal(|| album);
    let flags: Signal<SectionFlags> = use_signal(SectionFlags::new);

    // Provide page state to all child components
    use_context_provider(|| album);
    use_context_provider(|| flags);

    rsx! {
        Router::<Route> {}
    }
}
