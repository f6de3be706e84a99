//! Letter Components
//!
//! The "Open Letter" button and the overlay dialog it opens. The dialog
//! closes from its close button, a click on the backdrop, or Escape.

use dioxus::prelude::*;
use scrapbook_core::{Letter, Section, SectionAction};
use scrapbook_ui::{Button, ButtonVariant, CloseButton};

use crate::context::{use_section_flags, use_section_open};

/// Button that opens the letter dialog.
#[component]
pub fn LetterButton(label: String) -> Element {
    let mut flags = use_section_flags();
    let is_open = use_section_open(Section::Letter);

    rsx! {
        Button {
            variant: ButtonVariant::Letter,
            expanded: is_open,
            controls: "letter-dialog".to_string(),
            onclick: move |_| {
                flags.write().apply(SectionAction::Open(Section::Letter));
            },
            span { class: "btn-letter__icon", "\u{2709}" }
            span { class: "btn-letter__label", "{label}" }
        }
    }
}

/// Letter Modal
///
/// Overlay dialog showing the letter text. Renders nothing while closed.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     LetterModal { letter: album.letter.clone() }
/// }
/// ```
#[component]
pub fn LetterModal(letter: Letter) -> Element {
    let mut flags = use_section_flags();
    let is_open = use_section_open(Section::Letter);

    let mut close = move || {
        flags.write().apply(SectionAction::Close(Section::Letter));
    };

    if !is_open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "-1",
            onclick: move |_| close(),
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Escape {
                    close();
                }
            },
            onmounted: move |e: MountedEvent| async move {
                let _ = e.set_focus(true).await;
            },

            div {
                id: "letter-dialog",
                class: "letter",
                role: "dialog",
                "aria-modal": "true",
                "aria-labelledby": "letter-salutation",
                onclick: move |e| e.stop_propagation(),

                div { class: "letter__close",
                    CloseButton { onclick: move |_| close() }
                }

                h2 { id: "letter-salutation", class: "letter__salutation", "{letter.salutation}" }

                div { class: "letter__body",
                    for (index, paragraph) in letter.paragraphs.iter().enumerate() {
                        p { key: "{index}", "{paragraph}" }
                    }
                    p { class: "letter__signoff",
                        "{letter.closing}"
                        br {}
                        "{letter.signature}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scrapbook_core::{Album, AlbumPreset, SectionFlags};

    use super::*;

    #[component]
    fn LetterHarness(letter: Letter, flags: SectionFlags) -> Element {
        use_context_provider(|| Signal::new(flags));
        rsx! {
            LetterButton { label: letter.button_label.clone() }
            LetterModal { letter: letter.clone() }
        }
    }

    fn render(flags: SectionFlags) -> String {
        let letter = Album::preset(AlbumPreset::Dublin).unwrap().letter;
        let mut dom = VirtualDom::new_with_props(LetterHarness, LetterHarnessProps { letter, flags });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn closed_letter_renders_no_overlay() {
        let html = render(SectionFlags::new());
        assert!(!html.contains("modal-overlay"));
        assert!(!html.contains("Yours sincerely,"));
        assert!(html.contains(r#"aria-expanded="false""#));
    }

    #[test]
    fn opened_letter_renders_overlay() {
        let mut flags = SectionFlags::new();
        flags.apply(SectionAction::Open(Section::Letter));

        let html = render(flags);
        assert!(html.contains("modal-overlay"));
        assert!(html.contains(r#"role="dialog""#));
        assert!(html.contains("Dear Professor Philipp"));
        assert!(html.contains("Yours sincerely,"));
        assert!(html.contains(r#"aria-expanded="true""#));
    }

    #[test]
    fn closing_letter_removes_overlay() {
        let mut flags = SectionFlags::new();
        flags.apply(SectionAction::Open(Section::Letter));
        flags.apply(SectionAction::Close(Section::Letter));

        assert!(!render(flags).contains("modal-overlay"));
    }

    #[test]
    fn open_sections_leave_letter_closed() {
        let mut flags = SectionFlags::new();
        flags.toggle_vocabulary();
        flags.toggle_reflection();

        assert!(!render(flags).contains("modal-overlay"));
    }
}
