//! Collapsible Section Component
//!
//! Header button with an icon, title and chevron; the body below expands and
//! collapses with a 300ms transition. The body stays mounted so both
//! directions animate.

use dioxus::prelude::*;
use scrapbook_core::{Section, SectionHeading};
use scrapbook_ui::{Button, ButtonVariant, Card};

use crate::context::{use_section_flags, use_section_open};

/// Element ids for a section's header and body, derived from its title.
pub(crate) fn section_ids(heading: &SectionHeading) -> (String, String) {
    let anchor = heading.anchor();
    (format!("section-{anchor}"), format!("content-{anchor}"))
}

/// Collapsible section bound to one section flag
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CollapsibleSection {
///         section: Section::Activity,
///         heading: album.activity.heading.clone(),
///         ProseBody { paragraphs: album.activity.paragraphs.clone() }
///     }
/// }
/// ```
#[component]
pub fn CollapsibleSection(
    /// Which flag opens this section
    section: Section,
    heading: SectionHeading,
    children: Element,
) -> Element {
    let mut flags = use_section_flags();
    let is_open = use_section_open(section);
    let (header_id, content_id) = section_ids(&heading);
    let slug = section.slug();
    let hidden = (!is_open).to_string();

    let chevron_class = if is_open { "chevron chevron--open" } else { "chevron" };
    let body_class = if is_open {
        "collapsible__body collapsible__body--open"
    } else {
        "collapsible__body"
    };

    rsx! {
        section {
            class: "collapsible collapsible--{slug}",
            "aria-labelledby": "{header_id}",

            Button {
                variant: ButtonVariant::Section,
                expanded: is_open,
                controls: content_id.clone(),
                onclick: move |_| {
                    flags.write().toggle(section);
                },

                span { class: "collapsible__title", id: "{header_id}",
                    span { class: "collapsible__icon", "{heading.icon}" }
                    "{heading.title}"
                }
                span { class: "{chevron_class}", "\u{25BE}" }
            }

            div {
                id: "{content_id}",
                class: "{body_class}",
                "aria-hidden": "{hidden}",
                div { class: "collapsible__inner",
                    Card { class: "collapsible__card".to_string(), {children} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scrapbook_core::{SectionAction, SectionFlags};

    use super::*;

    #[component]
    fn VocabularyHarness(flags: SectionFlags) -> Element {
        use_context_provider(|| Signal::new(flags));
        let heading = SectionHeading {
            title: "Irish Vocabulary".to_string(),
            icon: "\u{1F4DA}".to_string(),
        };
        rsx! {
            CollapsibleSection { section: Section::Vocabulary, heading,
                p { "Craic - fun" }
            }
        }
    }

    fn render(flags: SectionFlags) -> String {
        let mut dom = VirtualDom::new_with_props(VocabularyHarness, VocabularyHarnessProps { flags });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn collapsed_body_is_hidden_but_mounted() {
        let html = render(SectionFlags::new());
        assert!(html.contains(r#"aria-hidden="true""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(!html.contains("collapsible__body--open"));
        assert!(html.contains("Craic - fun"));
    }

    #[test]
    fn toggled_body_is_expanded() {
        let mut flags = SectionFlags::new();
        flags.apply(SectionAction::Toggle(Section::Vocabulary));

        let html = render(flags);
        assert!(html.contains("collapsible__body collapsible__body--open"));
        assert!(html.contains(r#"aria-hidden="false""#));
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains("chevron--open"));
        assert!(html.contains(r#"aria-controls="content-irish-vocabulary""#));
    }

    #[test]
    fn other_flags_do_not_expand_section() {
        let mut flags = SectionFlags::new();
        flags.toggle_activity();
        flags.toggle_letter();

        let html = render(flags);
        assert!(!html.contains("collapsible__body--open"));
        assert!(html.contains(r#"aria-hidden="true""#));
    }

    #[test]
    fn ids_follow_title() {
        let heading = SectionHeading {
            title: "Trip Reflection".to_string(),
            icon: "\u{1F914}".to_string(),
        };
        let (header, content) = section_ids(&heading);
        assert_eq!(header, "section-trip-reflection");
        assert_eq!(content, "content-trip-reflection");
    }
}
