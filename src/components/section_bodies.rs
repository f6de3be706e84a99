//! Section bodies: the word list and plain prose.

use dioxus::prelude::*;
use scrapbook_core::VocabularyEntry;

/// Delay between successive vocabulary rows sliding in.
const STAGGER_MS: u64 = 100;

pub(crate) fn stagger_delay_ms(index: usize) -> u64 {
    index as u64 * STAGGER_MS
}

fn row_style(index: usize) -> String {
    format!("animation-delay: {}ms;", stagger_delay_ms(index))
}

/// Word / meaning rows, each sliding in slightly after the previous one.
#[component]
pub fn VocabularyList(entries: Vec<VocabularyEntry>) -> Element {
    rsx! {
        ul { class: "vocabulary",
            for (index, entry) in entries.iter().enumerate() {
                li {
                    key: "{index}",
                    class: "vocabulary__row",
                    style: row_style(index),
                    span { class: "vocabulary__word", "{entry.word}" }
                    span { class: "vocabulary__meaning", "{entry.meaning}" }
                }
            }
        }
    }
}

#[component]
pub fn ProseBody(paragraphs: Vec<String>) -> Element {
    rsx! {
        div { class: "prose",
            for (index, paragraph) in paragraphs.iter().enumerate() {
                p { key: "{index}", class: "prose__paragraph", "{paragraph}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_staggered() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 100);
        assert_eq!(stagger_delay_ms(4), 400);
        assert_eq!(row_style(2), "animation-delay: 200ms;");
    }
}
