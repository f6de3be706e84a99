//! Card Component
//!
//! White rounded panel used for photo frames and section bodies.

use dioxus::prelude::*;

/// Padded card surface
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Card { hoverable: true,
///         img { src: "/School.jpg" }
///     }
/// }
/// ```
#[component]
pub fn Card(
    children: Element,
    /// Scale up and deepen the shadow on hover
    #[props(default = false)]
    hoverable: bool,
    /// Optional additional CSS classes
    #[props(default)]
    class: Option<String>,
) -> Element {
    let mut full_class = String::from("card");
    if hoverable {
        full_class.push_str(" card--hoverable");
    }
    if let Some(extra) = class.as_deref().filter(|c| !c.is_empty()) {
        full_class.push(' ');
        full_class.push_str(extra);
    }

    rsx! {
        div { class: "{full_class}",
            div { class: "card__content", {children} }
        }
    }
}
