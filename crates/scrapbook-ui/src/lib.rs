//! Scrapbook UI Components
//!
//! Dioxus primitives shared by the scrapbook pages.
//!
//! ## Look
//!
//! Soft emerald-to-teal paper on a light background:
//! - **Emerald (#047857)**: headings, primary actions
//! - **Teal (#0d9488)**: secondary text, meanings
//! - **White cards** with rounded corners and a lift on hover
//!
//! The CSS classes these components emit are defined by the application's
//! global stylesheet.

pub mod components;

pub use components::*;
