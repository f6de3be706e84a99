//! Reusable UI components
//!
//! Buttons and cards in the scrapbook style.

mod button;
mod card;

pub use button::*;
pub use card::*;
