//! Page components for the scrapbook.

mod scrapbook;

pub use scrapbook::Scrapbook;
