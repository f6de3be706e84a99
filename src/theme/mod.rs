//! Theme for the scrapbook page.

mod styles;

pub use styles::GLOBAL_STYLES;
