//! HTML templates and styling for the playground.
//!
//! ## Module Structure
//!
//! - `styles` - CSS for the page
//! - `page` - the Monaco editor page and its script

mod page;
mod styles;

pub use page::render_page;
pub use styles::STYLE;
