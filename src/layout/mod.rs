//! Text layout: wrapping paragraphs to a width and packing the lines into pages.
//!
//! Layout runs in two stages:
//!
//! - [`wrap`](crate::layout::wrap) - greedy word wrapping to a pixel width, closing lines early
//!   at sentence ends once they are mostly full
//! - [`Paginator`](crate::layout::Paginator) - packs wrapped lines into pages of fixed line
//!   capacity, moving a full page's trailing lines onto the next page when that lets the page
//!   end at a sentence or clause
//!
//! Widths come from a [`Measure`](crate::layout::Measure), which the rendering side supplies
//! configured with the font it will draw with.
//!
//! # Example
//!
//! ```
//! use textpages::layout::{paginate, MonospaceMeasure};
//! use textpages::{canvas, Settings};
//!
//! let mut settings = Settings::for_canvas(canvas::PORTRAIT);
//! settings.has_title(true);
//!
//! let text = "The first paragraph.\n\nThe second, and last, paragraph.";
//! let pages = paginate(text, &settings, &MonospaceMeasure::new(22)).expect("fits");
//!
//! for (i, page) in pages.iter().enumerate() {
//!     for placed in page.placements(&settings, i) {
//!         println!("{:?} at ({}, {})", placed.line.as_str(), placed.x, placed.y);
//!     }
//! }
//! ```

mod measure;
mod paginate;
mod wrap;

pub use measure::*;
pub use paginate::*;
pub use wrap::*;
