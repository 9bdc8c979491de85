/// Pre-defined canvas sizes
pub mod canvas;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Wrapping text to a width and paginating the wrapped lines
pub mod layout;

mod page;
pub use page::*;

mod post;
pub use post::*;

mod rect;
pub use rect::*;

mod settings;
pub use settings::*;

mod units;
pub use units::*;
