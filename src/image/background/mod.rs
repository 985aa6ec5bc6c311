//! Remove a solid background from images.
//!
//! The top-left pixel is taken as the background color. Every pixel is bucketed
//! by its RGB distance to it: near pixels become fully transparent, pixels in
//! the fade band keep their color with a proportional alpha, and the rest are
//! left as they are.

mod classify;
mod color;
mod process;

pub use process::remove_background;
