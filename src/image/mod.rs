//! Image processing utilities.
//!
//! # Modules
//!
//! - [`background`]: Background removal (top-left color keying with soft edges)

pub mod background;
