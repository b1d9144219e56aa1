//! Immutable value types for percentages and colors.
//!
//! - `Proportion`: finite percent in `[0, 100]`
//! - `Color`: four `Proportion` channels, packed to `u32` for GPU APIs
//!
//! Everything here is a pure `Copy` value; shared instances are `const` items.

mod color;
mod error;
mod finite;
mod proportion;

pub use color::Color;
pub use error::NumberError;
pub use proportion::{Percent, Proportion};
