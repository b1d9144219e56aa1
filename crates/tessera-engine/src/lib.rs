//! Tessera engine crate.
//!
//! Color and percentage value types, plus the frame data the triangle demo
//! hands to its renderer.

pub mod logging;
pub mod math;
pub mod mesh;
