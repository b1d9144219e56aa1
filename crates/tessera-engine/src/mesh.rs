//! CPU-side frame data for the triangle demo.
//!
//! The renderer uploads these bytes as-is; layout changes here must be mirrored
//! in the vertex layout declared by the rendering backend.

use bytemuck::{Pod, Zeroable};

use crate::math::Color;

// ── vertex ────────────────────────────────────────────────────────────────

/// Position + packed color, 16 bytes.
///
/// Attribute layout:
/// - `position`: 3 × `f32`
/// - `abgr`: 4 × normalized `u8`, packed by [`Color::to_abgr8888`]
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub abgr: u32,
}

impl ColorVertex {
    #[inline]
    pub fn new(position: [f32; 3], color: Color) -> Self {
        Self { position, abgr: color.to_abgr8888() }
    }
}

pub const TRIANGLE_INDICES: [u16; 3] = [0, 1, 2];

/// Counter-clockwise triangle with cyan, magenta and yellow corners.
pub fn triangle_vertices() -> [ColorVertex; 3] {
    [
        ColorVertex::new([-0.5, -0.5, 0.0], Color::CYAN),
        ColorVertex::new([0.5, -0.5, 0.0], Color::MAGENTA),
        ColorVertex::new([0.0, 0.5, 0.0], Color::YELLOW),
    ]
}

// ── frame setup ───────────────────────────────────────────────────────────

/// Everything the bootstrap needs before entering its render loop.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSetup {
    pub width: u32,
    pub height: u32,
    /// View clear color, `0xRRGGBBAA`.
    pub clear_rgba: u32,
    pub vertices: [ColorVertex; 3],
    pub indices: [u16; 3],
}

impl FrameSetup {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let setup = Self {
            width,
            height,
            clear_rgba: background.to_rgba8888(),
            vertices: triangle_vertices(),
            indices: TRIANGLE_INDICES,
        };
        log::debug!(
            "frame setup {}x{} clear=0x{:08X} ({} vertices)",
            width,
            height,
            setup.clear_rgba,
            setup.vertices.len()
        );
        setup
    }

    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl Default for FrameSetup {
    fn default() -> Self {
        Self::new(1280, 720, Color::GRAY_80)
    }
}
