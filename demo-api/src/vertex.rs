//! Vertex record shared by every vertex-producing component.
//!
//! The layout is fixed: position (3 x f32), color (4 x f32), texture coordinates
//! (2 x f32), tightly packed in that order. Pipelines read
//! [`Vertex::num_components_per_attribute`] once at setup to derive stride and offsets.

use bytemuck::{Pod, Zeroable};

/// One vertex: position, RGBA color and UV.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    pub const POSITION_COMPONENTS: usize = 3;
    pub const COLOR_COMPONENTS: usize = 4;
    pub const TEX_COORD_COMPONENTS: usize = 2;

    pub const ATTRIBUTE_COUNT: usize = 3;
    pub const COMPONENTS_PER_VERTEX: usize =
        Self::POSITION_COMPONENTS + Self::COLOR_COMPONENTS + Self::TEX_COORD_COMPONENTS;
    /// Bytes per vertex; every component is an f32.
    pub const STRIDE: usize = Self::COMPONENTS_PER_VERTEX * std::mem::size_of::<f32>();

    pub const fn new(position: [f32; 3], color: [f32; 4], tex_coords: [f32; 2]) -> Self {
        Self { position, color, tex_coords }
    }

    /// Scalar components per attribute, in attribute order: position, color, uv.
    pub const fn num_components_per_attribute() -> [usize; Self::ATTRIBUTE_COUNT] {
        [Self::POSITION_COMPONENTS, Self::COLOR_COMPONENTS, Self::TEX_COORD_COMPONENTS]
    }

    /// Byte offset of each attribute within a vertex.
    pub fn attribute_offsets() -> [usize; Self::ATTRIBUTE_COUNT] {
        let mut offsets = [0usize; Self::ATTRIBUTE_COUNT];
        let mut offset = 0;
        for (slot, count) in offsets.iter_mut().zip(Self::num_components_per_attribute()) {
            *slot = offset;
            offset += count * std::mem::size_of::<f32>();
        }
        offsets
    }

    /// View a vertex slice as raw bytes for buffer upload.
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::new([0.0; 3], [1.0; 4], [0.0; 2])
    }
}
