//! wgpu vertex layout derived from per-attribute component counts.
//!
//! Nothing here knows the field names of `Vertex`: stride, offsets and formats all come
//! from the component counts, so any f32-only vertex record binds the same way.

use demo_api::Vertex;

/// wgpu format for an attribute made of `components` f32 scalars.
pub fn float_format(components: usize) -> Option<wgpu::VertexFormat> {
    match components {
        1 => Some(wgpu::VertexFormat::Float32),
        2 => Some(wgpu::VertexFormat::Float32x2),
        3 => Some(wgpu::VertexFormat::Float32x3),
        4 => Some(wgpu::VertexFormat::Float32x4),
        _ => None,
    }
}

/// Attributes at consecutive shader locations starting at 0, tightly packed.
pub fn attributes_for(components_per_attribute: &[usize]) -> Result<Vec<wgpu::VertexAttribute>, String> {
    let mut offset: wgpu::BufferAddress = 0;
    let mut attributes = Vec::with_capacity(components_per_attribute.len());
    for (location, &components) in components_per_attribute.iter().enumerate() {
        let format = float_format(components)
            .ok_or_else(|| format!("attribute {}: unsupported component count {}", location, components))?;
        attributes.push(wgpu::VertexAttribute { format, offset, shader_location: location as u32 });
        offset += format.size();
    }
    Ok(attributes)
}

/// Stride implied by a component list.
pub fn stride_for(components_per_attribute: &[usize]) -> wgpu::BufferAddress {
    (components_per_attribute.iter().sum::<usize>() * std::mem::size_of::<f32>()) as wgpu::BufferAddress
}

/// Attributes for the gallery's `Vertex`.
pub fn vertex_attributes() -> Result<Vec<wgpu::VertexAttribute>, String> {
    attributes_for(&Vertex::num_components_per_attribute())
}

/// Buffer layout for `Vertex` over the given attributes (see [`vertex_attributes`]).
pub fn vertex_buffer_layout(attributes: &[wgpu::VertexAttribute]) -> wgpu::VertexBufferLayout<'_> {
    wgpu::VertexBufferLayout {
        array_stride: stride_for(&Vertex::num_components_per_attribute()),
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_attributes_match_record() {
        let attributes = vertex_attributes().unwrap();
        assert_eq!(attributes.len(), 3);
        let formats: Vec<_> = attributes.iter().map(|a| a.format).collect();
        assert_eq!(
            formats,
            vec![wgpu::VertexFormat::Float32x3, wgpu::VertexFormat::Float32x4, wgpu::VertexFormat::Float32x2]
        );
        let offsets: Vec<_> = attributes.iter().map(|a| a.offset as usize).collect();
        assert_eq!(offsets, Vertex::attribute_offsets().to_vec());
        let locations: Vec<_> = attributes.iter().map(|a| a.shader_location).collect();
        assert_eq!(locations, vec![0, 1, 2]);
    }

    #[test]
    fn layout_stride_matches_record_size() {
        let attributes = vertex_attributes().unwrap();
        let layout = vertex_buffer_layout(&attributes);
        assert_eq!(layout.array_stride as usize, std::mem::size_of::<Vertex>());
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
    }

    #[test]
    fn unsupported_component_count() {
        assert!(attributes_for(&[3, 5]).is_err());
        assert!(attributes_for(&[]).unwrap().is_empty());
        assert_eq!(stride_for(&[2, 2]), 16);
    }
}
