//! Gallery configuration: output formats, clear color, demo defaults.

/// Gallery demos and scene pass configuration.
#[derive(Clone, Debug)]
pub struct GalleryConfig {
    /// Format of the view the default scene is drawn into (e.g. swapchain format).
    pub output_format: wgpu::TextureFormat,
    /// Format of demo-owned offscreen targets.
    pub offscreen_format: wgpu::TextureFormat,
    /// Clear color used when no demo sets one this frame.
    pub default_clear_color: [f32; 4],
    /// Initial rotation speed of the Triangle demo, radians per second.
    pub triangle_speed: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            output_format: wgpu::TextureFormat::Rgba8Unorm,
            offscreen_format: wgpu::TextureFormat::Rgba8Unorm,
            default_clear_color: [0.1, 0.1, 0.12, 1.0],
            triangle_speed: 1.0,
        }
    }
}
