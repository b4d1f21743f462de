//! Window presentation: draws gallery frames to a window surface given raw handles.

use raw_window_handle::{HasDisplayHandle, HasWindowHandle, RawDisplayHandle, RawWindowHandle};
use wgpu::SurfaceTargetUnsafe;

use gallery_demos::{DrawList, GalleryConfig};

use crate::error::{HostError, HostResult};
use crate::gpu::{request_device, GpuPresenter};

/// Owns the wgpu Instance and a `GpuPresenter` configured for the window's surface format.
/// The surface is recreated each frame from the raw handles, so the host only has to keep
/// the window alive.
pub struct WindowPresenter {
    instance: wgpu::Instance,
    presenter: GpuPresenter,
}

impl WindowPresenter {
    pub fn from_window(
        window: &(impl HasWindowHandle + HasDisplayHandle),
        config: GalleryConfig,
    ) -> HostResult<Self> {
        let wh = window.window_handle().map_err(|e| HostError::Surface(e.to_string()))?;
        let dh = window.display_handle().map_err(|e| HostError::Surface(e.to_string()))?;
        pollster::block_on(Self::from_raw_handles_async(wh.as_raw(), dh.as_raw(), config))
    }

    async fn from_raw_handles_async(
        raw_window_handle: RawWindowHandle,
        raw_display_handle: RawDisplayHandle,
        mut config: GalleryConfig,
    ) -> HostResult<Self> {
        let instance = wgpu::Instance::default();
        let surface = Self::create_surface(&instance, raw_window_handle, raw_display_handle)?;
        let (adapter, device, queue) = request_device(Some((&instance, &surface))).await?;
        let caps = surface.get_capabilities(&adapter);
        if let Some(&format) = caps.formats.first() {
            config.output_format = format;
        }
        log::info!("window surface format: {:?}", config.output_format);
        drop(surface);
        let presenter = GpuPresenter::new(device, queue, config)?;
        Ok(Self { instance, presenter })
    }

    fn create_surface(
        instance: &wgpu::Instance,
        raw_window_handle: RawWindowHandle,
        raw_display_handle: RawDisplayHandle,
    ) -> HostResult<wgpu::Surface<'static>> {
        let target = SurfaceTargetUnsafe::RawHandle { raw_window_handle, raw_display_handle };
        // SAFETY: the caller keeps the window alive while the surface exists; surfaces are
        // dropped before returning from every method here.
        unsafe { instance.create_surface_unsafe(target).map_err(|e| HostError::Surface(e.to_string())) }
    }

    fn surface_config(format: wgpu::TextureFormat, width: u32, height: u32) -> wgpu::SurfaceConfiguration {
        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Opaque,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    pub fn presenter(&self) -> &GpuPresenter {
        &self.presenter
    }

    /// Draw one frame and present it to the window behind the given handles.
    pub fn render_to_window(
        &mut self,
        draw_list: &DrawList,
        viewport_size: (u32, u32),
        raw_window_handle: RawWindowHandle,
        raw_display_handle: RawDisplayHandle,
    ) -> HostResult<()> {
        let surface = Self::create_surface(&self.instance, raw_window_handle, raw_display_handle)?;
        let (width, height) = viewport_size;
        let format = self.presenter.config().output_format;
        let config = Self::surface_config(format, width.max(1), height.max(1));
        surface.configure(self.presenter.device(), &config);

        let frame = match surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Outdated) | Err(wgpu::SurfaceError::Lost) => {
                log::warn!("surface outdated, reconfiguring");
                surface.configure(self.presenter.device(), &config);
                surface.get_current_texture().map_err(|e| HostError::Surface(e.to_string()))?
            }
            Err(wgpu::SurfaceError::Timeout) => {
                return Err(HostError::Surface("get_current_texture timeout".to_string()))
            }
            Err(e) => return Err(HostError::Surface(e.to_string())),
        };
        let view = frame.texture.create_view(&Default::default());
        self.presenter.render_to_view(draw_list, Some((&view, (config.width, config.height))))?;
        frame.present();
        Ok(())
    }
}
