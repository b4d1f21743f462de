//! Minimal wgpu init (no window). Verifies a device can be created and the scene pass builds.

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let presenter = gallery_host::GpuPresenter::headless(gallery_demos::GalleryConfig::default())?;
    let _ = presenter.scene_pass();
    println!("gallery minimal_wgpu: OK");
    Ok(())
}
