//! Headless host loop: runs every registered demo for a few frames through DemoHost and,
//! when a GPU is available, draws each frame offscreen.
//! Run: cargo run -p debug --bin demo_loop

use anyhow::Context as _;
use demo_api::UiData;
use gallery_host::{DemoHost, GpuPresenter, HostConfig};

const FRAMES_PER_DEMO: u64 = 3;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = HostConfig::from_env();
    let viewport_size = config.viewport_size;
    let mut gpu = match GpuPresenter::headless(config.gallery.clone()) {
        Ok(gpu) => Some(gpu),
        Err(e) => {
            log::warn!("no GPU, running demos without drawing: {}", e);
            None
        }
    };
    let mut host = DemoHost::new(config)?;

    let names: Vec<String> = host.demo_names().into_iter().map(str::to_string).collect();
    for name in &names {
        host.select(name).with_context(|| format!("selecting '{}'", name))?;
        let mut ui = UiData { viewport_size, ..UiData::default() };
        for _ in 0..FRAMES_PER_DEMO {
            let output = host.run_frame(&ui, None)?;
            if let Some(gpu) = gpu.as_mut() {
                gpu.render_to_texture(&output.draw_list, viewport_size)?;
            }
            println!(
                "{:<14} frame {}: {} batches, {} vertices, {} widgets",
                output.demo,
                ui.frame_index,
                output.draw_list.batches.len(),
                output.draw_list.vertex_count(),
                output.widgets.len()
            );
            ui = ui.next_frame(1.0 / 60.0);
        }
    }
    if let Some(gpu) = gpu.as_ref() {
        gpu.wait_idle();
    }
    println!("gallery demo_loop: {} demos OK", names.len());
    Ok(())
}
