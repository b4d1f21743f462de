//! Demo host: owns the registry and the active demo, and drives one frame at a time.

use demo_api::{DemoInstance, DemoRegistry, UiData};
use gallery_demos::{new_scene_handle, register_builtin_demos, DrawList, SceneHandle, Widget};

use crate::config::{FrameOrder, HostConfig};
use crate::error::{HostError, HostResult};

/// What the active demo produced in one frame.
#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub demo: String,
    pub draw_list: DrawList,
    pub widgets: Vec<Widget>,
    pub uses_default_scene: bool,
}

pub struct DemoHost {
    config: HostConfig,
    registry: DemoRegistry,
    scene: SceneHandle,
    active: Option<DemoInstance>,
}

impl DemoHost {
    /// Host with the built-in gallery registered. Selects `config.initial_demo` if set;
    /// an unknown or failing initial demo is logged and the host starts idle.
    pub fn new(config: HostConfig) -> HostResult<Self> {
        let scene = new_scene_handle();
        let mut registry = DemoRegistry::new();
        register_builtin_demos(&mut registry, &scene, &config.gallery)?;
        let mut host = Self::with_registry(config, registry, scene);
        if let Some(name) = host.config.initial_demo.clone() {
            if let Err(e) = host.select(&name) {
                log::warn!("initial demo '{}' not started: {}", name, e);
            }
        }
        Ok(host)
    }

    /// Host over an existing registry whose factories record into `scene`.
    pub fn with_registry(config: HostConfig, registry: DemoRegistry, scene: SceneHandle) -> Self {
        log::info!("demo host: {} demos registered", registry.len());
        Self { config, registry, scene, active: None }
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn registry(&self) -> &DemoRegistry {
        &self.registry
    }

    pub fn scene(&self) -> &SceneHandle {
        &self.scene
    }

    /// Menu entries in registration order.
    pub fn demo_names(&self) -> Vec<&str> {
        self.registry.names().collect()
    }

    pub fn active(&self) -> Option<&DemoInstance> {
        self.active.as_ref()
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active.as_ref().map(|d| d.name())
    }

    /// Create and initialize the named demo, replacing the active one. On failure the
    /// previous demo stays active.
    pub fn select(&mut self, name: &str) -> HostResult<()> {
        let mut instance = DemoInstance::new(name, self.registry.create(name)?);
        instance.init()?;
        self.scene.borrow_mut().panel.clear_edits();
        if let Some(previous) = self.active.replace(instance) {
            log::info!("demo '{}' replaced by '{}' after {} frames", previous.name(), name, previous.frames_rendered());
        } else {
            log::info!("demo '{}' selected", name);
        }
        Ok(())
    }

    /// Select the demo after the active one in menu order, wrapping around.
    pub fn select_next(&mut self) -> HostResult<()> {
        let names: Vec<String> = self.registry.names().map(str::to_string).collect();
        if names.is_empty() {
            return Err(HostError::Demo(demo_api::DemoError::NoActiveDemo));
        }
        let next = match self.active_name().and_then(|n| names.iter().position(|x| x == n)) {
            Some(i) => (i + 1) % names.len(),
            None => 0,
        };
        self.select(&names[next])
    }

    /// Drop the active demo.
    pub fn deselect(&mut self) {
        if let Some(previous) = self.active.take() {
            self.scene.borrow_mut().panel.clear_edits();
            log::info!("demo '{}' closed", previous.name());
        }
    }

    /// Queue a UI edit for the active demo's panel.
    pub fn submit_edit(&mut self, edit: Widget) {
        self.scene.borrow_mut().panel.submit_edit(edit);
    }

    /// Run the active demo's per-frame hooks in the configured order.
    ///
    /// `default_viewport` is `Some` when `ui` describes a secondary viewport.
    pub fn run_frame(&mut self, ui: &UiData, default_viewport: Option<&UiData>) -> HostResult<FrameOutput> {
        let demo = self.active.as_mut().ok_or(demo_api::DemoError::NoActiveDemo)?;
        {
            let mut scene = self.scene.borrow_mut();
            scene.begin_frame();
            scene.panel.title = demo.name().to_string();
        }
        match self.config.frame_order {
            FrameOrder::RenderThenUi => {
                demo.render(ui, default_viewport)?;
                demo.imgui_render()?;
            }
            FrameOrder::UiThenRender => {
                demo.imgui_render()?;
                demo.render(ui, default_viewport)?;
            }
        }
        let mut scene = self.scene.borrow_mut();
        let output = FrameOutput {
            demo: demo.name().to_string(),
            draw_list: std::mem::take(&mut scene.draw_list),
            widgets: scene.panel.widgets.clone(),
            uses_default_scene: demo.uses_default_scene(),
        };
        log::debug!(
            "frame {} of '{}': {} batches, {} widgets",
            ui.frame_index,
            output.demo,
            output.draw_list.batches.len(),
            output.widgets.len()
        );
        Ok(output)
    }
}
