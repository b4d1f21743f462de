//! Lifecycle guard around an owned demo.
//!
//! Demos themselves trust the host to call them in order. `DemoInstance` checks that
//! order instead: init once, render only after a successful init.

use crate::{Demo, DemoError, DemoResult, UiData};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoState {
    /// Created by its factory, `on_init` not yet called.
    Created,
    /// Initialized; render calls are forwarded.
    Ready,
    /// `on_init` returned an error. The demo is never rendered.
    Failed,
}

pub struct DemoInstance {
    name: String,
    demo: Box<dyn Demo>,
    state: DemoState,
    frames_rendered: u64,
}

impl DemoInstance {
    pub fn new(name: impl Into<String>, demo: Box<dyn Demo>) -> Self {
        Self { name: name.into(), demo, state: DemoState::Created, frames_rendered: 0 }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> DemoState {
        self.state
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn uses_default_scene(&self) -> bool {
        self.demo.uses_default_scene()
    }

    /// Run `on_init`. Only the first call reaches the demo.
    pub fn init(&mut self) -> DemoResult<()> {
        if self.state != DemoState::Created {
            return Err(DemoError::AlreadyInitialized(self.name.clone()));
        }
        match self.demo.on_init() {
            Ok(()) => {
                log::info!("demo '{}' initialized", self.name);
                self.state = DemoState::Ready;
                Ok(())
            }
            Err(e) => {
                log::warn!("demo '{}' failed to initialize: {}", self.name, e);
                self.state = DemoState::Failed;
                Err(e)
            }
        }
    }

    pub fn render(&mut self, ui: &UiData, default_viewport: Option<&UiData>) -> DemoResult<()> {
        self.ensure_ready()?;
        self.demo.on_render(ui, default_viewport);
        self.frames_rendered += 1;
        Ok(())
    }

    pub fn imgui_render(&mut self) -> DemoResult<()> {
        self.ensure_ready()?;
        self.demo.on_imgui_render();
        Ok(())
    }

    fn ensure_ready(&self) -> DemoResult<()> {
        match self.state {
            DemoState::Ready => Ok(()),
            DemoState::Created | DemoState::Failed => Err(DemoError::NotInitialized(self.name.clone())),
        }
    }
}

impl std::fmt::Debug for DemoInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoInstance")
            .field("name", &self.name)
            .field("state", &self.state)
            .field("frames_rendered", &self.frames_rendered)
            .finish_non_exhaustive()
    }
}
