//! Clear Color: no geometry, only picks the frame's clear color.

use demo_api::{Demo, DemoFactory, DemoResult, UiData};

use crate::config::GalleryConfig;
use crate::scene::SceneHandle;

pub struct ClearColorFactory {
    scene: SceneHandle,
    initial: [f32; 4],
}

impl ClearColorFactory {
    pub const NAME: &'static str = "Clear Color";

    pub fn new(scene: SceneHandle, config: &GalleryConfig) -> Self {
        Self { scene, initial: config.default_clear_color }
    }
}

impl DemoFactory for ClearColorFactory {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn create_demo(&self) -> Box<dyn Demo> {
        Box::new(ClearColorDemo { scene: self.scene.clone(), color: self.initial, initialized: false })
    }
}

pub struct ClearColorDemo {
    scene: SceneHandle,
    color: [f32; 4],
    initialized: bool,
}

impl Demo for ClearColorDemo {
    fn on_init(&mut self) -> DemoResult<()> {
        debug_assert!(!self.initialized, "Clear Color initialized twice");
        self.initialized = true;
        Ok(())
    }

    fn on_render(&mut self, _ui: &UiData, _default_viewport: Option<&UiData>) {
        debug_assert!(self.initialized, "Clear Color rendered before init");
        self.scene.borrow_mut().draw_list.clear_color = Some(self.color);
    }

    fn on_imgui_render(&mut self) {
        let mut scene = self.scene.borrow_mut();
        self.color = scene.panel.color("Clear color", self.color);
    }

    fn uses_default_scene(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::Widget;
    use crate::scene::new_scene_handle;

    #[test]
    fn sets_clear_color_without_geometry() {
        let scene = new_scene_handle();
        let config = GalleryConfig::default();
        let factory = ClearColorFactory::new(scene.clone(), &config);
        let mut demo = factory.create_demo();
        demo.on_init().unwrap();
        demo.on_render(&UiData::default(), None);
        assert_eq!(scene.borrow().draw_list.clear_color, Some(config.default_clear_color));
        assert!(scene.borrow().draw_list.batches.is_empty());

        scene.borrow_mut().panel.submit_edit(Widget::Color { label: "Clear color".into(), rgba: [0.0, 0.5, 1.0, 1.0] });
        demo.on_imgui_render();
        demo.on_render(&UiData::default(), None);
        assert_eq!(scene.borrow().draw_list.clear_color, Some([0.0, 0.5, 1.0, 1.0]));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Clear Color rendered before init")]
    fn render_before_init_asserts() {
        let scene = new_scene_handle();
        let mut demo = ClearColorFactory::new(scene, &GalleryConfig::default()).create_demo();
        demo.on_render(&UiData::default(), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Clear Color initialized twice")]
    fn double_init_asserts() {
        let scene = new_scene_handle();
        let mut demo = ClearColorFactory::new(scene, &GalleryConfig::default()).create_demo();
        demo.on_init().unwrap();
        let _ = demo.on_init();
    }
}
