//! Triangle: one RGB triangle spinning in the default scene.

use demo_api::{Demo, DemoFactory, DemoResult, UiData, Vertex};

use crate::config::GalleryConfig;
use crate::scene::{rotation_z, DrawBatch, RenderTarget, SceneHandle};

const MAX_SPEED: f32 = 10.0;

pub struct TriangleFactory {
    scene: SceneHandle,
    speed: f32,
}

impl TriangleFactory {
    pub const NAME: &'static str = "Triangle";

    pub fn new(scene: SceneHandle, config: &GalleryConfig) -> Self {
        Self { scene, speed: config.triangle_speed }
    }
}

impl DemoFactory for TriangleFactory {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn create_demo(&self) -> Box<dyn Demo> {
        Box::new(TriangleDemo::new(self.scene.clone(), self.speed))
    }
}

pub struct TriangleDemo {
    scene: SceneHandle,
    vertices: Vec<Vertex>,
    initialized: bool,
    angle: f32,
    /// Translation in NDC; follows the cursor while the left button is held.
    offset: [f32; 2],
    speed: f32,
    paused: bool,
}

impl TriangleDemo {
    pub fn new(scene: SceneHandle, speed: f32) -> Self {
        Self { scene, vertices: Vec::new(), initialized: false, angle: 0.0, offset: [0.0; 2], speed, paused: false }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn offset(&self) -> [f32; 2] {
        self.offset
    }
}

impl Demo for TriangleDemo {
    fn on_init(&mut self) -> DemoResult<()> {
        debug_assert!(!self.initialized, "Triangle initialized twice");
        // uv stays inside [0, 1) so the shader renders it flat
        self.vertices = vec![
            Vertex::new([0.0, 0.5, 0.0], [1.0, 0.0, 0.0, 1.0], [0.5, 0.0]),
            Vertex::new([-0.5, -0.5, 0.0], [0.0, 1.0, 0.0, 1.0], [0.0, 0.99]),
            Vertex::new([0.5, -0.5, 0.0], [0.0, 0.0, 1.0, 1.0], [0.99, 0.99]),
        ];
        self.initialized = true;
        Ok(())
    }

    fn on_render(&mut self, ui: &UiData, default_viewport: Option<&UiData>) {
        debug_assert!(self.initialized, "Triangle rendered before init");
        if !self.paused {
            self.angle = (self.angle + self.speed * ui.delta_time) % std::f32::consts::TAU;
        }
        if ui.mouse.left_down {
            if let Some(ndc) = ui.mouse_ndc() {
                self.offset = ndc;
            }
        }
        let mut transform = rotation_z(self.angle, ui.aspect_ratio());
        transform[12] = self.offset[0];
        transform[13] = self.offset[1];
        let batch = DrawBatch {
            target: RenderTarget::for_frame(self.uses_default_scene(), ui, default_viewport),
            vertices: self.vertices.clone(),
            indices: vec![0, 1, 2],
            transform,
        };
        self.scene.borrow_mut().draw_list.push(batch);
    }

    fn on_imgui_render(&mut self) {
        let mut scene = self.scene.borrow_mut();
        let panel = &mut scene.panel;
        self.speed = panel.slider("Speed", self.speed, 0.0, MAX_SPEED);
        self.paused = panel.checkbox("Paused", self.paused);
        panel.text(format!("Angle: {:.2} rad", self.angle));
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
    fn triangle_scenario() {
        let scene = new_scene_handle();
        let factory = TriangleFactory::new(scene.clone(), &GalleryConfig::default());
        assert_eq!(factory.name(), "Triangle");

        let mut a = factory.create_demo();
        a.on_init().unwrap();
        let frame = UiData::default();
        a.on_render(&frame, None);
        {
            let scene = scene.borrow();
            assert_eq!(scene.draw_list.batches.len(), 1);
            let batch = &scene.draw_list.batches[0];
            assert_eq!(batch.target, RenderTarget::DefaultScene);
            assert_eq!(batch.vertices.len(), 3);
            assert_eq!(batch.indices, vec![0, 1, 2]);
        }

        let b = factory.create_demo();
        assert!(!std::ptr::addr_eq(a.as_ref(), b.as_ref()));
        assert_eq!(factory.name(), "Triangle");
    }

    #[test]
    fn secondary_viewport_renders_offscreen() {
        let scene = new_scene_handle();
        let mut demo = TriangleDemo::new(scene.clone(), 1.0);
        assert!(demo.uses_default_scene());
        demo.on_init().unwrap();
        let secondary = UiData { viewport_size: (256, 128), ..UiData::default() };
        demo.on_render(&secondary, Some(&UiData::default()));
        assert!(demo.uses_default_scene());
        let scene = scene.borrow();
        assert_eq!(scene.draw_list.batches[0].target, RenderTarget::Offscreen { width: 256, height: 128 });
    }

    #[test]
    fn dragging_moves_triangle_to_cursor() {
        let scene = new_scene_handle();
        let mut demo = TriangleDemo::new(scene.clone(), 0.0);
        demo.on_init().unwrap();
        let mut ui = UiData { viewport_size: (200, 100), ..UiData::default() };
        ui.mouse.position = Some((150.0, 25.0));
        demo.on_render(&ui, None);
        assert_eq!(demo.offset(), [0.0, 0.0]);

        ui.mouse.left_down = true;
        demo.on_render(&ui, None);
        assert_eq!(demo.offset(), [0.5, 0.5]);

        ui.mouse = Default::default();
        demo.on_render(&ui, None);
        assert_eq!(demo.offset(), [0.5, 0.5]);
        let transform = scene.borrow().draw_list.batches[2].transform;
        assert_eq!((transform[12], transform[13]), (0.5, 0.5));
    }

    #[test]
    fn paused_triangle_keeps_angle() {
        let scene = new_scene_handle();
        let mut demo = TriangleDemo::new(scene.clone(), 2.0);
        demo.on_init().unwrap();
        let ui = UiData { delta_time: 0.5, ..UiData::default() };
        demo.on_render(&ui, None);
        assert!((demo.angle() - 1.0).abs() < 1e-6);

        scene.borrow_mut().panel.submit_edit(Widget::Checkbox { label: "Paused".into(), value: true });
        demo.on_imgui_render();
        demo.on_render(&ui, None);
        assert!((demo.angle() - 1.0).abs() < 1e-6);
        assert!(matches!(scene.borrow().panel.find("Paused"), Some(Widget::Checkbox { value: true, .. })));
    }
}
