//! Textured Quad: a unit quad in its own target, uv scaled by a tiling factor so the
//! scene shader draws a checkerboard.

use demo_api::{Demo, DemoFactory, DemoResult, UiData, Vertex};

use crate::scene::{rotation_z, DrawBatch, RenderTarget, SceneHandle};

const CORNERS: [([f32; 3], [f32; 2]); 4] = [
    ([-0.5, -0.5, 0.0], [0.0, 1.0]),
    ([0.5, -0.5, 0.0], [1.0, 1.0]),
    ([0.5, 0.5, 0.0], [1.0, 0.0]),
    ([-0.5, 0.5, 0.0], [0.0, 0.0]),
];
const INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

pub struct QuadFactory {
    scene: SceneHandle,
}

impl QuadFactory {
    pub const NAME: &'static str = "Textured Quad";

    pub fn new(scene: SceneHandle) -> Self {
        Self { scene }
    }
}

impl DemoFactory for QuadFactory {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn create_demo(&self) -> Box<dyn Demo> {
        Box::new(QuadDemo::new(self.scene.clone()))
    }
}

pub struct QuadDemo {
    scene: SceneHandle,
    initialized: bool,
    tiling: f32,
    tint: [f32; 4],
}

impl QuadDemo {
    pub fn new(scene: SceneHandle) -> Self {
        Self { scene, initialized: false, tiling: 4.0, tint: [1.0, 0.8, 0.3, 1.0] }
    }

    fn vertices(&self) -> Vec<Vertex> {
        CORNERS
            .iter()
            .map(|&(position, uv)| Vertex::new(position, self.tint, [uv[0] * self.tiling, uv[1] * self.tiling]))
            .collect()
    }
}

impl Demo for QuadDemo {
    fn on_init(&mut self) -> DemoResult<()> {
        debug_assert!(!self.initialized, "Textured Quad initialized twice");
        self.initialized = true;
        Ok(())
    }

    fn on_render(&mut self, ui: &UiData, default_viewport: Option<&UiData>) {
        debug_assert!(self.initialized, "Textured Quad rendered before init");
        let batch = DrawBatch {
            target: RenderTarget::for_frame(self.uses_default_scene(), ui, default_viewport),
            vertices: self.vertices(),
            indices: INDICES.to_vec(),
            transform: rotation_z(0.0, ui.aspect_ratio()),
        };
        self.scene.borrow_mut().draw_list.push(batch);
    }

    fn on_imgui_render(&mut self) {
        let mut scene = self.scene.borrow_mut();
        let panel = &mut scene.panel;
        self.tiling = panel.slider("Tiling", self.tiling, 1.0, 16.0);
        self.tint = panel.color("Tint", self.tint);
    }

    fn uses_default_scene(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::Widget;
    use crate::scene::new_scene_handle;

    #[test]
    fn quad_draws_into_own_target() {
        let scene = new_scene_handle();
        let mut demo = QuadDemo::new(scene.clone());
        assert!(!demo.uses_default_scene());
        demo.on_init().unwrap();
        demo.on_render(&UiData { viewport_size: (512, 512), ..UiData::default() }, None);
        let scene = scene.borrow();
        let batch = &scene.draw_list.batches[0];
        assert_eq!(batch.target, RenderTarget::Offscreen { width: 512, height: 512 });
        assert_eq!(batch.vertices.len(), 4);
        assert_eq!(batch.indices.len(), 6);
        assert_eq!(scene.draw_list.batches_for(RenderTarget::DefaultScene).count(), 0);
    }

    #[test]
    fn tiling_edit_scales_uv() {
        let scene = new_scene_handle();
        let mut demo = QuadDemo::new(scene.clone());
        demo.on_init().unwrap();
        scene.borrow_mut().panel.submit_edit(Widget::Slider {
            label: "Tiling".into(),
            value: 2.0,
            min: 1.0,
            max: 16.0,
        });
        demo.on_imgui_render();
        demo.on_render(&UiData::default(), None);
        let scene = scene.borrow();
        let max_u = scene.draw_list.batches[0]
            .vertices
            .iter()
            .map(|v| v.tex_coords[0])
            .fold(0.0f32, f32::max);
        assert_eq!(max_u, 2.0);
    }
}
