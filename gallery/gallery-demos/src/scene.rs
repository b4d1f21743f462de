//! Per-frame scene the gallery demos record into.
//!
//! The host clears the scene at the start of a frame, runs the active demo, and hands the
//! resulting `DrawList` to a `ScenePass` and the `ControlPanel` to its UI layer.

use std::cell::RefCell;
use std::rc::Rc;

use demo_api::{UiData, Vertex};

use crate::panel::ControlPanel;

/// Column-major 4x4 identity.
pub const IDENTITY: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
];

/// Where a batch is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderTarget {
    /// The host's shared default scene (e.g. the swapchain).
    DefaultScene,
    /// A demo-owned or secondary-viewport target of the given size.
    Offscreen { width: u32, height: u32 },
}

impl RenderTarget {
    /// Pick the target for a frame: the default scene only when the demo wants it and
    /// `ui` is the default viewport.
    pub fn for_frame(uses_default_scene: bool, ui: &UiData, default_viewport: Option<&UiData>) -> Self {
        if uses_default_scene && default_viewport.is_none() {
            RenderTarget::DefaultScene
        } else {
            let (width, height) = ui.viewport_size;
            RenderTarget::Offscreen { width: width.max(1), height: height.max(1) }
        }
    }
}

/// Indexed geometry for one draw.
#[derive(Clone, Debug)]
pub struct DrawBatch {
    pub target: RenderTarget,
    pub vertices: Vec<Vertex>,
    /// u32 indices into `vertices`.
    pub indices: Vec<u32>,
    /// World transform, column-major.
    pub transform: [f32; 16],
}

/// Everything the active demo asked to draw this frame.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    /// Set by a demo to override the host's clear color.
    pub clear_color: Option<[f32; 4]>,
    pub batches: Vec<DrawBatch>,
}

impl DrawList {
    pub fn push(&mut self, batch: DrawBatch) {
        if batch.vertices.is_empty() || batch.indices.is_empty() {
            return;
        }
        debug_assert!(batch.indices.iter().all(|&i| (i as usize) < batch.vertices.len()));
        self.batches.push(batch);
    }

    pub fn clear(&mut self) {
        self.clear_color = None;
        self.batches.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty() && self.clear_color.is_none()
    }

    pub fn vertex_count(&self) -> usize {
        self.batches.iter().map(|b| b.vertices.len()).sum()
    }

    pub fn index_count(&self) -> usize {
        self.batches.iter().map(|b| b.indices.len()).sum()
    }

    pub fn batches_for(&self, target: RenderTarget) -> impl Iterator<Item = &DrawBatch> {
        self.batches.iter().filter(move |b| b.target == target)
    }

    /// Distinct offscreen targets referenced this frame, in first-use order.
    pub fn offscreen_targets(&self) -> Vec<RenderTarget> {
        let mut targets = Vec::new();
        for batch in &self.batches {
            if batch.target != RenderTarget::DefaultScene && !targets.contains(&batch.target) {
                targets.push(batch.target);
            }
        }
        targets
    }
}

/// Draw list plus UI controls for one frame.
#[derive(Clone, Debug, Default)]
pub struct FrameScene {
    pub draw_list: DrawList,
    pub panel: ControlPanel,
}

impl FrameScene {
    pub fn begin_frame(&mut self) {
        self.draw_list.clear();
        self.panel.clear();
    }
}

/// Shared between the host and the demos it creates. Single-threaded by construction.
pub type SceneHandle = Rc<RefCell<FrameScene>>;

pub fn new_scene_handle() -> SceneHandle {
    Rc::new(RefCell::new(FrameScene::default()))
}

/// Rotation about +Z followed by an x scale of `1 / aspect`, column-major.
pub fn rotation_z(angle: f32, aspect: f32) -> [f32; 16] {
    let (s, c) = angle.sin_cos();
    let sx = if aspect > 0.0 { 1.0 / aspect } else { 1.0 };
    [
        c * sx, s, 0.0, 0.0,
        -s * sx, c, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(target: RenderTarget) -> DrawBatch {
        DrawBatch {
            target,
            vertices: vec![Vertex::default(); 3],
            indices: vec![0, 1, 2],
            transform: IDENTITY,
        }
    }

    #[test]
    fn target_selection() {
        let ui = UiData { viewport_size: (320, 200), ..UiData::default() };
        let main = UiData::default();
        assert_eq!(RenderTarget::for_frame(true, &ui, None), RenderTarget::DefaultScene);
        assert_eq!(
            RenderTarget::for_frame(true, &ui, Some(&main)),
            RenderTarget::Offscreen { width: 320, height: 200 }
        );
        assert_eq!(
            RenderTarget::for_frame(false, &ui, None),
            RenderTarget::Offscreen { width: 320, height: 200 }
        );
        let empty = UiData { viewport_size: (0, 0), ..UiData::default() };
        assert_eq!(
            RenderTarget::for_frame(false, &empty, None),
            RenderTarget::Offscreen { width: 1, height: 1 }
        );
    }

    #[test]
    fn empty_batches_are_dropped() {
        let mut list = DrawList::default();
        list.push(DrawBatch { indices: Vec::new(), ..batch(RenderTarget::DefaultScene) });
        assert!(list.is_empty());
        list.push(batch(RenderTarget::DefaultScene));
        assert_eq!(list.vertex_count(), 3);
        assert_eq!(list.index_count(), 3);
    }

    #[test]
    fn offscreen_targets_are_deduplicated() {
        let small = RenderTarget::Offscreen { width: 64, height: 64 };
        let mut list = DrawList::default();
        list.push(batch(small));
        list.push(batch(RenderTarget::DefaultScene));
        list.push(batch(small));
        assert_eq!(list.offscreen_targets(), vec![small]);
        assert_eq!(list.batches_for(small).count(), 2);
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn rotation_z_quarter_turn() {
        let m = rotation_z(std::f32::consts::FRAC_PI_2, 1.0);
        // x axis maps to y
        assert!((m[0]).abs() < 1e-6);
        assert!((m[1] - 1.0).abs() < 1e-6);
        assert_eq!(rotation_z(0.0, 2.0)[0], 0.5);
    }
}
