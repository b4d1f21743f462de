//! Gallery demos: the built-in demos, the per-frame scene they record into, and the wgpu
//! scene pass that draws it.

pub mod composite;
pub mod config;
pub mod demos;
pub mod layout;
pub mod offscreen;
pub mod panel;
pub mod scene;
pub mod scene_pass;

pub use composite::{composite_plan, fit_rect, CompositePass, CompositeRect};
pub use config::GalleryConfig;
pub use demos::{register_builtin_demos, ClearColorFactory, QuadFactory, TriangleFactory};
pub use offscreen::{OffscreenTarget, OffscreenTargets};
pub use panel::{ControlPanel, Widget};
pub use scene::{new_scene_handle, DrawBatch, DrawList, FrameScene, RenderTarget, SceneHandle, IDENTITY};
pub use scene_pass::ScenePass;
