//! Shared demo API for the gallery.
//! Defines the Demo/DemoFactory traits the host drives every frame, the per-frame UiData
//! snapshot, and the fixed Vertex layout that pipelines bind against.

mod demo;
mod error;
mod instance;
mod registry;
mod ui_data;
mod vertex;

pub use demo::{Demo, DemoFactory};
pub use error::{DemoError, DemoResult};
pub use instance::{DemoInstance, DemoState};
pub use registry::DemoRegistry;
pub use ui_data::{MouseState, UiData};
pub use vertex::Vertex;
