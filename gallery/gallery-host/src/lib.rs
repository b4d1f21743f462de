//! Gallery host: selects demos, runs their per-frame hooks and presents the result.

mod config;
mod error;
mod gpu;
mod host;
mod window_backend;

pub use config::{FrameOrder, HostConfig, ENV_INITIAL_DEMO, ENV_UI_FIRST};
pub use error::{HostError, HostResult};
pub use gpu::GpuPresenter;
pub use host::{DemoHost, FrameOutput};
pub use window_backend::WindowPresenter;
