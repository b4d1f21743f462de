use demo_api::DemoError;
use thiserror::Error;

pub type HostResult<T> = Result<T, HostError>;

#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Demo(#[from] DemoError),

    #[error("no suitable GPU adapter")]
    NoAdapter,

    #[error("request_device failed: {0}")]
    RequestDevice(String),

    #[error("surface error: {0}")]
    Surface(String),

    #[error("render error: {0}")]
    Render(String),
}
