//! Traits every demo and demo factory implement. The host holds demos only as
//! `Box<dyn Demo>` and factories only as `Box<dyn DemoFactory>`.

use crate::{DemoResult, UiData};

/// A self-contained demo driven by the host frame loop.
///
/// Call order is the host's responsibility: `on_init` once, then `on_render` and
/// `on_imgui_render` once per frame each, in an order the host picks.
/// [`DemoInstance`](crate::DemoInstance) enforces this for hosts that want it checked.
pub trait Demo {
    /// One-time setup before the first frame.
    fn on_init(&mut self) -> DemoResult<()>;

    /// Issue this frame's rendering work.
    ///
    /// `default_viewport` is `Some` when the demo is being drawn into a non-default
    /// viewport; it then describes the host's default viewport. `None` means `ui` is the
    /// default viewport itself.
    fn on_render(&mut self, ui: &UiData, default_viewport: Option<&UiData>);

    /// Emit this frame's immediate-mode UI controls.
    fn on_imgui_render(&mut self);

    /// Whether the demo draws into the host's shared default scene instead of a target
    /// of its own. Must not depend on whether the demo has been initialized or rendered.
    fn uses_default_scene(&self) -> bool;
}

/// Names one kind of demo and creates instances of it.
pub trait DemoFactory {
    /// Label shown in the demo menu; also the registry key. Same value on every call.
    fn name(&self) -> &str;

    /// Create a fresh, uninitialized demo. The caller owns the returned instance.
    fn create_demo(&self) -> Box<dyn Demo>;
}


#[cfg(test)]
mod tests {
    use super::test_support::RecordingFactory;
    use super::*;

    #[test]
    fn create_demo_returns_distinct_instances() {
        let factory = RecordingFactory::new("Triangle");
        let a = factory.create_demo();
        let b = factory.create_demo();
        assert!(!std::ptr::addr_eq(a.as_ref(), b.as_ref()));
        assert_eq!(factory.name(), "Triangle");
        assert_eq!(factory.name(), factory.name());
    }

    #[test]
    fn render_without_default_viewport() {
        let factory = RecordingFactory::new("Triangle");
        let mut demo = factory.create_demo();
        assert!(demo.uses_default_scene());
        demo.on_init().unwrap();
        demo.on_render(&UiData::default(), None);
        let secondary = UiData { viewport_size: (320, 240), ..UiData::default() };
        demo.on_render(&secondary, Some(&UiData::default()));
        assert!(demo.uses_default_scene());
        assert_eq!(
            factory.log.borrow().calls,
            vec!["init", "render 800x600", "render 320x240 secondary"]
        );
    }
}
