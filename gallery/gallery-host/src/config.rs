//! Host configuration: frame order, start-up demo, viewport, gallery settings.

use gallery_demos::GalleryConfig;

/// Env var naming the demo to select at start-up.
pub const ENV_INITIAL_DEMO: &str = "DEMO_GALLERY_DEMO";
/// Env var; `1` or `true` runs `on_imgui_render` before `on_render` each frame.
pub const ENV_UI_FIRST: &str = "DEMO_GALLERY_UI_FIRST";

/// Order of the two per-frame demo hooks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameOrder {
    /// `on_render`, then `on_imgui_render`.
    #[default]
    RenderThenUi,
    /// `on_imgui_render`, then `on_render`; UI edits apply in the same frame.
    UiThenRender,
}

#[derive(Clone, Debug)]
pub struct HostConfig {
    pub frame_order: FrameOrder,
    /// Demo selected by `DemoHost::new`; `None` starts with nothing active.
    pub initial_demo: Option<String>,
    /// Default viewport size used until the host reports a real one.
    pub viewport_size: (u32, u32),
    pub gallery: GalleryConfig,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            frame_order: FrameOrder::default(),
            initial_demo: Some(gallery_demos::TriangleFactory::NAME.to_string()),
            viewport_size: (800, 600),
            gallery: GalleryConfig::default(),
        }
    }
}

impl HostConfig {
    /// Defaults overlaid with `DEMO_GALLERY_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup (env-like).
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(name) = lookup(ENV_INITIAL_DEMO) {
            let name = name.trim();
            self.initial_demo = if name.is_empty() { None } else { Some(name.to_string()) };
        }
        if let Some(flag) = lookup(ENV_UI_FIRST) {
            self.frame_order = match flag.trim() {
                "1" | "true" | "yes" => FrameOrder::UiThenRender,
                _ => FrameOrder::RenderThenUi,
            };
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let config = HostConfig::default().with_overrides(lookup(&[]));
        assert_eq!(config.frame_order, FrameOrder::RenderThenUi);
        assert_eq!(config.initial_demo.as_deref(), Some("Triangle"));
    }

    #[test]
    fn overrides_apply() {
        let config = HostConfig::default()
            .with_overrides(lookup(&[(ENV_INITIAL_DEMO, " Clear Color "), (ENV_UI_FIRST, "1")]));
        assert_eq!(config.frame_order, FrameOrder::UiThenRender);
        assert_eq!(config.initial_demo.as_deref(), Some("Clear Color"));
    }

    #[test]
    fn empty_demo_name_disables_initial_selection() {
        let config = HostConfig::default().with_overrides(lookup(&[(ENV_INITIAL_DEMO, ""), (ENV_UI_FIRST, "0")]));
        assert_eq!(config.initial_demo, None);
        assert_eq!(config.frame_order, FrameOrder::RenderThenUi);
    }
}
