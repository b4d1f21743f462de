//! Built-in demos. Each factory holds the shared scene handle and hands it to every
//! instance it creates.

mod clear_color;
mod quad;
mod triangle;

pub use clear_color::{ClearColorDemo, ClearColorFactory};
pub use quad::{QuadDemo, QuadFactory};
pub use triangle::{TriangleDemo, TriangleFactory};

use demo_api::{DemoRegistry, DemoResult};

use crate::config::GalleryConfig;
use crate::scene::SceneHandle;

/// Register every built-in demo, in menu order.
pub fn register_builtin_demos(
    registry: &mut DemoRegistry,
    scene: &SceneHandle,
    config: &GalleryConfig,
) -> DemoResult<()> {
    registry.register(Box::new(TriangleFactory::new(scene.clone(), config)))?;
    registry.register(Box::new(QuadFactory::new(scene.clone())))?;
    registry.register(Box::new(ClearColorFactory::new(scene.clone(), config)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::new_scene_handle;

    #[test]
    fn builtin_names_in_menu_order() {
        let scene = new_scene_handle();
        let mut registry = DemoRegistry::new();
        register_builtin_demos(&mut registry, &scene, &GalleryConfig::default()).unwrap();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec![TriangleFactory::NAME, QuadFactory::NAME, ClearColorFactory::NAME]
        );
        // registering twice collides on the first name
        assert!(register_builtin_demos(&mut registry, &scene, &GalleryConfig::default()).is_err());
    }

    #[test]
    fn default_scene_preference_is_known_before_init() {
        let scene = new_scene_handle();
        let mut registry = DemoRegistry::new();
        register_builtin_demos(&mut registry, &scene, &GalleryConfig::default()).unwrap();
        let prefs: Vec<bool> = registry.iter().map(|f| f.create_demo().uses_default_scene()).collect();
        assert_eq!(prefs, vec![true, false, true]);
    }
}
