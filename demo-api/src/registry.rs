//! Named demo factories, in registration order. The host builds its demo menu from this.

use crate::{Demo, DemoError, DemoFactory, DemoResult};

#[derive(Default)]
pub struct DemoRegistry {
    factories: Vec<Box<dyn DemoFactory>>,
}

impl DemoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a factory. Names are unique keys; a second factory with the same name is rejected.
    pub fn register(&mut self, factory: Box<dyn DemoFactory>) -> DemoResult<()> {
        let name = factory.name();
        if self.get(name).is_some() {
            return Err(DemoError::DuplicateName(name.to_string()));
        }
        log::debug!("registered demo '{}'", name);
        self.factories.push(factory);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn DemoFactory> {
        self.factories.iter().find(|f| f.name() == name).map(|f| f.as_ref())
    }

    /// Create a fresh instance of the named demo.
    pub fn create(&self, name: &str) -> DemoResult<Box<dyn Demo>> {
        self.get(name)
            .map(|f| f.create_demo())
            .ok_or_else(|| DemoError::UnknownDemo(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.iter().map(|f| f.name())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn DemoFactory> {
        self.factories.iter().map(|f| f.as_ref())
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::test_support::RecordingFactory;

    fn registry() -> DemoRegistry {
        let mut registry = DemoRegistry::new();
        registry.register(Box::new(RecordingFactory::new("Triangle"))).unwrap();
        registry.register(Box::new(RecordingFactory::new("Quad"))).unwrap();
        registry
    }

    #[test]
    fn names_keep_registration_order() {
        let registry = registry();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Triangle", "Quad"]);
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut registry = registry();
        let err = registry.register(Box::new(RecordingFactory::new("Quad"))).unwrap_err();
        assert_eq!(err, DemoError::DuplicateName("Quad".into()));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn create_unknown_demo_fails() {
        let registry = registry();
        assert!(registry.create("Triangle").is_ok());
        assert!(matches!(registry.create("Cube"), Err(DemoError::UnknownDemo(name)) if name == "Cube"));
        assert!(registry.get("Cube").is_none());
    }
}
