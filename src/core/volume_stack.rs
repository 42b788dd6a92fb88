use std::any::TypeId;
use std::collections::HashMap;

use crate::traits::VolumeComponent;

/// Resolved volume settings for one camera
/// Holds at most one component per concrete type
#[derive(Default)]
pub struct VolumeStack {
    components: HashMap<TypeId, Box<dyn VolumeComponent>>,
}

impl VolumeStack {
    /// Create empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Add component and return new stack (builder style)
    pub fn with<T: VolumeComponent>(mut self, component: T) -> Self {
        self.insert(component);
        self
    }

    /// Insert a component, returning the one it replaced
    pub fn insert<T: VolumeComponent>(&mut self, component: T) -> Option<Box<dyn VolumeComponent>> {
        self.components.insert(TypeId::of::<T>(), Box::new(component))
    }

    /// Remove the component of type T, if present
    pub fn remove<T: VolumeComponent>(&mut self) -> bool {
        self.components.remove(&TypeId::of::<T>()).is_some()
    }

    /// Look up the settings for effect type T
    pub fn get_component<T: VolumeComponent>(&self) -> Option<&T> {
        self.components
            .get(&TypeId::of::<T>())
            .and_then(|component| component.as_any().downcast_ref::<T>())
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
