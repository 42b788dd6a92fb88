use std::any::Any;

/// Effect settings resolved from the camera's volume stack
pub trait VolumeComponent: Send + Sync + 'static {
    /// Whether the effect should run, already accounting for override state
    fn is_active(&self) -> bool;

    /// Downcast support for typed lookups
    fn as_any(&self) -> &dyn Any;
}
