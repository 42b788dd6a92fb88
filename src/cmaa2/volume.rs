use std::any::Any;

use crate::traits::VolumeComponent;

/// A volume setting plus whether the author overrode it
/// Non-overridden parameters fall back to the effect's defaults
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VolumeParameter<T> {
    pub value: T,
    pub overridden: bool,
}

impl<T> VolumeParameter<T> {
    /// Parameter left at its default
    pub fn new(value: T) -> Self {
        Self {
            value,
            overridden: false,
        }
    }

    /// Parameter explicitly set by the volume author
    pub fn overridden(value: T) -> Self {
        Self {
            value,
            overridden: true,
        }
    }
}

/// CMAA2 quality preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cmaa2Quality {
    Low,
    Medium,
    #[default]
    High,
    Ultra,
}

/// CMAA2 settings as resolved for one camera
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cmaa2Volume {
    pub enabled: VolumeParameter<bool>,
    pub quality: VolumeParameter<Cmaa2Quality>,
}

impl Cmaa2Volume {
    /// Volume that turns the effect on at the given quality
    pub fn enabled(quality: Cmaa2Quality) -> Self {
        Self {
            enabled: VolumeParameter::overridden(true),
            quality: VolumeParameter::overridden(quality),
        }
    }

    /// Volume that explicitly turns the effect off
    pub fn disabled() -> Self {
        Self {
            enabled: VolumeParameter::overridden(false),
            ..Self::default()
        }
    }
}

impl VolumeComponent for Cmaa2Volume {
    fn is_active(&self) -> bool {
        self.enabled.overridden && self.enabled.value
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
