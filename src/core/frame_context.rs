use super::frame::FrameInfo;
use super::volume_stack::VolumeStack;
use crate::traits::VolumeComponent;

/// Everything a feature may read while a camera's frame is being built
/// Borrowed for the duration of one frame-build call
#[derive(Clone, Copy)]
pub struct FrameContext<'a> {
    pub frame: FrameInfo,
    pub camera: &'a str,
    volumes: &'a VolumeStack,
}

impl<'a> FrameContext<'a> {
    pub fn new(frame: FrameInfo, camera: &'a str, volumes: &'a VolumeStack) -> Self {
        Self {
            frame,
            camera,
            volumes,
        }
    }

    /// Resolved settings for effect type T on this camera
    pub fn volume<T: VolumeComponent>(&self) -> Option<&'a T> {
        self.volumes.get_component::<T>()
    }

    pub fn volumes(&self) -> &'a VolumeStack {
        self.volumes
    }
}
