pub mod cli;
pub mod cmaa2;
pub mod core;
pub mod traits;

pub use crate::cmaa2::{Cmaa2Feature, Cmaa2Pass, Cmaa2Quality, Cmaa2Volume};
pub use crate::core::{FrameContext, FrameInfo, RenderPassEvent, RenderQueue, Renderer, VolumeStack};
