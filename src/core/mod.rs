pub mod frame;
pub mod frame_context;
pub mod render_pass_event;
pub mod render_queue;
pub mod renderer;
pub mod volume_stack;

pub use frame::{FrameInfo, FrameIterator};
pub use frame_context::FrameContext;
pub use render_pass_event::RenderPassEvent;
pub use render_queue::{EnqueueError, RenderQueue};
pub use renderer::{Renderer, RendererError};
pub use volume_stack::VolumeStack;
