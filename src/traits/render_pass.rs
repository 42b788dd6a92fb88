use crate::core::render_pass_event::RenderPassEvent;

/// Opaque render pass descriptor
/// The pipeline only needs to know where the pass goes, never what it does
pub trait RenderPass: Send + Sync {
    /// Pass name for logs and schedules
    fn name(&self) -> &str;

    /// Insertion point in the frame's render graph
    fn stage(&self) -> RenderPassEvent;
}
