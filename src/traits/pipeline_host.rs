use std::sync::Arc;

use super::render_pass::RenderPass;

/// Pipeline host - owns the frame's render graph and accepts passes
pub trait PipelineHost {
    /// Schedule a pass at its own stage for the current frame
    /// Failure policy (duplicates, invalid stages) belongs to the host
    fn enqueue(&mut self, pass: Arc<dyn RenderPass>) -> anyhow::Result<()>;
}
