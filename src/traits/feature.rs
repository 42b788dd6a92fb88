use std::any::Any;

use super::pipeline_host::PipelineHost;
use crate::core::frame_context::FrameContext;

/// Renderer feature lifecycle
///
/// `initialize` runs once per pipeline configuration (and again on reload),
/// `evaluate_and_enqueue` runs once per camera per frame.
pub trait RendererFeature: Send + Sync + 'static {
    /// Feature name used in logs and errors
    fn name(&self) -> &str;

    /// Build the feature's passes, replacing any previous ones
    fn initialize(&mut self) -> anyhow::Result<()>;

    /// Decide whether this feature runs this frame and schedule its passes
    fn evaluate_and_enqueue(
        &self,
        ctx: &FrameContext<'_>,
        host: &mut dyn PipelineHost,
    ) -> anyhow::Result<()>;

    /// Downcast support for typed lookups
    fn as_any(&self) -> &dyn Any;
}
