use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::pass::Cmaa2Pass;
use super::volume::Cmaa2Volume;
use crate::core::{FrameContext, RenderPassEvent};
use crate::traits::{PipelineHost, RendererFeature, VolumeComponent};

/// Errors raised by the feature itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    /// The pass handle was never built
    NotInitialized,
}

impl fmt::Display for FeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureError::NotInitialized => f.write_str("CMAA2 feature used before initialize()"),
        }
    }
}

impl std::error::Error for FeatureError {}

/// Schedules the CMAA2 pass on frames whose volume stack enables it
///
/// Owns a single pass handle, built in [`RendererFeature::initialize`] and
/// reused for every frame until the next initialization.
#[derive(Debug, Default)]
pub struct Cmaa2Feature {
    pass: Option<Arc<Cmaa2Pass>>,
}

impl Cmaa2Feature {
    /// Stage the pass is always inserted at
    pub const STAGE: RenderPassEvent = RenderPassEvent::BeforeRenderingPostProcessing;

    /// Uninitialized feature; a renderer initializes it on registration
    pub fn new() -> Self {
        Self { pass: None }
    }

    /// Feature with its pass handle already built
    pub fn initialized() -> anyhow::Result<Self> {
        let mut feature = Self::new();
        feature.initialize()?;
        Ok(feature)
    }

    /// Activation predicate: a missing volume counts as disabled
    pub fn should_enqueue(volume: Option<&Cmaa2Volume>) -> bool {
        volume.is_some_and(|volume| volume.is_active())
    }

    /// Current pass handle, if initialized
    pub fn pass(&self) -> Option<&Arc<Cmaa2Pass>> {
        self.pass.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.pass.is_some()
    }
}

impl RendererFeature for Cmaa2Feature {
    fn name(&self) -> &str {
        Cmaa2Pass::NAME
    }

    fn initialize(&mut self) -> anyhow::Result<()> {
        // previous handle is dropped here, never merged
        self.pass = Some(Arc::new(Cmaa2Pass::new(Self::STAGE)));
        log::debug!("CMAA2 pass created at {}", Self::STAGE);
        Ok(())
    }

    fn evaluate_and_enqueue(
        &self,
        ctx: &FrameContext<'_>,
        host: &mut dyn PipelineHost,
    ) -> anyhow::Result<()> {
        if !Self::should_enqueue(ctx.volume::<Cmaa2Volume>()) {
            log::trace!(
                "CMAA2 inactive on frame {} (camera '{}')",
                ctx.frame.number,
                ctx.camera
            );
            return Ok(());
        }

        let pass = self.pass.as_ref().ok_or(FeatureError::NotInitialized)?;
        log::debug!(
            "CMAA2 active on frame {} (camera '{}')",
            ctx.frame.number,
            ctx.camera
        );
        host.enqueue(pass.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
