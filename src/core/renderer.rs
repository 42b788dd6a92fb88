use std::any::TypeId;
use std::fmt;

use anyhow::Context;

use super::frame_context::FrameContext;
use super::render_queue::RenderQueue;
use crate::traits::RendererFeature;

/// Renderer-level configuration errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererError {
    /// A feature type that allows only one instance was added twice
    DuplicateFeature(String),
}

impl fmt::Display for RendererError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RendererError::DuplicateFeature(name) => {
                write!(f, "renderer already has a '{}' feature", name)
            }
        }
    }
}

impl std::error::Error for RendererError {}

struct FeatureSlot {
    type_id: TypeId,
    feature: Box<dyn RendererFeature>,
}

/// Feature registry and frame driver
///
/// Owns the features of one pipeline configuration and the queue they
/// enqueue into. Each feature type may be registered once.
#[derive(Default)]
pub struct Renderer {
    features: Vec<FeatureSlot>,
    queue: RenderQueue,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register and initialize a feature
    pub fn add_feature<F: RendererFeature>(&mut self, mut feature: F) -> anyhow::Result<()> {
        let type_id = TypeId::of::<F>();
        if self.features.iter().any(|slot| slot.type_id == type_id) {
            log::warn!("rejected second '{}' feature", feature.name());
            return Err(RendererError::DuplicateFeature(feature.name().to_string()).into());
        }

        feature
            .initialize()
            .with_context(|| format!("failed to initialize feature '{}'", feature.name()))?;
        log::debug!("registered feature '{}'", feature.name());

        self.features.push(FeatureSlot {
            type_id,
            feature: Box::new(feature),
        });
        Ok(())
    }

    /// Re-initialize every feature, e.g. after the pipeline configuration changed
    /// The last frame's queue is dropped so no old pass handle outlives the reload
    pub fn reload(&mut self) -> anyhow::Result<()> {
        self.queue.clear();
        for slot in &mut self.features {
            let name = slot.feature.name().to_string();
            slot.feature
                .initialize()
                .with_context(|| format!("failed to reinitialize feature '{}'", name))?;
        }
        log::debug!("reloaded {} feature(s)", self.features.len());
        Ok(())
    }

    /// Build one camera's frame: clear the queue and let every feature enqueue
    /// The first failing feature aborts the frame and leaves the queue empty
    pub fn build_frame(&mut self, ctx: &FrameContext<'_>) -> anyhow::Result<&RenderQueue> {
        self.queue.clear();

        if let Err(err) = self.enqueue_features(ctx) {
            self.queue.clear();
            return Err(err);
        }

        Ok(&self.queue)
    }

    fn enqueue_features(&mut self, ctx: &FrameContext<'_>) -> anyhow::Result<()> {
        for slot in &self.features {
            slot.feature
                .evaluate_and_enqueue(ctx, &mut self.queue)
                .with_context(|| {
                    format!(
                        "feature '{}' failed on frame {} (camera '{}')",
                        slot.feature.name(),
                        ctx.frame.number,
                        ctx.camera
                    )
                })?;
        }
        Ok(())
    }

    /// Typed access to a registered feature
    pub fn feature<F: RendererFeature>(&self) -> Option<&F> {
        self.features
            .iter()
            .find(|slot| slot.type_id == TypeId::of::<F>())
            .and_then(|slot| slot.feature.as_any().downcast_ref::<F>())
    }

    pub fn feature_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.features.iter().map(|slot| slot.feature.name())
    }

    /// Queue of the most recently built frame
    pub fn queue(&self) -> &RenderQueue {
        &self.queue
    }
}
