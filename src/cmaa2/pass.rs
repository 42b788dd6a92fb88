use crate::core::RenderPassEvent;
use crate::traits::RenderPass;

/// CMAA2 pass handle
///
/// Only carries where the pass is inserted; resource binding and dispatch
/// live with the pass implementation, outside the gate.
#[derive(Debug)]
pub struct Cmaa2Pass {
    stage: RenderPassEvent,
}

impl Cmaa2Pass {
    pub const NAME: &'static str = "CMAA2";

    pub fn new(stage: RenderPassEvent) -> Self {
        Self { stage }
    }
}

impl RenderPass for Cmaa2Pass {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn stage(&self) -> RenderPassEvent {
        self.stage
    }
}
