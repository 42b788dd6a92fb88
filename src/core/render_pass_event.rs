use std::fmt;

/// Insertion points in a forward renderer's frame, in execution order
/// Values leave gaps so stages stay comparable if new ones are added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum RenderPassEvent {
    BeforeRendering = 0,
    BeforeRenderingShadows = 50,
    AfterRenderingShadows = 100,
    BeforeRenderingPrePasses = 150,
    AfterRenderingPrePasses = 200,
    BeforeRenderingOpaques = 250,
    AfterRenderingOpaques = 300,
    BeforeRenderingSkybox = 350,
    AfterRenderingSkybox = 400,
    BeforeRenderingTransparents = 450,
    AfterRenderingTransparents = 500,
    BeforeRenderingPostProcessing = 550,
    AfterRenderingPostProcessing = 600,
    AfterRendering = 1000,
}

impl RenderPassEvent {
    /// Every stage, in execution order
    pub const ALL: [RenderPassEvent; 14] = [
        RenderPassEvent::BeforeRendering,
        RenderPassEvent::BeforeRenderingShadows,
        RenderPassEvent::AfterRenderingShadows,
        RenderPassEvent::BeforeRenderingPrePasses,
        RenderPassEvent::AfterRenderingPrePasses,
        RenderPassEvent::BeforeRenderingOpaques,
        RenderPassEvent::AfterRenderingOpaques,
        RenderPassEvent::BeforeRenderingSkybox,
        RenderPassEvent::AfterRenderingSkybox,
        RenderPassEvent::BeforeRenderingTransparents,
        RenderPassEvent::AfterRenderingTransparents,
        RenderPassEvent::BeforeRenderingPostProcessing,
        RenderPassEvent::AfterRenderingPostProcessing,
        RenderPassEvent::AfterRendering,
    ];

    /// Numeric ordering value
    pub fn value(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            RenderPassEvent::BeforeRendering => "BeforeRendering",
            RenderPassEvent::BeforeRenderingShadows => "BeforeRenderingShadows",
            RenderPassEvent::AfterRenderingShadows => "AfterRenderingShadows",
            RenderPassEvent::BeforeRenderingPrePasses => "BeforeRenderingPrePasses",
            RenderPassEvent::AfterRenderingPrePasses => "AfterRenderingPrePasses",
            RenderPassEvent::BeforeRenderingOpaques => "BeforeRenderingOpaques",
            RenderPassEvent::AfterRenderingOpaques => "AfterRenderingOpaques",
            RenderPassEvent::BeforeRenderingSkybox => "BeforeRenderingSkybox",
            RenderPassEvent::AfterRenderingSkybox => "AfterRenderingSkybox",
            RenderPassEvent::BeforeRenderingTransparents => "BeforeRenderingTransparents",
            RenderPassEvent::AfterRenderingTransparents => "AfterRenderingTransparents",
            RenderPassEvent::BeforeRenderingPostProcessing => "BeforeRenderingPostProcessing",
            RenderPassEvent::AfterRenderingPostProcessing => "AfterRenderingPostProcessing",
            RenderPassEvent::AfterRendering => "AfterRendering",
        }
    }
}

impl fmt::Display for RenderPassEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
