// cli.rs - Command-line interface configuration
use clap::{Parser, ValueEnum};

use crate::cmaa2::Cmaa2Quality;

#[derive(Parser, Debug, Clone)]
#[command(name = "cmaa2-gate")]
#[command(about = "Headless frame loop driving the CMAA2 renderer feature", long_about = None)]
pub struct Cli {
    /// Number of frames to build
    #[arg(long, default_value_t = 8)]
    pub frames: u64,

    /// Camera to build each frame for (repeatable)
    #[arg(long = "camera", default_value = "main")]
    pub cameras: Vec<String>,

    /// Quality preset of the CMAA2 volume
    #[arg(long, value_enum, default_value_t = QualityArg::High)]
    pub quality: QualityArg,

    /// Frames on which the CMAA2 volume is present but disabled
    #[arg(long = "disable-on", value_delimiter = ',')]
    pub disabled_frames: Vec<u64>,

    /// Frames on which the CMAA2 volume is missing from the stack
    #[arg(long = "remove-on", value_delimiter = ',')]
    pub removed_frames: Vec<u64>,

    /// Reload the pipeline configuration every N frames
    #[arg(long = "reload-every")]
    pub reload_every: Option<u64>,

    /// Disable per-frame console output
    #[arg(long = "quiet", default_value = "false")]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityArg {
    Low,
    Medium,
    High,
    Ultra,
}

impl From<QualityArg> for Cmaa2Quality {
    fn from(arg: QualityArg) -> Self {
        match arg {
            QualityArg::Low => Cmaa2Quality::Low,
            QualityArg::Medium => Cmaa2Quality::Medium,
            QualityArg::High => Cmaa2Quality::High,
            QualityArg::Ultra => Cmaa2Quality::Ultra,
        }
    }
}

/// How the CMAA2 volume looks on a given frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeState {
    Enabled,
    Disabled,
    Missing,
}

impl Cli {
    /// Whether frame `number` is part of this run
    pub fn runs_frame(&self, number: u64) -> bool {
        number < self.frames
    }

    pub fn volume_state(&self, frame: u64) -> VolumeState {
        if self.removed_frames.contains(&frame) {
            VolumeState::Missing
        } else if self.disabled_frames.contains(&frame) {
            VolumeState::Disabled
        } else {
            VolumeState::Enabled
        }
    }

    /// Whether the pipeline configuration reloads before this frame
    pub fn reloads_before(&self, frame: u64) -> bool {
        match self.reload_every {
            Some(every) if every > 0 => frame > 0 && frame % every == 0,
            _ => false,
        }
    }
}
