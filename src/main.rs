use anyhow::Result;
use clap::Parser;

use cmaa2_gate::cli::{Cli, VolumeState};
use cmaa2_gate::cmaa2::{Cmaa2Feature, Cmaa2Volume};
use cmaa2_gate::core::{FrameContext, FrameInfo, FrameIterator, Renderer, VolumeStack};

/// Per-camera volume stack for one frame, as the CLI describes it
fn volume_stack(cli: &Cli, frame: &FrameInfo) -> VolumeStack {
    match cli.volume_state(frame.number) {
        VolumeState::Enabled => VolumeStack::new().with(Cmaa2Volume::enabled(cli.quality.into())),
        VolumeState::Disabled => VolumeStack::new().with(Cmaa2Volume::disabled()),
        VolumeState::Missing => VolumeStack::new(),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut renderer = Renderer::new();
    renderer.add_feature(Cmaa2Feature::new())?;

    let mut scheduled = 0u64;

    for frame in FrameIterator::new().take_while(|frame| cli.runs_frame(frame.number)) {
        if cli.reloads_before(frame.number) {
            renderer.reload()?;
            log::info!("pipeline configuration reloaded before frame {}", frame.number);
        }

        let volumes = volume_stack(cli, &frame);

        for camera in &cli.cameras {
            let ctx = FrameContext::new(frame, camera, &volumes);
            let queue = renderer.build_frame(&ctx)?;
            scheduled += queue.len() as u64;

            if !cli.quiet {
                let passes: Vec<String> = queue
                    .passes()
                    .iter()
                    .map(|pass| format!("{}@{}", pass.name(), pass.stage()))
                    .collect();
                println!(
                    "frame {:>4} [{}] {:>8.3}ms  {}",
                    frame.number,
                    camera,
                    frame.delta * 1000.0,
                    if passes.is_empty() { "-".to_string() } else { passes.join(", ") }
                );
            }
        }
    }

    if !cli.quiet {
        println!(
            "{} frame(s) x {} camera(s), {} pass(es) scheduled",
            cli.frames,
            cli.cameras.len(),
            scheduled
        );
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    run(&cli)
}
