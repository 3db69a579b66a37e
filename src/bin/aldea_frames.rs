//! aldea-frames - render the village animation as a PNG frame sequence.
//!
//! Headless driver for the scene: advances the animation state once per
//! frame (one nominal 16 ms tick each) and writes `frame_NNNN.png` files.
//!
//! Usage: `aldea-frames [FRAMES] [OUT_DIR]` (defaults: 120 frames into
//! `frames/`).

use std::path::PathBuf;
use std::process::ExitCode;

use aldea::animation::{SceneState, TICK_MILLIS};
use aldea::framebuffer::Framebuffer;
use aldea::output::write_png;
use aldea::scene::VillageScene;

fn main() -> ExitCode {
    if let Err(err) = setup_logger() {
        eprintln!("logger setup failed: {err}");
        return ExitCode::FAILURE;
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let frames: u32 = match args.next() {
        Some(arg) => arg.parse()?,
        None => 120,
    };
    let out_dir = args.next().map_or_else(|| PathBuf::from("frames"), PathBuf::from);

    std::fs::create_dir_all(&out_dir)?;

    let scene = VillageScene::new();
    let mut state = SceneState::new();
    let mut fb = Framebuffer::new(scene.width(), scene.height())?;

    log::info!(
        "rendering {frames} frames ({}x{}, {TICK_MILLIS} ms per tick) into {}",
        scene.width(),
        scene.height(),
        out_dir.display()
    );

    for i in 0..frames {
        state.tick(scene.width() as f32);
        scene.render(&state, &mut fb)?;

        let path = out_dir.join(format!("frame_{i:04}.png"));
        write_png(&fb, &path)?;

        if (i + 1) % 60 == 0 {
            log::info!("{} frames written", i + 1);
        }
    }

    log::info!("done: {frames} frames in {}", out_dir.display());
    Ok(())
}

fn setup_logger() -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message));
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()
}
