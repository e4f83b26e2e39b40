//! Headless zombie quest player.
//!
//! Loads a content directory, then plays its quest frame by frame without a
//! window: menus always take the configured option, and the player character
//! is driven by its own behavior inside dungeons. Scene text is printed to
//! stdout as scenes are entered.
//!
//! ```bash
//! ZOMBIE_DATA_DIR=./crates/client/data RUST_LOG=runtime=debug cargo run -p zombie-client
//! ```
mod config;
mod logging;

use std::sync::Arc;

use anyhow::{Context, Result};
use game_content::ContentFactory;
use runtime::{ContentBundle, QuestRunner, SoundLog, TextCanvas};

use crate::config::ClientConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    let factory = ContentFactory::new(&config.data_dir);
    let graph = factory
        .load_quest()
        .with_context(|| format!("loading quest from {}", config.data_dir.display()))?;
    let content = Arc::new(ContentBundle::load(&factory, &graph)?);
    let frame_ms = content.config().frame_ms;

    let mut runner = QuestRunner::new(graph, content)?;
    let mut audio = SoundLog::default();
    let mut canvas = TextCanvas::new();
    tracing::info!(data_dir = %config.data_dir.display(), "quest loaded");

    println!("== {} ==", runner.current_scene());
    let mut frames = 0;
    while !runner.is_finished() && frames < config.max_frames {
        runner.choose(config.choice);
        canvas.clear();
        let entered = runner
            .update_and_draw(frame_ms, &mut audio, &mut canvas)?
            .map(str::to_string);
        frames += 1;

        if let Some(scene) = entered {
            print_lines(&canvas);
            println!("\n== {} ==", scene);
        }
    }

    // Draw the scene the quest stopped in.
    canvas.clear();
    runner.update_and_draw(frame_ms, &mut audio, &mut canvas)?;
    print_lines(&canvas);

    let data = runner.player_data();
    tracing::info!(
        frames,
        scenes = runner.history().len(),
        sounds = audio.played.len(),
        health = data.health.current(),
        inventory = ?data.inventory,
        "quest {}",
        if runner.is_finished() { "finished" } else { "stopped" }
    );

    if !runner.is_finished() {
        anyhow::bail!(
            "quest did not finish within {} frames (stuck in '{}')",
            config.max_frames,
            runner.current_scene()
        );
    }
    Ok(())
}

fn print_lines(canvas: &TextCanvas) {
    for line in canvas.lines().iter().filter(|line| !line.is_empty()) {
        println!("{}", line);
    }
}
