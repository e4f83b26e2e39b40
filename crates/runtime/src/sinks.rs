//! Headless implementations of the audio and drawing sinks.

use game_core::{AudioSink, Canvas, Vec2};

/// Discards every sound.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_sound(&mut self, _id: &str) {}
}

/// Records sound ids in play order.
#[derive(Clone, Debug, Default)]
pub struct SoundLog {
    pub played: Vec<String>,
}

impl AudioSink for SoundLog {
    fn play_sound(&mut self, id: &str) {
        tracing::trace!(sound = id, "play");
        self.played.push(id.to_string());
    }
}

/// Discards every draw call.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn draw_sprite(&mut self, _image: &str, _pos: Vec2, _rotation: f32) {}

    fn draw_text(&mut self, _text: &str, _line: usize) {}
}

/// Keeps the text lines of the most recent frame, for terminal front ends
/// and tests.
#[derive(Clone, Debug, Default)]
pub struct TextCanvas {
    lines: Vec<String>,
    sprites: usize,
}

impl TextCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the previous frame.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.sprites = 0;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn sprite_count(&self) -> usize {
        self.sprites
    }
}

impl Canvas for TextCanvas {
    fn draw_sprite(&mut self, _image: &str, _pos: Vec2, _rotation: f32) {
        self.sprites += 1;
    }

    fn draw_text(&mut self, text: &str, line: usize) {
        if self.lines.len() <= line {
            self.lines.resize(line + 1, String::new());
        }
        self.lines[line] = text.to_string();
    }
}
