use crate::state::Vec2;

/// Fire-and-forget audio output.
pub trait AudioSink {
    fn play_sound(&mut self, id: &str);
}

/// Fire-and-forget drawing surface.
pub trait Canvas {
    /// Draws `image` centered at `pos`, rotated by `rotation` degrees.
    fn draw_sprite(&mut self, image: &str, pos: Vec2, rotation: f32);

    /// Draws a line of UI text; `line` counts from the top of the screen.
    fn draw_text(&mut self, text: &str, line: usize);
}
