use game_core::{AudioSink, Canvas, Frame, HumanoidData, SceneSpec};

use super::Controller;

/// A menu: a prompt and a list of options, one decision per option.
///
/// Transition screens are menus with a single "continue" option.
#[derive(Clone, Debug)]
pub struct DecisionController {
    prompt: String,
    options: Vec<String>,
    chosen: Option<usize>,
    player_data: HumanoidData,
    transition: bool,
}

impl DecisionController {
    pub fn new(prompt: impl Into<String>, options: Vec<String>, player_data: HumanoidData) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            chosen: None,
            player_data,
            transition: false,
        }
    }

    pub fn transition(text: impl Into<String>, player_data: HumanoidData) -> Self {
        Self {
            transition: true,
            ..Self::new(text, vec![SceneSpec::CONTINUE.to_string()], player_data)
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}

impl Controller for DecisionController {
    fn kind(&self) -> &'static str {
        if self.transition { "transition" } else { "decision" }
    }

    fn update(&mut self, _frame: &mut Frame<'_>, _audio: &mut dyn AudioSink) {}

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_text(&self.prompt, 0);
        for (index, option) in self.options.iter().enumerate() {
            canvas.draw_text(&format!("{}) {}", index + 1, option), index + 2);
        }
    }

    fn set_player_data(&mut self, data: HumanoidData) {
        self.player_data = data;
    }

    fn player_data(&self) -> HumanoidData {
        self.player_data.clone()
    }

    fn select(&mut self, option: usize) {
        if option < self.options.len() {
            self.chosen = Some(option);
        } else {
            tracing::debug!(option, available = self.options.len(), "ignoring out-of-range option");
        }
    }

    fn take_decision(&mut self) -> Option<usize> {
        self.chosen.take()
    }
}
