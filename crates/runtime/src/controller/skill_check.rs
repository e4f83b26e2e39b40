use game_core::{AudioSink, Canvas, Frame, HumanoidData};
use rand::Rng;

use super::Controller;

/// Outcome index of a passed check.
pub const SUCCESS: usize = 0;
/// Outcome index of a failed check.
pub const FAILURE: usize = 1;

/// A single die roll against one of the player's skills.
///
/// The die is rolled on the first update: `roll + skill >= difficulty`
/// succeeds.
#[derive(Clone, Debug)]
pub struct SkillCheckController {
    prompt: String,
    skill: String,
    difficulty: u32,
    player_data: HumanoidData,
    roll: Option<u32>,
    outcome: Option<usize>,
}

impl SkillCheckController {
    pub fn new(
        prompt: impl Into<String>,
        skill: impl Into<String>,
        difficulty: u32,
        player_data: HumanoidData,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            skill: skill.into(),
            difficulty,
            player_data,
            roll: None,
            outcome: None,
        }
    }

    /// Die result, once rolled.
    pub fn roll(&self) -> Option<u32> {
        self.roll
    }

    fn total(&self, roll: u32) -> u32 {
        roll + self.player_data.skill(&self.skill)
    }
}

impl Controller for SkillCheckController {
    fn kind(&self) -> &'static str {
        "skill_check"
    }

    fn update(&mut self, frame: &mut Frame<'_>, _audio: &mut dyn AudioSink) {
        if self.roll.is_some() {
            return;
        }

        let die = frame.config.skill_die.max(1);
        let roll = frame.rng.gen_range(1..=die);
        let total = self.total(roll);
        let outcome = if total >= self.difficulty { SUCCESS } else { FAILURE };

        tracing::debug!(
            skill = %self.skill,
            roll,
            total,
            difficulty = self.difficulty,
            success = outcome == SUCCESS,
            "skill check rolled"
        );
        self.roll = Some(roll);
        self.outcome = Some(outcome);
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_text(&self.prompt, 0);
        canvas.draw_text(&format!("{} (need {})", self.skill, self.difficulty), 1);
        if let Some(roll) = self.roll {
            let skill = self.player_data.skill(&self.skill);
            canvas.draw_text(
                &format!("rolled {} + {} = {}", roll, skill, self.total(roll)),
                2,
            );
        }
    }

    fn set_player_data(&mut self, data: HumanoidData) {
        self.player_data = data;
    }

    fn player_data(&self) -> HumanoidData {
        self.player_data.clone()
    }

    fn take_decision(&mut self) -> Option<usize> {
        self.outcome.take()
    }
}
